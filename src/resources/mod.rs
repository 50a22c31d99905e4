//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationpool` – slot-recycling pool of animation playback instances
//! - `animationset` – JSON loading of sheets and named animation definitions
//! - `animationstore` – immutable animation definitions reused across instances
//! - `playbackconfig` – INI-backed settings for the headless demo driver
//! - `sheetstore` – sprite sheet grid descriptions keyed by stable id
//! - `worldtime` – simulation time and delta
pub mod animationpool;
pub mod animationset;
pub mod animationstore;
pub mod playbackconfig;
pub mod sheetstore;
pub mod worldtime;
