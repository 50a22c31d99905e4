//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation and feed
//! the render boundary.
//!
//! Submodules overview
//! - [`animation`] – advance pooled playback instances, apply frames to sprites
//! - [`render`] – resolve instances into draw parameters, build z-sorted batches
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod render;
pub mod time;
