//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world. The animation subsystem keeps playback state in a
//! pooled resource; the components here are the thin per-entity surface the
//! systems read and write.
//!
//! Submodules overview:
//! - [`animation`] – handle linking an entity to a pooled playback instance
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation applied in draw parameters
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod mapposition;
pub mod sprite;
pub mod tint;
pub mod zindex;
