//! Flipbook: sprite-sheet animation playback for a 2D engine.
//!
//! The crate owns the animation subsystem of a tick-driven 2D engine:
//! immutable animation definitions, a slot-recycling pool of playback
//! instances, deterministic per-tick frame advancement with loop/clamp
//! semantics, and resolution of the current frame into renderable
//! sprite-sheet draw parameters. Rendering, physics, input and audio are
//! external collaborators.
//!
//! Built on:
//! - **bevy_ecs** for resources, components, messages and the tick schedule
//! - **raylib** types at the render boundary (vectors, rectangles, colors)
//!
//! # Module Structure
//!
//! - [`store`] – generic growable storage with stable indices
//! - [`components`] – per-entity surface (sprite, position, tint, handles)
//! - [`resources`] – sheet/definition registries, instance pool, time, config
//! - [`systems`] – frame advancement, sprite application, render boundary
//! - [`events`] – end-of-playthrough notifications
//! - [`engine`] – headless driver owning one world and its schedule

pub mod components;
pub mod engine;
pub mod events;
pub mod resources;
pub mod store;
pub mod systems;
