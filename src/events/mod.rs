//! Event types exchanged across systems.
//!
//! Submodules:
//! - [`animation`] – end-of-playthrough notifications for non-looping instances
pub mod animation;
