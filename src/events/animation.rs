//! Animation playback events.
//!
//! [`AnimationFinished`] is written by
//! [`advance_animations`](crate::systems::animation::advance_animations) the
//! tick a non-looping instance steps off its last frame and starts holding
//! it. Gameplay code reads it to despawn corpses, chain animations, and so
//! on. Looping instances never finish.

use bevy_ecs::message::Message;

use crate::resources::animationpool::AnimationId;

/// Message emitted once per non-looping playthrough.
///
/// Fires again only if the same slot is re-instantiated. The instance is
/// still resolvable afterwards; it keeps holding its final frame until
/// destroyed.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFinished {
    /// The instance that finished.
    pub instance: AnimationId,
}
