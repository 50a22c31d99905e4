use bevy_ecs::prelude::Component;

use crate::resources::animationpool::AnimationId;

/// Handle tying an entity to its playback instance in the
/// [`AnimationPool`](crate::resources::animationpool::AnimationPool).
///
/// Playback state is pooled, not stored on the entity; switching an
/// entity's animation means overwriting this handle with a freshly
/// instantiated id (and destroying the old instance).
#[derive(Debug, Clone, Copy, Component)]
pub struct Animation {
    pub instance: AnimationId,
}

impl Animation {
    pub fn new(instance: AnimationId) -> Self {
        Self { instance }
    }
}
