//! Headless tick driver.
//!
//! [`Engine`] owns one ECS [`World`] with the animation resources installed
//! and a [`Schedule`] that runs the subsystem in the required order:
//! time update → frame advancement → sprite frame application. The render
//! pass (draw-list building) is invoked by the caller after [`Engine::tick`],
//! strictly before any drawing.
//!
//! The engine is an explicit context: two `Engine` values are two fully
//! independent animation worlds with their own pools, definitions and
//! clocks. There is no process-wide state anywhere in the crate.

use bevy_ecs::prelude::*;

use crate::events::animation::AnimationFinished;
use crate::resources::animationpool::AnimationPool;
use crate::resources::animationset::{AnimationSetError, AnimationSetIndex, load_animation_set};
use crate::resources::animationstore::AnimationStore;
use crate::resources::sheetstore::SheetStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{advance_animations, apply_animation_frames};
use crate::systems::time::update_world_time;

/// One animation world and its per-tick schedule.
pub struct Engine {
    world: World,
    schedule: Schedule,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a world with empty stores and the tick systems wired up.
    pub fn new() -> Self {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        world.insert_resource(SheetStore::new());
        world.insert_resource(AnimationStore::new());
        world.insert_resource(AnimationPool::new());
        world.init_resource::<Messages<AnimationFinished>>();

        let mut schedule = Schedule::default();
        schedule.add_systems((advance_animations, apply_animation_frames).chain());

        Self { world, schedule }
    }

    /// Register the sheets and animations of a set file into this world.
    pub fn load_content(&mut self, json: &str) -> Result<AnimationSetIndex, AnimationSetError> {
        self.world
            .resource_scope(|world, mut sheets: Mut<SheetStore>| {
                let mut defs = world.resource_mut::<AnimationStore>();
                load_animation_set(json, &mut sheets, &mut defs)
            })
    }

    /// Run one simulation tick with the given unscaled delta in seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world
            .resource_mut::<Messages<AnimationFinished>>()
            .update();
    }

    /// Take all pending finished-playback messages.
    ///
    /// Convenience for drivers that poll instead of running a
    /// `MessageReader` system.
    pub fn drain_finished(&mut self) -> Vec<AnimationFinished> {
        self.world
            .resource_mut::<Messages<AnimationFinished>>()
            .drain()
            .collect()
    }

    /// The underlying world, for queries and resource access.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The underlying world, mutable.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
