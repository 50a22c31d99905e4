//! Animation systems.
//!
//! - [`advance_animations`] steps every pooled playback instance by the
//!   frame delta and emits [`AnimationFinished`] messages for non-looping
//!   instances that just reached their final frame.
//! - [`apply_animation_frames`] copies each entity's resolved frame into its
//!   visible [`Sprite`](crate::components::sprite::Sprite).
//!
//! # Animation Flow
//!
//! 1. Definitions live in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Playback state lives in [`AnimationPool`](crate::resources::animationpool::AnimationPool)
//! 3. Entities carry an [`Animation`](crate::components::animation::Animation) handle
//! 4. `advance_animations` runs once per tick, after input/physics, before render
//! 5. `apply_animation_frames` updates `Sprite` offset and flip from the pool

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationFinished;
use crate::resources::animationpool::AnimationPool;
use crate::resources::animationstore::AnimationStore;
use crate::resources::sheetstore::SheetStore;
use crate::resources::worldtime::WorldTime;

/// Advance all animation playback by the scaled frame delta.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Mutates every [`AnimationPool`] slot (timer, frame index).
/// - Writes one [`AnimationFinished`] per newly finished instance.
pub fn advance_animations(
    mut pool: ResMut<AnimationPool>,
    defs: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut finished: MessageWriter<AnimationFinished>,
) {
    let done = pool.advance_all(&defs, time.delta);
    finished.write_batch(done.into_iter().map(|instance| AnimationFinished { instance }));
}

/// Copy the current frame of each entity's instance into its sprite.
///
/// Looks up instance → definition → sheet by id on every access and skips
/// entities whose handle no longer resolves (e.g. stale after gameplay
/// destroyed the instance without removing the component).
pub fn apply_animation_frames(
    mut query: Query<(&Animation, &mut Sprite)>,
    pool: Res<AnimationPool>,
    defs: Res<AnimationStore>,
    sheets: Res<SheetStore>,
) {
    for (handle, mut sprite) in query.iter_mut() {
        let Some(state) = pool.get(handle.instance) else {
            continue;
        };
        let Some(def) = defs.get(state.def) else {
            continue;
        };
        let Some(sheet) = sheets.get(def.sheet) else {
            continue;
        };
        let frame = &def.frames[state.current_frame_index];

        // Update the sprite's offset to display the correct frame
        sprite.offset = Vector2 {
            x: frame.column as f32 * sheet.cell_width,
            y: frame.row as f32 * sheet.cell_height,
        };
        sprite.flip_h = state.is_flipped;
    }
}
