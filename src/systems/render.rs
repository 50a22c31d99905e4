//! Render boundary: frame resolution and draw-list building.
//!
//! The renderer itself (window, textures, camera) lives outside this crate.
//! What crosses the boundary is [`SpriteDrawParams`]: texture key, source
//! rectangle in the sheet, destination position, pivot and tint. Everything
//! here is a pure read of world state.
//!
//! - [`resolve`] turns one playback instance into draw parameters.
//! - [`build_draw_list`] collects all sprite entities into a z-sorted batch,
//!   the input of the external render pass.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::animationpool::{AnimationId, AnimationPool};
use crate::resources::animationstore::AnimationStore;
use crate::resources::sheetstore::SheetStore;

/// Draw parameters for one sprite, consumed by the render collaborator.
///
/// `source` selects the sheet cell; a horizontally mirrored sprite carries
/// a negative source width, the raylib convention.
#[derive(Debug, Clone)]
pub struct SpriteDrawParams {
    /// Texture key in the render side's texture store.
    pub tex_key: Arc<str>,
    /// Pixel rectangle inside the sheet texture.
    pub source: Rectangle,
    /// World-space destination of the pivot.
    pub position: Vector2,
    /// Pivot in pixels relative to the cell's top-left.
    pub origin: Vector2,
    /// Color modulation; `Color::WHITE` draws the texture unchanged.
    pub tint: Color,
}

/// Resolve an instance's current frame into draw parameters.
///
/// Pure read: instance → definition → sheet → frame, all by id. Returns
/// `None` when the instance id is out of range, like
/// [`AnimationPool::get`]. A destroyed instance still resolves as long as
/// its slot exists; liveness is the caller's concern.
pub fn resolve(
    pool: &AnimationPool,
    defs: &AnimationStore,
    sheets: &SheetStore,
    id: AnimationId,
    position: Vector2,
    tint: Color,
) -> Option<SpriteDrawParams> {
    let state = pool.get(id)?;
    let def = defs.get(state.def)?;
    let sheet = sheets.get(def.sheet)?;
    let frame = def.frames.get(state.current_frame_index)?;
    Some(SpriteDrawParams {
        tex_key: sheet.tex_key.clone(),
        source: sheet.source_rect(frame.row, frame.column, state.is_flipped),
        position,
        origin: Vector2 { x: 0.0, y: 0.0 },
        tint,
    })
}

/// Collect the world's sprites into a z-sorted draw batch.
///
/// Queries `(Sprite, MapPosition, Option<Tint>, Option<ZIndex>)`, sorts by
/// z (missing z draws at 0) and emits one [`SpriteDrawParams`] per entity.
/// Runs after [`apply_animation_frames`](crate::systems::animation::apply_animation_frames)
/// so animated sprites carry their current frame offset.
pub fn build_draw_list(world: &mut World) -> Vec<SpriteDrawParams> {
    let mut to_draw: Vec<(Sprite, MapPosition, Option<Tint>, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, Option<&Tint>, Option<&ZIndex>)>();
        q.iter(world)
            .map(|(s, p, t, z)| (s.clone(), *p, t.copied(), z.copied().unwrap_or(ZIndex(0))))
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, z)| *z);

    to_draw
        .into_iter()
        .map(|(sprite, pos, tint, _z)| {
            // Source rect selects a frame from the spritesheet
            let mut source = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };
            // Displace x to the right and set width to negative to flip the sprite horizontally
            if sprite.flip_h {
                source.x += source.width;
                source.width = -source.width;
            }
            SpriteDrawParams {
                tex_key: Arc::from(sprite.tex_key.as_str()),
                source,
                position: pos.pos,
                origin: sprite.origin,
                tint: tint.map(|t| t.color).unwrap_or(Color::WHITE),
            }
        })
        .collect()
}
