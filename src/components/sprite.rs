use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in world units and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet; the animation
/// frame application system overwrites it every tick for animated entities.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement when building draw parameters.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Create a sprite showing the top-left cell of a sheet.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 { x: 0.0, y: 0.0 },
            flip_h: false,
        }
    }
}
