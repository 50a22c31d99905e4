//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component applies color modulation to entities during
//! rendering: it replaces `Color::WHITE` in the draw parameters built for
//! the render pass.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color tint for rendering modulation.
///
/// When attached to an entity with a [`Sprite`](crate::components::sprite::Sprite),
/// the tint color replaces `Color::WHITE` in its draw parameters.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
