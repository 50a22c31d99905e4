//! Sprite sheet registry.
//!
//! A [`SpriteSheet`] describes the grid layout of one sheet texture: the
//! texture key (owned by whatever texture store the renderer keeps), the
//! pixel size of one cell and the grid extent. The store hands out stable
//! [`SheetId`]s; animation definitions link to sheets by id only.
//!
//! No texture memory is owned here. The renderer resolves `tex_key` against
//! its own loaded textures when it consumes
//! [`SpriteDrawParams`](crate::systems::render::SpriteDrawParams).

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

use crate::store::SlotStore;

/// Stable index of a registered sheet in the [`SheetStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub usize);

/// Grid description of one sprite sheet texture.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// Texture key in the render side's texture store.
    pub tex_key: Arc<str>,
    /// Width of one cell in pixels.
    pub cell_width: f32,
    /// Height of one cell in pixels.
    pub cell_height: f32,
    /// Number of cell rows in the sheet.
    pub rows: u8,
    /// Number of cell columns in the sheet.
    pub columns: u8,
}

impl SpriteSheet {
    /// Pixel rectangle of the cell at (row, column).
    ///
    /// A flipped sprite is expressed the raylib way: the x origin moves one
    /// cell to the right and the width goes negative.
    pub fn source_rect(&self, row: u8, column: u8, flipped: bool) -> Rectangle {
        let mut rect = Rectangle {
            x: column as f32 * self.cell_width,
            y: row as f32 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        };
        if flipped {
            rect.x += rect.width;
            rect.width = -rect.width;
        }
        rect
    }

    /// True when (row, column) addresses a cell inside the grid.
    pub fn contains_cell(&self, row: u8, column: u8) -> bool {
        row < self.rows && column < self.columns
    }
}

/// Registry of sprite sheet descriptions, write-once per entry.
#[derive(Resource, Debug, Default)]
pub struct SheetStore {
    sheets: SlotStore<SpriteSheet>,
}

impl SheetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SheetStore {
            sheets: SlotStore::new(),
        }
    }

    /// Register a sheet and return its stable id.
    pub fn add(&mut self, sheet: SpriteSheet) -> SheetId {
        SheetId(self.sheets.append(sheet))
    }

    /// Look up a sheet by id.
    pub fn get(&self, id: SheetId) -> Option<&SpriteSheet> {
        self.sheets.get(id.0)
    }

    /// Number of registered sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// True when no sheet has been registered.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
