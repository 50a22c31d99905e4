//! Animation definition registry.
//!
//! This module provides the store for immutable animation templates that can
//! be reused by any number of playback instances. A definition is an ordered
//! frame sequence (sheet cell + display duration per frame) bound to a sprite
//! sheet. Definitions are created once at content-load time, addressed by
//! stable [`AnimationDefId`] afterwards, and never mutated or deleted.
//!
//! Data-driven content can also register definitions under a string name and
//! look them up with [`AnimationStore::lookup`].

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::sheetstore::SheetId;
use crate::store::SlotStore;

/// Fixed per-definition frame capacity.
pub const MAX_FRAMES: usize = 16;

/// One discrete animation step: a sheet cell and how long it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Display duration in seconds.
    pub duration: f32,
    /// Cell row in the sprite sheet.
    pub row: u8,
    /// Cell column in the sprite sheet.
    pub column: u8,
}

/// Stable index of a definition in the [`AnimationStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationDefId(pub usize);

/// Immutable animation template: a frame sequence on one sprite sheet.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    /// Sheet the frames index into. Linked by id, never by reference.
    pub sheet: SheetId,
    /// Ordered frames, at most [`MAX_FRAMES`].
    pub frames: ArrayVec<Frame, MAX_FRAMES>,
}

impl AnimationDef {
    /// Number of frames in the sequence.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Registry of reusable animation definitions, write-once per entry.
#[derive(Resource, Default)]
pub struct AnimationStore {
    defs: SlotStore<AnimationDef>,
    names: FxHashMap<String, AnimationDefId>,
}

impl AnimationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        AnimationStore {
            defs: SlotStore::new(),
            names: FxHashMap::default(),
        }
    }

    /// Copy a frame sequence into a new definition and return its stable id.
    ///
    /// # Panics
    ///
    /// Definitions are build-time content, so an empty frame list or one
    /// longer than [`MAX_FRAMES`] is a programming error and panics.
    pub fn define(&mut self, sheet: SheetId, frames: &[Frame]) -> AnimationDefId {
        assert!(
            !frames.is_empty(),
            "animation definition needs at least one frame"
        );
        assert!(
            frames.len() <= MAX_FRAMES,
            "animation definition has {} frames, capacity is {}",
            frames.len(),
            MAX_FRAMES
        );
        let mut def = AnimationDef {
            sheet,
            frames: ArrayVec::new(),
        };
        def.frames.extend(frames.iter().copied());
        let id = AnimationDefId(self.defs.append(def));
        debug!("defined animation {} with {} frames", id.0, frames.len());
        id
    }

    /// [`define`](Self::define) plus a name binding for data-driven lookup.
    pub fn define_named(
        &mut self,
        name: impl Into<String>,
        sheet: SheetId,
        frames: &[Frame],
    ) -> AnimationDefId {
        let id = self.define(sheet, frames);
        self.names.insert(name.into(), id);
        id
    }

    /// Resolve a definition name registered via [`define_named`](Self::define_named).
    pub fn lookup(&self, name: impl AsRef<str>) -> Option<AnimationDefId> {
        self.names.get(name.as_ref()).copied()
    }

    /// Look up a definition by id.
    pub fn get(&self, id: AnimationDefId) -> Option<&AnimationDef> {
        self.defs.get(id.0)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when nothing has been defined.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
