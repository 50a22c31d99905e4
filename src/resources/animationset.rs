//! Data-driven animation set loading.
//!
//! An animation set is a JSON document bundling sprite sheet descriptions
//! and named animations: content tools write it, the engine reads it once at
//! load time.
//!
//! ```json
//! {
//!   "sheets": [
//!     { "name": "player", "tex_key": "player-sheet",
//!       "cell_width": 32, "cell_height": 32, "rows": 4, "columns": 8 }
//!   ],
//!   "animations": [
//!     { "name": "player-run", "sheet": "player", "looped": true,
//!       "frames": [ { "duration": 0.1, "row": 0, "column": 0 },
//!                   { "duration": 0.1, "row": 0, "column": 1 } ] }
//!   ]
//! }
//! ```
//!
//! Unlike programmatic [`define`](crate::resources::animationstore::AnimationStore::define)
//! calls, set files are runtime input: every problem is a recoverable
//! [`AnimationSetError`], and a rejected file registers nothing.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resources::animationstore::{AnimationDefId, AnimationStore, Frame, MAX_FRAMES};
use crate::resources::sheetstore::{SheetId, SheetStore, SpriteSheet};

/// Sheet description entry of a set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEntry {
    pub name: String,
    pub tex_key: String,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: u8,
    pub columns: u8,
}

/// Animation entry of a set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub name: String,
    /// Name of a sheet declared in the same file.
    pub sheet: String,
    /// Default playback mode used by spawning code.
    #[serde(default)]
    pub looped: bool,
    pub frames: Vec<Frame>,
}

/// Parsed shape of a set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSet {
    pub sheets: Vec<SheetEntry>,
    pub animations: Vec<AnimationEntry>,
}

/// Why a set file was rejected. Nothing is registered on any of these.
#[derive(Debug, Error)]
pub enum AnimationSetError {
    #[error("animation set is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate sheet name '{0}'")]
    DuplicateSheet(String),
    #[error("duplicate animation name '{0}'")]
    DuplicateAnimation(String),
    #[error("animation '{name}' references unknown sheet '{sheet}'")]
    UnknownSheet { name: String, sheet: String },
    #[error("animation '{0}' has no frames")]
    EmptyFrames(String),
    #[error("animation '{name}' has {count} frames, capacity is {MAX_FRAMES}")]
    TooManyFrames { name: String, count: usize },
    #[error("frame {frame} of animation '{name}' is outside the sheet grid")]
    FrameOutOfGrid { name: String, frame: usize },
    #[error("frame {frame} of animation '{name}' has a negative duration")]
    NegativeDuration { name: String, frame: usize },
}

/// A definition registered from a set file, with its declared default mode.
#[derive(Debug, Clone, Copy)]
pub struct LoadedAnimation {
    pub def: AnimationDefId,
    pub looped: bool,
}

/// Name → id maps produced by a successful load.
#[derive(Debug, Default)]
pub struct AnimationSetIndex {
    pub sheets: FxHashMap<String, SheetId>,
    pub animations: FxHashMap<String, LoadedAnimation>,
}

impl AnimationSetIndex {
    /// Look up an animation registered from the set.
    pub fn animation(&self, name: impl AsRef<str>) -> Option<LoadedAnimation> {
        self.animations.get(name.as_ref()).copied()
    }

    /// Look up a sheet registered from the set.
    pub fn sheet(&self, name: impl AsRef<str>) -> Option<SheetId> {
        self.sheets.get(name.as_ref()).copied()
    }
}

/// Parse and validate a set file, then register its sheets and animations.
///
/// Validation happens entirely before the first store mutation, so a
/// rejected file leaves both stores untouched.
pub fn load_animation_set(
    json: &str,
    sheets: &mut SheetStore,
    defs: &mut AnimationStore,
) -> Result<AnimationSetIndex, AnimationSetError> {
    let set: AnimationSet = serde_json::from_str(json)?;
    validate(&set, defs)?;

    let mut index = AnimationSetIndex::default();
    for entry in &set.sheets {
        let id = sheets.add(SpriteSheet {
            tex_key: Arc::from(entry.tex_key.as_str()),
            cell_width: entry.cell_width,
            cell_height: entry.cell_height,
            rows: entry.rows,
            columns: entry.columns,
        });
        index.sheets.insert(entry.name.clone(), id);
    }
    for entry in &set.animations {
        // sheet name resolved by validate()
        let sheet = index.sheets[&entry.sheet];
        let def = defs.define_named(entry.name.clone(), sheet, &entry.frames);
        index.animations.insert(
            entry.name.clone(),
            LoadedAnimation {
                def,
                looped: entry.looped,
            },
        );
    }
    Ok(index)
}

fn validate(set: &AnimationSet, defs: &AnimationStore) -> Result<(), AnimationSetError> {
    let mut sheet_grids: FxHashMap<&str, (u8, u8)> = FxHashMap::default();
    for entry in &set.sheets {
        if sheet_grids
            .insert(entry.name.as_str(), (entry.rows, entry.columns))
            .is_some()
        {
            return Err(AnimationSetError::DuplicateSheet(entry.name.clone()));
        }
    }

    let mut seen = FxHashMap::default();
    for entry in &set.animations {
        if seen.insert(entry.name.as_str(), ()).is_some() || defs.lookup(&entry.name).is_some() {
            return Err(AnimationSetError::DuplicateAnimation(entry.name.clone()));
        }
        let Some(&(rows, columns)) = sheet_grids.get(entry.sheet.as_str()) else {
            return Err(AnimationSetError::UnknownSheet {
                name: entry.name.clone(),
                sheet: entry.sheet.clone(),
            });
        };
        if entry.frames.is_empty() {
            return Err(AnimationSetError::EmptyFrames(entry.name.clone()));
        }
        if entry.frames.len() > MAX_FRAMES {
            return Err(AnimationSetError::TooManyFrames {
                name: entry.name.clone(),
                count: entry.frames.len(),
            });
        }
        for (i, frame) in entry.frames.iter().enumerate() {
            if frame.duration < 0.0 {
                return Err(AnimationSetError::NegativeDuration {
                    name: entry.name.clone(),
                    frame: i,
                });
            }
            if frame.row >= rows || frame.column >= columns {
                return Err(AnimationSetError::FrameOutOfGrid {
                    name: entry.name.clone(),
                    frame: i,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_SET: &str = r#"{
        "sheets": [
            { "name": "player", "tex_key": "player-sheet",
              "cell_width": 32, "cell_height": 32, "rows": 2, "columns": 4 }
        ],
        "animations": [
            { "name": "run", "sheet": "player", "looped": true,
              "frames": [
                  { "duration": 0.1, "row": 0, "column": 0 },
                  { "duration": 0.1, "row": 0, "column": 1 },
                  { "duration": 0.1, "row": 0, "column": 2 }
              ] },
            { "name": "die", "sheet": "player",
              "frames": [ { "duration": 0.2, "row": 1, "column": 0 } ] }
        ]
    }"#;

    #[test]
    fn good_set_registers_everything() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let index = load_animation_set(GOOD_SET, &mut sheets, &mut defs).unwrap();

        let run = index.animation("run").unwrap();
        assert!(run.looped);
        assert_eq!(defs.get(run.def).unwrap().frame_count(), 3);
        assert_eq!(defs.lookup("run"), Some(run.def));

        let die = index.animation("die").unwrap();
        assert!(!die.looped);

        let sheet = sheets.get(index.sheet("player").unwrap()).unwrap();
        assert_eq!(sheet.tex_key.as_ref(), "player-sheet");
        assert_eq!(sheet.columns, 4);
    }

    #[test]
    fn bad_json_is_parse_error() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let err = load_animation_set("{ nope", &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(err, AnimationSetError::Parse(_)));
    }

    #[test]
    fn unknown_sheet_rejected_without_partial_registration() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let json = r#"{
            "sheets": [],
            "animations": [
                { "name": "run", "sheet": "missing",
                  "frames": [ { "duration": 0.1, "row": 0, "column": 0 } ] }
            ]
        }"#;
        let err = load_animation_set(json, &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(err, AnimationSetError::UnknownSheet { .. }));
        assert!(defs.is_empty());
        assert!(sheets.is_empty());
    }

    #[test]
    fn out_of_grid_frame_rejected() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let json = r#"{
            "sheets": [
                { "name": "s", "tex_key": "t",
                  "cell_width": 8, "cell_height": 8, "rows": 1, "columns": 1 }
            ],
            "animations": [
                { "name": "a", "sheet": "s",
                  "frames": [ { "duration": 0.1, "row": 0, "column": 1 } ] }
            ]
        }"#;
        let err = load_animation_set(json, &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(
            err,
            AnimationSetError::FrameOutOfGrid { frame: 0, .. }
        ));
        assert!(sheets.is_empty());
    }

    #[test]
    fn duplicate_animation_name_rejected_across_loads() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        load_animation_set(GOOD_SET, &mut sheets, &mut defs).unwrap();
        let err = load_animation_set(GOOD_SET, &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(err, AnimationSetError::DuplicateAnimation(_)));
        // first load still intact, nothing from the second went in
        assert_eq!(defs.len(), 2);
        assert_eq!(sheets.len(), 1);
    }

    #[test]
    fn too_many_frames_rejected() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let frames: Vec<String> = (0..17)
            .map(|_| r#"{ "duration": 0.1, "row": 0, "column": 0 }"#.to_string())
            .collect();
        let json = format!(
            r#"{{
                "sheets": [
                    {{ "name": "s", "tex_key": "t",
                       "cell_width": 8, "cell_height": 8, "rows": 1, "columns": 1 }}
                ],
                "animations": [
                    {{ "name": "a", "sheet": "s", "frames": [{}] }}
                ]
            }}"#,
            frames.join(",")
        );
        let err = load_animation_set(&json, &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(
            err,
            AnimationSetError::TooManyFrames { count: 17, .. }
        ));
    }

    #[test]
    fn negative_duration_rejected() {
        let mut sheets = SheetStore::new();
        let mut defs = AnimationStore::new();
        let json = r#"{
            "sheets": [
                { "name": "s", "tex_key": "t",
                  "cell_width": 8, "cell_height": 8, "rows": 1, "columns": 1 }
            ],
            "animations": [
                { "name": "a", "sheet": "s",
                  "frames": [ { "duration": -0.1, "row": 0, "column": 0 } ] }
            ]
        }"#;
        let err = load_animation_set(json, &mut sheets, &mut defs).unwrap_err();
        assert!(matches!(
            err,
            AnimationSetError::NegativeDuration { frame: 0, .. }
        ));
    }
}
