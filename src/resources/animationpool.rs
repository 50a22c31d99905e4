//! Animation instance pool and frame advancement.
//!
//! Playback state lives here, not on entities: one [`AnimationState`] per
//! playing animation, stored in a slot-recycling pool and addressed by
//! [`AnimationId`]. Entities reference their instance through the thin
//! [`Animation`](crate::components::animation::Animation) handle component.
//!
//! Destroying an instance only clears its liveness flag; the slot is found
//! and reused by the next [`instantiate`](AnimationPool::instantiate) scan.
//! That bounds pool growth to the high-water mark of concurrently playing
//! animations, at the cost of an O(n) scan per instantiation. Instantiation
//! is rare next to per-tick updates, so the scan stays.
//!
//! Instances link to their definition by [`AnimationDefId`], never by
//! reference. The definition is looked up again on every access.

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use smallvec::SmallVec;
use thiserror::Error;

use crate::resources::animationstore::{AnimationDefId, AnimationStore};
use crate::store::SlotStore;

/// Stable slot index of a playback instance in the [`AnimationPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub usize);

/// Creation-time failures of the instance pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// The referenced definition does not exist. Usually a content-loading
    /// or ordering bug; callers that consider it irrecoverable `expect` it.
    #[error("animation definition {0:?} not found")]
    DefinitionNotFound(AnimationDefId),
}

/// Mutable playback state of one animation instance.
#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    /// Definition this instance plays, linked by stable id.
    pub def: AnimationDefId,
    /// Seconds left on the current frame. Goes negative transiently within
    /// a tick; reset to the next frame's full duration on transition.
    pub current_frame_time: f32,
    /// Index of the displayed frame, always within `[0, frame_count)`.
    pub current_frame_index: usize,
    /// Whether playback wraps at the end or holds the last frame.
    pub does_loop: bool,
    /// Liveness flag; cleared by destroy, slot reused while false.
    pub is_active: bool,
    /// Horizontal mirror, written by gameplay code, read by the resolver.
    pub is_flipped: bool,
    /// Latch so a finished non-looping playthrough is reported once.
    finished: bool,
}

impl AnimationState {
    /// True once a non-looping instance has held its final frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Slot-recycling pool of animation playback instances.
#[derive(Resource, Default)]
pub struct AnimationPool {
    slots: SlotStore<AnimationState>,
}

impl AnimationPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        AnimationPool {
            slots: SlotStore::new(),
        }
    }

    /// Start playback of a definition, reusing the first free slot.
    ///
    /// All mutable fields are reset; the frame timer is primed with frame
    /// 0's duration so the first frame gets its full display time. The
    /// returned id is the caller's handle for the lifetime of the instance.
    pub fn instantiate(
        &mut self,
        defs: &AnimationStore,
        def: AnimationDefId,
        does_loop: bool,
    ) -> Result<AnimationId, AnimationError> {
        let Some(adef) = defs.get(def) else {
            return Err(AnimationError::DefinitionNotFound(def));
        };
        let state = AnimationState {
            def,
            current_frame_time: adef.frames[0].duration,
            current_frame_index: 0,
            does_loop,
            is_active: true,
            is_flipped: false,
            finished: false,
        };

        // try to find a free slot before growing the pool
        let mut reused = None;
        for (index, slot) in self.slots.iter_mut() {
            if !slot.is_active {
                *slot = state;
                reused = Some(index);
                break;
            }
        }
        let index = reused.unwrap_or_else(|| self.slots.append(state));
        debug!("animation instance {} playing definition {}", index, def.0);
        Ok(AnimationId(index))
    }

    /// Stop an instance. Its slot becomes eligible for reuse.
    ///
    /// Destroying an id that was never handed out is a logged no-op;
    /// destroying an already-inactive instance is a silent one.
    pub fn destroy(&mut self, id: AnimationId) {
        match self.slots.get_mut(id.0) {
            Some(state) => state.is_active = false,
            None => warn!("destroy of unknown animation instance {}", id.0),
        }
    }

    /// Look up an instance by id.
    pub fn get(&self, id: AnimationId) -> Option<&AnimationState> {
        self.slots.get(id.0)
    }

    /// Look up an instance by id for mutation (e.g. to set `is_flipped`).
    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut AnimationState> {
        self.slots.get_mut(id.0)
    }

    /// Number of slots, live or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no instance was ever created.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Advance every slot by `dt` seconds and report newly finished ones.
    ///
    /// At most one frame step is taken per call no matter how large `dt`
    /// is; a tick slower than the frame durations slows playback rather
    /// than skipping frames. When a frame expires the timer snaps to the
    /// new frame's full duration, discarding the negative remainder.
    ///
    /// Inactive slots are advanced too. They still carry a valid
    /// definition id and their state is overwritten on reuse, so the wasted
    /// work is harmless.
    ///
    /// The returned ids are the active non-looping instances that reached
    /// and now hold their final frame during this call; each instance is
    /// reported once per playthrough.
    pub fn advance_all(&mut self, defs: &AnimationStore, dt: f32) -> SmallVec<[AnimationId; 4]> {
        let mut finished = SmallVec::new();
        for (index, state) in self.slots.iter_mut() {
            let Some(adef) = defs.get(state.def) else {
                continue;
            };
            state.current_frame_time -= dt;
            if state.current_frame_time <= 0.0 {
                state.current_frame_index += 1;

                // loop or stay on last frame
                if state.current_frame_index == adef.frame_count() {
                    if state.does_loop {
                        state.current_frame_index = 0;
                    } else {
                        state.current_frame_index -= 1;
                        if state.is_active && !state.finished {
                            state.finished = true;
                            finished.push(AnimationId(index));
                        }
                    }
                }
                state.current_frame_time = adef.frames[state.current_frame_index].duration;
            }
        }
        finished
    }
}
