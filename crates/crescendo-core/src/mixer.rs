//! Live mixer state written by the automation engine.
//!
//! These are the external collaborators of the apply step: the engine writes
//! their fields each tick and reads nothing back except the id used for lane
//! filtering. Ownership stays with the playback driver.

use crate::id::{EffectId, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mutable per-track mixer state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackState {
    pub id: TrackId,
    pub volume: f32,
    pub pan: f32,
    pub muted: bool,
    pub solo: bool,
}

impl TrackState {
    /// A track at unity volume, centered pan.
    #[must_use]
    pub fn new(id: TrackId) -> Self {
        Self {
            id,
            volume: 1.0,
            pan: 0.0,
            muted: false,
            solo: false,
        }
    }
}

/// Mutable state of one effect instance: a map from parameter name to value.
///
/// Automation only ever writes keys that already exist; an absent key means
/// the effect does not expose that parameter and the write is skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectState {
    pub id: EffectId,
    pub params: HashMap<String, f32>,
}

impl EffectState {
    #[must_use]
    pub fn new(id: EffectId) -> Self {
        Self {
            id,
            params: HashMap::new(),
        }
    }

    /// Declare a parameter with its initial value.
    pub fn insert_param(&mut self, name: impl Into<String>, value: f32) {
        self.params.insert(name.into(), value);
    }

    /// Overwrite a parameter only if it already exists. Returns whether the
    /// write happened.
    pub fn set_existing(&mut self, name: &str, value: f32) -> bool {
        match self.params.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current value of a parameter, if declared.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<f32> {
        self.params.get(name).copied()
    }
}
