//! Automation lanes.
//!
//! A lane is the owned, editable point list for one (track, parameter) pair,
//! plus its display and record flags. The point list is kept sorted
//! ascending by time across every mutation; equal-time points keep insertion
//! order, so the most recently written point wins during evaluation.

use crate::curve::AutomationPoint;
use crate::state::RecordState;
use crescendo_core::{LaneColor, LaneId, ParamTarget, TrackId};
use serde::{Deserialize, Serialize};

/// One automation lane: the points targeting a single parameter of a single
/// track or effect.
///
/// The lane holds only an identifier back-reference to its track; resolution
/// happens at apply time and is never assumed valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationLane {
    pub id: LaneId,
    pub track: TrackId,
    pub target: ParamTarget,
    points: Vec<AutomationPoint>,
    pub enabled: bool,
    pub visible: bool,
    pub state: RecordState,
    pub color: LaneColor,
}

impl AutomationLane {
    /// A fresh, empty lane for `target` on `track`: enabled, visible, in
    /// [`RecordState::Play`], colored from the palette.
    #[must_use]
    pub fn new(track: TrackId, target: ParamTarget) -> Self {
        let color = LaneColor::for_target(&target);
        Self {
            id: LaneId::fresh(),
            track,
            target,
            points: Vec::new(),
            enabled: true,
            visible: true,
            state: RecordState::default(),
            color,
        }
    }

    /// Whether apply ticks should read this lane at all.
    #[must_use]
    #[inline]
    pub fn is_readable(&self) -> bool {
        self.enabled && self.state.reads_automation()
    }

    #[must_use]
    pub fn points(&self) -> &[AutomationPoint] {
        &self.points
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Insert a point, keeping the list sorted. Always appends then
    /// re-sorts; the stable sort leaves the new point after any existing
    /// point with the same time.
    pub fn add_point(&mut self, point: AutomationPoint) {
        self.points.push(point);
        self.sort_points();
    }

    /// Remove the point at `index`. Out-of-range indices return `None` and
    /// leave the lane untouched.
    pub fn remove_point(&mut self, index: usize) -> Option<AutomationPoint> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Move the point at `index` to a new time and value, then re-sort
    /// (the time may have crossed its neighbors). Returns whether the index
    /// was valid.
    pub fn update_point(&mut self, index: usize, time: f64, value: f32) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        point.time = time.max(0.0);
        point.value = value;
        self.sort_points();
        true
    }

    /// Replace the whole point list, restoring sort order. Used by import.
    pub fn set_points(&mut self, points: Vec<AutomationPoint>) {
        self.points = points;
        self.sort_points();
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    fn sort_points(&mut self) {
        self.points
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
    }
}
