//! The automation engine: lane store, curve cache, and apply semantics.
//!
//! An [`AutomationEngine`] is an explicit instance constructed per session —
//! there is no global registry. It owns two keyed containers: the lanes
//! themselves and a cache of evaluated [`Curve`] snapshots, rebuilt
//! synchronously inside every point mutation. A cached curve is therefore
//! never stale when the next evaluation runs.
//!
//! Mutations take `&mut self`, queries and the per-tick apply paths take
//! `&self`; the borrow checker serializes edits against evaluation, which is
//! the single-writer model the engine assumes. A host that shards applies
//! across threads wraps the engine in its own lock.
//!
//! Point mutations never error: editing races against UI teardown are
//! routine during live recording, so a missing lane or stale index is a
//! skip, not a failure. The outcome type says which.
//!
//! # Example
//!
//! ```
//! use crescendo_automation::{AutomationEngine, CurveKind};
//! use crescendo_core::{TrackId, TrackState};
//!
//! let mut engine = AutomationEngine::new();
//! let track_id = TrackId::fresh();
//!
//! let lane = engine.create_lane(track_id, "volume");
//! let _ = engine.add_point(lane, 0.0, 0.0, CurveKind::Linear);
//! let _ = engine.add_point(lane, 8.0, 1.0, CurveKind::Linear);
//!
//! let mut track = TrackState::new(track_id);
//! engine.apply_track_automation(&mut track, 4.0);
//! assert_eq!(track.volume, 0.5);
//! ```

use crate::curve::{AutomationPoint, Curve, CurveKind};
use crate::lane::AutomationLane;
use crate::snapshot::{AutomationSnapshot, LaneRecord};
use crate::state::RecordState;
use crescendo_core::{
    EffectState, LaneColor, LaneId, ParamTarget, TrackId, TrackParam, TrackState,
};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Why a mutation was skipped instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The lane id is not (or no longer) registered.
    UnknownLane,
    /// The point index is out of bounds for the lane.
    IndexOutOfRange,
    /// The lane's record state does not accept live-recorded points.
    NotRecording,
}

/// Outcome of a mutation call. Skips are by design, never errors: a lane
/// deleted by the UI mid-recording must not crash the control path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome {
    Applied,
    Skipped(SkipReason),
}

impl EditOutcome {
    /// Whether the mutation took effect.
    #[inline]
    pub fn applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    /// The skip reason, if the mutation was a no-op.
    #[inline]
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            EditOutcome::Applied => None,
            EditOutcome::Skipped(reason) => Some(*reason),
        }
    }
}

/// Owns all automation lanes of a session and answers value queries against
/// their cached curves.
#[derive(Debug, Default)]
pub struct AutomationEngine {
    lanes: HashMap<LaneId, AutomationLane>,
    curves: HashMap<LaneId, Curve>,
}

impl AutomationEngine {
    /// An engine with no lanes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Lane lifecycle ----

    /// Create an empty lane for `parameter` on `track` and return its id.
    ///
    /// The string key is parsed into a [`ParamTarget`] once, here; apply
    /// ticks never re-parse it. Unknown keys still create a lane — it just
    /// never touches live state.
    pub fn create_lane(&mut self, track: TrackId, parameter: &str) -> LaneId {
        let target = ParamTarget::parse(parameter);
        let lane = AutomationLane::new(track, target);
        let id = lane.id;
        debug!(lane = %id, parameter, "created automation lane");
        self.curves.insert(id, Curve::default());
        self.lanes.insert(id, lane);
        id
    }

    /// Remove one lane and its cached curve.
    pub fn remove_lane(&mut self, lane: LaneId) -> EditOutcome {
        if self.lanes.remove(&lane).is_none() {
            return EditOutcome::Skipped(SkipReason::UnknownLane);
        }
        self.curves.remove(&lane);
        debug!(lane = %lane, "removed automation lane");
        EditOutcome::Applied
    }

    /// Remove every lane (and cached curve) belonging to `track`. Returns
    /// how many lanes were dropped. Used when a track is deleted.
    pub fn delete_lanes_for_track(&mut self, track: TrackId) -> usize {
        let doomed: Vec<LaneId> = self
            .lanes
            .values()
            .filter(|lane| lane.track == track)
            .map(|lane| lane.id)
            .collect();
        for id in &doomed {
            self.lanes.remove(id);
            self.curves.remove(id);
        }
        if !doomed.is_empty() {
            debug!(track = %track, count = doomed.len(), "deleted track lanes");
        }
        doomed.len()
    }

    /// Drop all lanes and curves — a process-wide reset.
    pub fn clear_all(&mut self) {
        self.lanes.clear();
        self.curves.clear();
    }

    // ---- Point mutations ----
    //
    // Each mutation rebuilds the affected lane's curve before returning.

    /// Insert a point into a lane.
    pub fn add_point(&mut self, lane: LaneId, time: f64, value: f32, kind: CurveKind) -> EditOutcome {
        let Some(entry) = self.lanes.get_mut(&lane) else {
            return EditOutcome::Skipped(SkipReason::UnknownLane);
        };
        entry.add_point(AutomationPoint::with_curve(time, value, kind));
        self.curves.insert(lane, Curve::from_points(entry.points()));
        trace!(lane = %lane, time, value, "point added, curve rebuilt");
        EditOutcome::Applied
    }

    /// Insert a live-recorded point, gated on the lane's record state.
    pub fn record_point(&mut self, lane: LaneId, time: f64, value: f32) -> EditOutcome {
        let Some(entry) = self.lanes.get_mut(&lane) else {
            return EditOutcome::Skipped(SkipReason::UnknownLane);
        };
        if !entry.state.can_record() {
            return EditOutcome::Skipped(SkipReason::NotRecording);
        }
        entry.add_point(AutomationPoint::new(time, value));
        self.curves.insert(lane, Curve::from_points(entry.points()));
        trace!(lane = %lane, time, value, "point recorded, curve rebuilt");
        EditOutcome::Applied
    }

    /// Remove the point at `index` from a lane.
    pub fn remove_point(&mut self, lane: LaneId, index: usize) -> EditOutcome {
        let Some(entry) = self.lanes.get_mut(&lane) else {
            return EditOutcome::Skipped(SkipReason::UnknownLane);
        };
        if entry.remove_point(index).is_none() {
            return EditOutcome::Skipped(SkipReason::IndexOutOfRange);
        }
        self.curves.insert(lane, Curve::from_points(entry.points()));
        EditOutcome::Applied
    }

    /// Move the point at `index` to a new time and value.
    pub fn update_point(&mut self, lane: LaneId, index: usize, time: f64, value: f32) -> EditOutcome {
        let Some(entry) = self.lanes.get_mut(&lane) else {
            return EditOutcome::Skipped(SkipReason::UnknownLane);
        };
        if !entry.update_point(index, time, value) {
            return EditOutcome::Skipped(SkipReason::IndexOutOfRange);
        }
        self.curves.insert(lane, Curve::from_points(entry.points()));
        EditOutcome::Applied
    }

    // ---- Flags ----

    /// Enable or disable a lane. Disabling keeps the cached curve, so
    /// re-enabling takes effect immediately without a rebuild.
    pub fn set_enabled(&mut self, lane: LaneId, enabled: bool) -> EditOutcome {
        match self.lanes.get_mut(&lane) {
            Some(entry) => {
                entry.enabled = enabled;
                EditOutcome::Applied
            }
            None => EditOutcome::Skipped(SkipReason::UnknownLane),
        }
    }

    pub fn set_visible(&mut self, lane: LaneId, visible: bool) -> EditOutcome {
        match self.lanes.get_mut(&lane) {
            Some(entry) => {
                entry.visible = visible;
                EditOutcome::Applied
            }
            None => EditOutcome::Skipped(SkipReason::UnknownLane),
        }
    }

    pub fn set_record_state(&mut self, lane: LaneId, state: RecordState) -> EditOutcome {
        match self.lanes.get_mut(&lane) {
            Some(entry) => {
                entry.state = state;
                EditOutcome::Applied
            }
            None => EditOutcome::Skipped(SkipReason::UnknownLane),
        }
    }

    // ---- Queries ----

    /// Value of a lane's curve at `time`; `0.0` when the lane is unknown.
    #[must_use]
    pub fn value_at(&self, lane: LaneId, time: f64) -> f32 {
        self.curves
            .get(&lane)
            .map(|curve| curve.value_at(time))
            .unwrap_or(0.0)
    }

    /// As [`value_at`](Self::value_at), wrapping times at or past `loop_end`
    /// back into the loop range. Unknown lanes still read `0.0`.
    pub fn value_at_looped(
        &self,
        lane: LaneId,
        time: f64,
        loop_start: f64,
        loop_end: f64,
    ) -> crate::error::Result<f32> {
        match self.curves.get(&lane) {
            Some(curve) => Ok(curve.value_at_looped(time, loop_start, loop_end)?),
            None => Ok(0.0),
        }
    }

    #[must_use]
    pub fn lane(&self, lane: LaneId) -> Option<&AutomationLane> {
        self.lanes.get(&lane)
    }

    /// Read-only view of the lanes targeting `track`. Order is unspecified.
    #[must_use]
    pub fn lanes_for_track(&self, track: TrackId) -> Vec<&AutomationLane> {
        self.lanes
            .values()
            .filter(|lane| lane.track == track)
            .collect()
    }

    /// All lanes, in unspecified order.
    pub fn all_lanes(&self) -> impl Iterator<Item = &AutomationLane> {
        self.lanes.values()
    }

    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    // ---- Apply ----

    /// Apply every readable lane of `track` at `time`, writing clamped
    /// values into the mixer fields. Returns the number of lanes applied.
    ///
    /// Effect-targeted and UI-only lanes on the track are skipped here;
    /// disabled lanes are skipped with their cached curve left intact.
    pub fn apply_track_automation(&self, track: &mut TrackState, time: f64) -> usize {
        let mut applied = 0;

        for lane in self.lanes.values() {
            if lane.track != track.id || !lane.is_readable() {
                continue;
            }
            let ParamTarget::Track(param) = &lane.target else {
                continue;
            };
            let Some(curve) = self.curves.get(&lane.id) else {
                continue;
            };

            let value = curve.value_at(time);
            let range = param.range();
            match param {
                TrackParam::Volume => track.volume = range.clamp(value),
                TrackParam::Pan => track.pan = range.clamp(value),
                TrackParam::Mute => track.muted = range.as_bool(value),
                TrackParam::Solo => track.solo = range.as_bool(value),
            }
            applied += 1;
        }

        applied
    }

    /// Apply every readable lane addressing `effect` at `time`.
    ///
    /// Only parameters the effect already declares are written; automation
    /// never creates effect parameters. Returns the number of lanes applied.
    pub fn apply_effect_automation(&self, effect: &mut EffectState, time: f64) -> usize {
        let mut applied = 0;

        for lane in self.lanes.values() {
            if !lane.is_readable() {
                continue;
            }
            let ParamTarget::Effect {
                effect: target_id,
                param,
            } = &lane.target
            else {
                continue;
            };
            if *target_id != effect.id {
                continue;
            }
            let Some(curve) = self.curves.get(&lane.id) else {
                continue;
            };

            let value = curve.value_at(time);
            if effect.set_existing(param, value) {
                applied += 1;
            } else {
                trace!(lane = %lane.id, param = %param, "effect parameter absent, lane skipped");
            }
        }

        applied
    }

    // ---- Export / import ----

    /// Snapshot every lane, independent of the curve cache. Lane order in
    /// the snapshot is unspecified.
    #[must_use]
    pub fn export_all(&self) -> AutomationSnapshot {
        AutomationSnapshot {
            lanes: self.lanes.values().map(LaneRecord::from).collect(),
        }
    }

    /// Insert or overwrite lanes from a snapshot, idempotent by lane id.
    ///
    /// Records without an id get a fresh one; absent flags default to true;
    /// an absent color falls back to the palette for the parsed target.
    /// Each imported lane's curve is rebuilt immediately.
    pub fn import_all(&mut self, snapshot: AutomationSnapshot) {
        let count = snapshot.lanes.len();
        for record in snapshot.lanes {
            let id = record.id.unwrap_or_else(LaneId::fresh);
            let target = ParamTarget::parse(&record.parameter);
            let color = record
                .color
                .unwrap_or_else(|| LaneColor::for_target(&target));

            let mut lane = AutomationLane::new(record.track_id, target);
            lane.id = id;
            lane.enabled = record.enabled;
            lane.visible = record.visible;
            lane.state = record.state;
            lane.color = color;
            lane.set_points(record.points.into_iter().map(Into::into).collect());

            self.curves.insert(id, Curve::from_points(lane.points()));
            self.lanes.insert(id, lane);
        }
        debug!(count, "imported automation lanes");
    }
}
