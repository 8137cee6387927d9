//! Export/import payload for automation lanes.
//!
//! The snapshot is the only persistence surface this crate owns: a flat list
//! of lane records, independent of the engine's internal caches. Field
//! absence is tolerated on import — missing ids get fresh ones, flags default
//! to true, and colors fall back to the palette.

use crate::curve::{AutomationPoint, CurveKind};
use crate::error::Result;
use crate::lane::AutomationLane;
use crate::state::RecordState;
use crescendo_core::{LaneColor, LaneId, TrackId};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of every lane in an engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationSnapshot {
    #[serde(default)]
    pub lanes: Vec<LaneRecord>,
}

impl AutomationSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One serialized lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneRecord {
    /// Absent on records authored outside the engine; import assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LaneId>,
    pub track_id: TrackId,
    /// The string parameter key, e.g. `"volume"` or
    /// `"effect.<uuid>.cutoff"`.
    pub parameter: String,
    #[serde(default)]
    pub points: Vec<PointRecord>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub state: RecordState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<LaneColor>,
}

impl From<&AutomationLane> for LaneRecord {
    fn from(lane: &AutomationLane) -> Self {
        Self {
            id: Some(lane.id),
            track_id: lane.track,
            parameter: lane.target.key(),
            points: lane.points().iter().map(PointRecord::from).collect(),
            enabled: lane.enabled,
            visible: lane.visible,
            state: lane.state,
            color: Some(lane.color),
        }
    }
}

/// One serialized control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub time: f64,
    pub value: f32,
    #[serde(default)]
    pub curve: CurveKind,
}

impl From<&AutomationPoint> for PointRecord {
    fn from(point: &AutomationPoint) -> Self {
        Self {
            time: point.time,
            value: point.value,
            curve: point.curve,
        }
    }
}

impl From<PointRecord> for AutomationPoint {
    fn from(record: PointRecord) -> Self {
        AutomationPoint::with_curve(record.time, record.value, record.curve)
    }
}

fn default_true() -> bool {
    true
}
