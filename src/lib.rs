//! # Crescendo - Parameter Automation Engine
//!
//! Time-indexed automation curves for track and effect parameters.
//!
//! ## Architecture
//!
//! Crescendo is an umbrella crate that coordinates:
//! - **crescendo-core** - Parameter domain model (targets, ranges, colors,
//!   mixer state)
//! - **crescendo-automation** - Lanes, curves, record states, the engine,
//!   and snapshot export/import
//!
//! ## Quick Start
//!
//! ```
//! use crescendo::prelude::*;
//!
//! // One engine per session; no global state.
//! let mut engine = AutomationEngine::new();
//! let track_id = TrackId::fresh();
//!
//! // A smooth volume fade-in over eight beats.
//! let lane = engine.create_lane(track_id, "volume");
//! let _ = engine.add_point(lane, 0.0, 0.0, CurveKind::Smooth);
//! let _ = engine.add_point(lane, 8.0, 1.0, CurveKind::Linear);
//!
//! // The playback driver ticks the apply step with transport time.
//! let mut track = TrackState::new(track_id);
//! engine.apply_track_automation(&mut track, 4.0);
//! assert_eq!(track.volume, 0.5);
//! ```

/// Re-export of crescendo-core for direct access
pub use crescendo_core as core;

/// Re-export of crescendo-automation for direct access
pub use crescendo_automation as automation;

// Domain model
pub use crescendo_core::{
    EffectId, EffectState, LaneColor, LaneId, ParamRange, ParamScale, ParamTarget, TrackId,
    TrackParam, TrackState,
};

// Automation engine
pub use crescendo_automation::{
    AutomationEngine, AutomationLane, AutomationPoint, AutomationSnapshot, Curve, CurveKind,
    EditOutcome, LaneRecord, PointRecord, RecordState, SkipReason,
};

mod error;

pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{
        AutomationEngine, AutomationPoint, AutomationSnapshot, Curve, CurveKind, EditOutcome,
        EffectId, EffectState, LaneId, ParamTarget, RecordState, SkipReason, TrackId, TrackParam,
        TrackState,
    };
}
