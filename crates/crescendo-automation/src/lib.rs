//! # crescendo-automation
//!
//! Parameter automation for Crescendo: sparse, time-indexed control curves
//! per (track, parameter) lane, and the per-tick apply step that writes
//! evaluated values into live mixer state.
//!
//! This crate provides:
//! - **Control points and curves** - [`AutomationPoint`], [`CurveKind`]
//!   (linear, exponential, cosine-smooth segments), and the cached [`Curve`]
//!   evaluator
//! - **Lanes** - [`AutomationLane`], a sorted point list targeting one
//!   parameter of one track or effect
//! - **The engine** - [`AutomationEngine`], owning the lane store and curve
//!   cache, with silent-skip mutation semantics surfaced as [`EditOutcome`]
//! - **Record states** - [`RecordState`] (Off/Play/Write/Touch/Latch)
//! - **Snapshots** - [`AutomationSnapshot`] export/import with tolerant
//!   defaulting
//!
//! ## Quick Start
//!
//! ```rust
//! use crescendo_automation::{AutomationEngine, CurveKind};
//! use crescendo_core::{TrackId, TrackState};
//!
//! let mut engine = AutomationEngine::new();
//! let track_id = TrackId::fresh();
//!
//! // A volume fade over the first eight beats
//! let lane = engine.create_lane(track_id, "volume");
//! let _ = engine.add_point(lane, 0.0, 0.0, CurveKind::Smooth);
//! let _ = engine.add_point(lane, 8.0, 1.0, CurveKind::Linear);
//!
//! // The playback driver calls this once per tick
//! let mut track = TrackState::new(track_id);
//! engine.apply_track_automation(&mut track, 4.0);
//! assert_eq!(track.volume, 0.5);
//! ```
//!
//! ## Evaluation rules
//!
//! - An empty curve reads `0.0`; a single point reads as a constant.
//! - Outside the defined range the boundary value holds (no extrapolation).
//! - Each segment interpolates with the law of its **left** point; the
//!   exponential law demotes to linear when its base would be zero or change
//!   sign, so no NaN can reach a live parameter.
//! - Equal-time points resolve last-inserted-wins.

pub mod curve;
pub mod engine;
pub mod error;
pub mod lane;
pub mod snapshot;
pub mod state;

pub use curve::{AutomationPoint, Curve, CurveKind};
pub use engine::{AutomationEngine, EditOutcome, SkipReason};
pub use error::{Error, Result};
pub use lane::AutomationLane;
pub use snapshot::{AutomationSnapshot, LaneRecord, PointRecord};
pub use state::RecordState;
