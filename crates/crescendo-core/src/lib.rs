//! # crescendo-core
//!
//! Parameter domain model for the Crescendo automation engine:
//!
//! - **Identifiers** — opaque [`LaneId`], [`TrackId`], [`EffectId`]
//! - **Parameter targets** — [`ParamTarget`] parsed once from string keys,
//!   with the closed [`TrackParam`] set and per-parameter [`ParamRange`]
//!   clamping rules
//! - **Display colors** — [`LaneColor`] with a fixed per-target palette
//! - **Mixer state** — [`TrackState`] and [`EffectState`], the mutable
//!   objects the apply step writes into
//!
//! # Example
//!
//! ```
//! use crescendo_core::{ParamTarget, TrackParam, TrackState, TrackId};
//!
//! let target = ParamTarget::parse("volume");
//! assert_eq!(target, ParamTarget::Track(TrackParam::Volume));
//!
//! // Clamping rules live with the parameter, not the caller
//! let range = TrackParam::Volume.range();
//! assert_eq!(range.clamp(1.5), 1.0);
//!
//! let track = TrackState::new(TrackId::fresh());
//! assert_eq!(track.volume, 1.0);
//! ```

mod color;
mod error;
mod id;
mod mixer;
mod parameter;

pub use color::LaneColor;
pub use error::{Error, Result};
pub use id::{EffectId, LaneId, TrackId};
pub use mixer::{EffectState, TrackState};
pub use parameter::{ParamRange, ParamScale, ParamTarget, TrackParam};
