//! Parameter targets and value ranges for automation.
//!
//! A lane addresses a parameter through a [`ParamTarget`], parsed **once**
//! from its string key when the lane is created or imported — never re-parsed
//! on the apply path. Track parameters form a closed set ([`TrackParam`]);
//! effect parameters carry a structured `{effect, param}` key; anything else
//! is retained verbatim as a UI-only target and ignored by the apply paths.
//!
//! # Example
//!
//! ```
//! use crescendo_core::{ParamTarget, TrackParam};
//!
//! assert_eq!(ParamTarget::parse("volume"), ParamTarget::Track(TrackParam::Volume));
//!
//! // Effect keys follow `effect.<effect-uuid>.<param-name>`
//! let target = ParamTarget::parse("effect.550e8400-e29b-41d4-a716-446655440000.cutoff");
//! assert!(matches!(target, ParamTarget::Effect { .. }));
//!
//! // Unknown keys survive round-trips but never touch live state
//! assert!(matches!(ParamTarget::parse("ui.zoom"), ParamTarget::Ui(_)));
//! ```

use crate::id::EffectId;
use serde::{Deserialize, Serialize};

/// The closed set of automatable track parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackParam {
    Volume,
    Pan,
    Mute,
    Solo,
}

impl TrackParam {
    /// Canonical string key used in lane records and UI.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            TrackParam::Volume => "volume",
            TrackParam::Pan => "pan",
            TrackParam::Mute => "mute",
            TrackParam::Solo => "solo",
        }
    }

    /// Parse a canonical key back into a track parameter.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "volume" => Some(TrackParam::Volume),
            "pan" => Some(TrackParam::Pan),
            "mute" => Some(TrackParam::Mute),
            "solo" => Some(TrackParam::Solo),
            _ => None,
        }
    }

    /// The range governing clamping for this parameter.
    #[must_use]
    pub fn range(&self) -> ParamRange {
        match self {
            TrackParam::Volume => ParamRange::linear(0.0, 1.0, 1.0),
            TrackParam::Pan => ParamRange::linear(-1.0, 1.0, 0.0),
            TrackParam::Mute | TrackParam::Solo => ParamRange::toggle(false),
        }
    }

    #[must_use]
    pub fn all() -> &'static [TrackParam] {
        &[
            TrackParam::Volume,
            TrackParam::Pan,
            TrackParam::Mute,
            TrackParam::Solo,
        ]
    }
}

impl std::fmt::Display for TrackParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// What a lane addresses, resolved from its string key at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamTarget {
    /// A mixer parameter of the owning track.
    Track(TrackParam),
    /// A named parameter of an effect instance, from `effect.<uuid>.<name>`.
    Effect { effect: EffectId, param: String },
    /// Any other key. Kept for forward compatibility, never applied.
    Ui(String),
}

impl ParamTarget {
    /// Resolve a string key into a target. Total: malformed effect keys fall
    /// back to [`ParamTarget::Ui`] rather than erroring.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        if let Some(param) = TrackParam::from_key(key) {
            return ParamTarget::Track(param);
        }

        if let Some(rest) = key.strip_prefix("effect.") {
            // `<uuid>.<param-name>`; the param name may itself contain dots.
            if let Some((id_part, param)) = rest.split_once('.') {
                if let Some(effect) = EffectId::parse(id_part) {
                    if !param.is_empty() {
                        return ParamTarget::Effect {
                            effect,
                            param: param.to_string(),
                        };
                    }
                }
            }
        }

        ParamTarget::Ui(key.to_string())
    }

    /// The canonical string key, suitable for export. Round-trips through
    /// [`ParamTarget::parse`].
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            ParamTarget::Track(param) => param.key().to_string(),
            ParamTarget::Effect { effect, param } => format!("effect.{effect}.{param}"),
            ParamTarget::Ui(key) => key.clone(),
        }
    }
}

/// How a parameter value maps onto its range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ParamScale {
    /// Continuous value, clamped to `[min, max]`.
    #[default]
    Linear,
    /// On/off: anything above the midpoint threshold reads as on.
    Toggle,
}

/// Valid range and default for a parameter, used for clamping automation
/// output before it reaches live state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub scale: ParamScale,
}

impl ParamRange {
    /// Create a linear range.
    ///
    /// `default` is clamped into `[min, max]`.
    pub fn new(min: f32, max: f32, default: f32, scale: ParamScale) -> Self {
        debug_assert!(max > min, "max must be greater than min");
        Self {
            min,
            max,
            default: default.clamp(min, max),
            scale,
        }
    }

    pub fn linear(min: f32, max: f32, default: f32) -> Self {
        Self::new(min, max, default, ParamScale::Linear)
    }

    /// An on/off parameter on the unit range.
    pub fn toggle(default_on: bool) -> Self {
        Self::new(
            0.0,
            1.0,
            if default_on { 1.0 } else { 0.0 },
            ParamScale::Toggle,
        )
    }

    /// Clamp a raw automation value into this range.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Read a raw automation value as a boolean, thresholded strictly above
    /// the range midpoint.
    #[inline]
    #[must_use]
    pub fn as_bool(&self, value: f32) -> bool {
        value > (self.min + self.max) / 2.0
    }

    /// Whether a value lies within the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ParamRange {
    fn default() -> Self {
        Self::linear(0.0, 1.0, 0.5)
    }
}
