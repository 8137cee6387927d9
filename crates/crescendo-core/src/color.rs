//! Display colors for automation lanes.
//!
//! Colors are display metadata only — they never influence evaluation. The
//! serialized form is the `#rrggbb` hex string used by lane records.

use crate::error::Error;
use crate::parameter::{ParamTarget, TrackParam};
use serde::{Deserialize, Serialize};

/// An RGB lane color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LaneColor(pub [u8; 3]);

impl LaneColor {
    /// Neutral grey used for targets without a palette entry.
    pub const NEUTRAL: LaneColor = LaneColor([0x9e, 0x9e, 0x9e]);

    /// Deterministic default color for a lane target.
    ///
    /// Fixed lookup: each track parameter has its own color, effect targets
    /// share one, and anything else gets [`LaneColor::NEUTRAL`].
    #[must_use]
    pub fn for_target(target: &ParamTarget) -> Self {
        match target {
            ParamTarget::Track(TrackParam::Volume) => LaneColor([0x4c, 0xaf, 0x50]),
            ParamTarget::Track(TrackParam::Pan) => LaneColor([0x21, 0x96, 0xf3]),
            ParamTarget::Track(TrackParam::Mute) => LaneColor([0xf4, 0x43, 0x36]),
            ParamTarget::Track(TrackParam::Solo) => LaneColor([0xff, 0xc1, 0x07]),
            ParamTarget::Effect { .. } => LaneColor([0x9c, 0x27, 0xb0]),
            ParamTarget::Ui(_) => LaneColor::NEUTRAL,
        }
    }

    /// Parse a `#rrggbb` string.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        Ok(LaneColor([channel(0), channel(2), channel(4)]))
    }
}

impl std::fmt::Display for LaneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl TryFrom<String> for LaneColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        LaneColor::parse(&s)
    }
}

impl From<LaneColor> for String {
    fn from(color: LaneColor) -> String {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_roundtrip() {
        let color = LaneColor::parse("#2196f3").unwrap();
        assert_eq!(color, LaneColor([0x21, 0x96, 0xf3]));
        assert_eq!(color.to_string(), "#2196f3");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(LaneColor::parse("2196f3").is_err());
        assert!(LaneColor::parse("#21f").is_err());
        assert!(LaneColor::parse("#21f9zz").is_err());
    }

    #[test]
    fn palette_is_deterministic() {
        let target = ParamTarget::Track(TrackParam::Volume);
        assert_eq!(LaneColor::for_target(&target), LaneColor::for_target(&target));
        assert_eq!(
            LaneColor::for_target(&ParamTarget::Ui("ui.zoom".into())),
            LaneColor::NEUTRAL
        );
    }

    #[test]
    fn serde_uses_hex_string() {
        let color = LaneColor([0xf4, 0x43, 0x36]);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#f44336\"");
        let back: LaneColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<LaneColor>("\"red\"").is_err());
    }
}
