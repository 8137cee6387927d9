//! Opaque identifiers for lanes, tracks, and effects.
//!
//! Each id is a thin wrapper over a v4 UUID. Wrapping keeps the id spaces
//! distinct at the type level: a `TrackId` cannot be passed where a `LaneId`
//! is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an automation lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneId(Uuid);

/// Identifier of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(Uuid);

/// Identifier of an effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectId(Uuid);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Allocate a fresh identifier.
            #[must_use]
            pub fn fresh() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse from the canonical hyphenated string form.
            pub fn parse(s: &str) -> Option<Self> {
                Uuid::parse_str(s).ok().map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

impl_id!(LaneId);
impl_id!(TrackId);
impl_id!(EffectId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(LaneId::fresh(), LaneId::fresh());
    }

    #[test]
    fn parse_roundtrip() {
        let id = EffectId::fresh();
        assert_eq!(EffectId::parse(&id.to_string()), Some(id));
        assert_eq!(EffectId::parse("not-a-uuid"), None);
    }

    #[test]
    fn serde_transparent() {
        let id = TrackId::fresh();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: TrackId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
