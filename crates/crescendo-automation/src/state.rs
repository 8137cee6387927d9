//! Record states for automation lanes.
//!
//! | State | Description |
//! |-------|-------------|
//! | Off   | Ignores automation, manual value only |
//! | Play  | Reads the curve, no recording |
//! | Write | Records incoming values, overwrites existing points |
//! | Touch | Records while the control is held, reads otherwise |
//! | Latch | Records from first touch onward, reads otherwise |
//!
//! The engine only distinguishes "reads" from "records"; the touch/release
//! lifecycle that separates Touch from Latch belongs to the control surface
//! driving [`record_point`](crate::AutomationEngine::record_point).

use serde::{Deserialize, Serialize};

/// Per-lane automation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordState {
    Off,
    #[default]
    Play,
    Write,
    Touch,
    Latch,
}

impl RecordState {
    /// Whether apply ticks read this lane's curve.
    #[must_use]
    #[inline]
    pub fn reads_automation(&self) -> bool {
        matches!(self, Self::Play | Self::Touch | Self::Latch)
    }

    /// Whether live values may be recorded into this lane.
    #[must_use]
    #[inline]
    pub fn can_record(&self) -> bool {
        matches!(self, Self::Write | Self::Touch | Self::Latch)
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Play => "Play",
            Self::Write => "Write",
            Self::Touch => "Touch",
            Self::Latch => "Latch",
        }
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
