//! Frame outcomes and per-throw classification.

use serde::{Deserialize, Serialize};

/// Classification of a frame by its first one or two throws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// All ten pins on the first throw.
    Strike,
    /// All ten pins across the first two throws.
    Spare,
    /// Pins left standing after two throws.
    Open,
    /// The frame has not received all of its throws yet.
    InProgress,
}

impl ThrowOutcome {
    /// True once the frame has taken every throw it is allowed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        !matches!(self, ThrowOutcome::InProgress)
    }

    /// Number of later throws a normal frame with this outcome adds as bonus.
    #[must_use]
    pub const fn bonus_throws(self) -> usize {
        match self {
            ThrowOutcome::Strike => 2,
            ThrowOutcome::Spare => 1,
            ThrowOutcome::Open | ThrowOutcome::InProgress => 0,
        }
    }
}

impl std::fmt::Display for ThrowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ThrowOutcome::Strike => "strike",
            ThrowOutcome::Spare => "spare",
            ThrowOutcome::Open => "open",
            ThrowOutcome::InProgress => "in progress",
        };
        f.write_str(name)
    }
}

/// Classification of a single throw, for score sheet rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowKind {
    /// Cleared a full rack.
    Strike,
    /// Cleared what the previous throw left standing.
    Spare,
    /// Left pins standing (including a gutter ball).
    Open,
}
