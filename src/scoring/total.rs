//! Cumulative frame totals.

use serde::{Deserialize, Serialize};

/// Running total after a frame.
///
/// `Pending` means a throw the total depends on has not been bowled yet.
/// It is never conflated with a score of zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameTotal {
    Pending,
    Resolved(u16),
}

impl FrameTotal {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, FrameTotal::Pending)
    }

    /// The resolved total, if known.
    #[must_use]
    pub const fn value(self) -> Option<u16> {
        match self {
            FrameTotal::Pending => None,
            FrameTotal::Resolved(total) => Some(total),
        }
    }
}

impl From<Option<u16>> for FrameTotal {
    fn from(total: Option<u16>) -> Self {
        total.map_or(FrameTotal::Pending, FrameTotal::Resolved)
    }
}

impl std::fmt::Display for FrameTotal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameTotal::Pending => f.write_str("pending"),
            FrameTotal::Resolved(total) => write!(f, "{total}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_pending() {
        assert!(!FrameTotal::Resolved(0).is_pending());
        assert_eq!(FrameTotal::Resolved(0).value(), Some(0));
        assert_eq!(FrameTotal::Pending.value(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FrameTotal::from(Some(12)), FrameTotal::Resolved(12));
        assert_eq!(FrameTotal::from(None), FrameTotal::Pending);
    }

    #[test]
    fn test_display() {
        assert_eq!(FrameTotal::Pending.to_string(), "pending");
        assert_eq!(FrameTotal::Resolved(300).to_string(), "300");
    }
}
