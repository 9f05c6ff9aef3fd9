//! Validated single-throw pin counts.
//!
//! A `PinCount` is the number of pins knocked down by one throw. It can
//! only be constructed inside `0..=10`, so every count that reaches a
//! frame has already been checked.
//!
//! ```
//! use rust_bowling::core::PinCount;
//!
//! let seven = PinCount::new(7).unwrap();
//! assert_eq!(seven.value(), 7);
//! assert!(!seven.is_strike());
//!
//! assert!(PinCount::new(11).is_err());
//! assert!(PinCount::try_from(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Result, ScoreError};

/// Pins in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// Pins knocked down by a single throw, always in `0..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PinCount(u8);

impl PinCount {
    /// A gutter ball.
    pub const ZERO: PinCount = PinCount(0);

    /// Every pin in the rack.
    pub const ALL: PinCount = PinCount(PINS_PER_RACK);

    /// Create a pin count, rejecting values above ten.
    pub fn new(value: u8) -> Result<Self> {
        if value > PINS_PER_RACK {
            return Err(ScoreError::InvalidPinCount {
                value: i32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Get the raw count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// True when this throw cleared a full rack.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == PINS_PER_RACK
    }

    /// True for a gutter ball.
    #[must_use]
    pub const fn is_miss(self) -> bool {
        self.0 == 0
    }

    /// Pins left standing on a fresh rack after this throw.
    #[must_use]
    pub const fn remaining(self) -> PinCount {
        PinCount(PINS_PER_RACK - self.0)
    }
}

impl TryFrom<i32> for PinCount {
    type Error = ScoreError;

    fn try_from(value: i32) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= PINS_PER_RACK)
            .map(Self)
            .ok_or(ScoreError::InvalidPinCount { value })
    }
}

impl TryFrom<u8> for PinCount {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PinCount> for u8 {
    fn from(pins: PinCount) -> Self {
        pins.0
    }
}

impl From<PinCount> for u16 {
    fn from(pins: PinCount) -> Self {
        u16::from(pins.0)
    }
}

impl std::fmt::Display for PinCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
