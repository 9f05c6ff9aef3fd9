//! Frame 10.
//!
//! ## State Machine
//!
//! ```text
//! AwaitingFirst --p--> AwaitingSecond { first }
//! AwaitingSecond --q, strike or spare--> AwaitingBonus { first, second }
//! AwaitingSecond --q, otherwise--------> Open { first, second }
//! AwaitingBonus --r--> Filled { first, second, bonus }
//! ```
//!
//! After a first-ball strike the second throw is on a fresh rack. The bonus
//! throw is on a fresh rack after strike-strike or a spare, and on the
//! leftover pins after a strike followed by a non-strike.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{FrameNo, PinCount, Result, ScoreError, PINS_PER_RACK};

use super::outcome::ThrowOutcome;
use super::rack::Rack;

/// Throw-count state of the final frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalState {
    AwaitingFirst,
    AwaitingSecond { first: PinCount },
    /// Strike or spare earned a third throw.
    AwaitingBonus { first: PinCount, second: PinCount },
    /// Two throws, no bonus earned. Terminal.
    Open { first: PinCount, second: PinCount },
    /// Three throws. Terminal.
    Filled { first: PinCount, second: PinCount, bonus: PinCount },
}

/// Frame 10, the terminal node of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalFrame {
    state: FinalState,
}

impl Default for FinalFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl FinalFrame {
    /// Create an empty final frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FinalState::AwaitingFirst,
        }
    }

    /// Always frame 10.
    #[must_use]
    pub fn ordinal(&self) -> FrameNo {
        FrameNo::LAST
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FinalState {
        self.state
    }

    /// Record a throw.
    ///
    /// Fails with `PinSumExceedsTen` if the throw knocks down more pins than
    /// are standing, and with `GameAlreadyComplete` once the frame is done.
    /// The frame is unchanged on error.
    pub fn receive_throw(&mut self, pins: PinCount) -> Result<ThrowOutcome> {
        let mut rack = Rack::after(&self.throws());
        self.state = match self.state {
            FinalState::AwaitingFirst => FinalState::AwaitingSecond { first: pins },
            FinalState::AwaitingSecond { first } => {
                rack.knock(pins)?;
                if first.is_strike() || first.value() + pins.value() == PINS_PER_RACK {
                    FinalState::AwaitingBonus { first, second: pins }
                } else {
                    FinalState::Open { first, second: pins }
                }
            }
            FinalState::AwaitingBonus { first, second } => {
                rack.knock(pins)?;
                FinalState::Filled {
                    first,
                    second,
                    bonus: pins,
                }
            }
            FinalState::Open { .. } | FinalState::Filled { .. } => {
                return Err(ScoreError::GameAlreadyComplete);
            }
        };
        Ok(self.outcome())
    }

    /// Throws recorded so far, in order.
    #[must_use]
    pub fn throws(&self) -> SmallVec<[PinCount; 3]> {
        match self.state {
            FinalState::AwaitingFirst => SmallVec::new(),
            FinalState::AwaitingSecond { first } => smallvec![first],
            FinalState::AwaitingBonus { first, second } | FinalState::Open { first, second } => {
                smallvec![first, second]
            }
            FinalState::Filled { first, second, bonus } => smallvec![first, second, bonus],
        }
    }

    /// True once no further throw is allowed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, FinalState::Open { .. } | FinalState::Filled { .. })
    }

    /// Outcome by the first two throws, `InProgress` until the frame is done.
    #[must_use]
    pub fn outcome(&self) -> ThrowOutcome {
        match self.state {
            FinalState::Open { .. } => ThrowOutcome::Open,
            FinalState::Filled { first, .. } if first.is_strike() => ThrowOutcome::Strike,
            FinalState::Filled { .. } => ThrowOutcome::Spare,
            _ => ThrowOutcome::InProgress,
        }
    }

    /// Maximum pins the next throw may knock down, `None` once complete.
    #[must_use]
    pub fn pins_standing(&self) -> Option<PinCount> {
        if self.is_complete() {
            return None;
        }
        Some(Rack::after(&self.throws()).standing())
    }

    /// Sum of every throw once complete. The final frame needs no lookahead.
    #[must_use]
    pub fn own_value(&self) -> Option<u16> {
        if !self.is_complete() {
            return None;
        }
        Some(self.throws().iter().map(|&p| u16::from(p)).sum())
    }

    /// Always `None`: frame 10 ends the chain.
    #[must_use]
    pub fn next(&self) -> Option<FrameNo> {
        None
    }
}
