//! Frames 1-9.
//!
//! ## State Machine
//!
//! ```text
//! AwaitingFirst --10--> Strike
//! AwaitingFirst --p<10--> AwaitingSecond { first }
//! AwaitingSecond --q, first+q == 10--> Spare { first, second }
//! AwaitingSecond --q, first+q <  10--> Open  { first, second }
//! ```
//!
//! `Strike`, `Spare` and `Open` are terminal. A normal frame's value may
//! depend on throws recorded in later frames; the caller supplies those as
//! a lookahead slice to [`NormalFrame::own_value`].

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{FrameNo, PinCount, Result, ScoreError, PINS_PER_RACK};

use super::outcome::ThrowOutcome;

/// Throw-count state of a normal frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalState {
    /// No throws yet.
    AwaitingFirst,
    /// First throw left pins standing.
    AwaitingSecond { first: PinCount },
    /// Ten on the first throw.
    Strike,
    /// Ten across two throws.
    Spare { first: PinCount, second: PinCount },
    /// Pins left standing after two throws.
    Open { first: PinCount, second: PinCount },
}

/// One of frames 1-9.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalFrame {
    ordinal: FrameNo,
    state: NormalState,
    /// Forward link, set once when the following frame is created.
    next: Option<FrameNo>,
}

impl NormalFrame {
    /// Create an empty frame.
    #[must_use]
    pub fn new(ordinal: FrameNo) -> Self {
        debug_assert!(!ordinal.is_final(), "frame 10 is a FinalFrame");
        Self {
            ordinal,
            state: NormalState::AwaitingFirst,
            next: None,
        }
    }

    /// Position of this frame.
    #[must_use]
    pub fn ordinal(&self) -> FrameNo {
        self.ordinal
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> NormalState {
        self.state
    }

    /// The following frame, once it exists.
    #[must_use]
    pub fn next(&self) -> Option<FrameNo> {
        self.next
    }

    /// Link the following frame. A link, once set, is never replaced.
    pub(crate) fn link_next(&mut self, next: FrameNo) {
        debug_assert_eq!(Some(next), self.ordinal.next());
        if self.next.is_none() {
            self.next = Some(next);
        }
    }

    /// Record a throw.
    ///
    /// Fails with `PinSumExceedsTen` if the second throw knocks down more
    /// pins than the first left standing. The frame is unchanged on error.
    pub fn receive_throw(&mut self, pins: PinCount) -> Result<ThrowOutcome> {
        self.state = match self.state {
            NormalState::AwaitingFirst if pins.is_strike() => NormalState::Strike,
            NormalState::AwaitingFirst => NormalState::AwaitingSecond { first: pins },
            NormalState::AwaitingSecond { first } => {
                let sum = first.value() + pins.value();
                if sum > PINS_PER_RACK {
                    return Err(ScoreError::PinSumExceedsTen {
                        first: first.value(),
                        second: pins.value(),
                    });
                }
                if sum == PINS_PER_RACK {
                    NormalState::Spare { first, second: pins }
                } else {
                    NormalState::Open { first, second: pins }
                }
            }
            NormalState::Strike | NormalState::Spare { .. } | NormalState::Open { .. } => {
                return Err(ScoreError::FrameAlreadyComplete {
                    ordinal: self.ordinal.get(),
                });
            }
        };
        Ok(self.outcome())
    }

    /// Throws recorded so far.
    #[must_use]
    pub fn throws(&self) -> SmallVec<[PinCount; 3]> {
        match self.state {
            NormalState::AwaitingFirst => SmallVec::new(),
            NormalState::AwaitingSecond { first } => smallvec![first],
            NormalState::Strike => smallvec![PinCount::ALL],
            NormalState::Spare { first, second } | NormalState::Open { first, second } => {
                smallvec![first, second]
            }
        }
    }

    /// Outcome so far.
    #[must_use]
    pub fn outcome(&self) -> ThrowOutcome {
        match self.state {
            NormalState::AwaitingFirst | NormalState::AwaitingSecond { .. } => ThrowOutcome::InProgress,
            NormalState::Strike => ThrowOutcome::Strike,
            NormalState::Spare { .. } => ThrowOutcome::Spare,
            NormalState::Open { .. } => ThrowOutcome::Open,
        }
    }

    /// Maximum pins the next throw may knock down, `None` once complete.
    #[must_use]
    pub fn pins_standing(&self) -> Option<PinCount> {
        match self.state {
            NormalState::AwaitingFirst => Some(PinCount::ALL),
            NormalState::AwaitingSecond { first } => Some(first.remaining()),
            _ => None,
        }
    }

    /// Later throws this frame needs before its value is known.
    #[must_use]
    pub fn bonus_throws(&self) -> usize {
        self.outcome().bonus_throws()
    }

    /// Frame value given the throws that follow it, in throw order.
    ///
    /// Returns `None` while the frame is incomplete or `lookahead` holds
    /// fewer throws than the strike/spare bonus needs.
    #[must_use]
    pub fn own_value(&self, lookahead: &[PinCount]) -> Option<u16> {
        let needed = self.bonus_throws();
        if lookahead.len() < needed {
            return None;
        }
        let bonus: u16 = lookahead[..needed].iter().map(|&p| u16::from(p)).sum();
        match self.state {
            NormalState::AwaitingFirst | NormalState::AwaitingSecond { .. } => None,
            NormalState::Strike | NormalState::Spare { .. } => Some(u16::from(PINS_PER_RACK) + bonus),
            NormalState::Open { first, second } => Some(u16::from(first) + u16::from(second)),
        }
    }
}
