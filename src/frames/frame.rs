//! The closed set of frame variants.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{FrameNo, PinCount, Result};

use super::last::FinalFrame;
use super::normal::NormalFrame;
use super::outcome::{ThrowKind, ThrowOutcome};
use super::rack;

/// A frame in the chain: frames 1-9 are `Normal`, frame 10 is `Final`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    Normal(NormalFrame),
    Final(FinalFrame),
}

impl Frame {
    /// Create the empty frame for an ordinal.
    #[must_use]
    pub fn new(ordinal: FrameNo) -> Self {
        if ordinal.is_final() {
            Frame::Final(FinalFrame::new())
        } else {
            Frame::Normal(NormalFrame::new(ordinal))
        }
    }

    #[must_use]
    pub fn ordinal(&self) -> FrameNo {
        match self {
            Frame::Normal(f) => f.ordinal(),
            Frame::Final(f) => f.ordinal(),
        }
    }

    /// Record a throw in this frame.
    pub fn receive_throw(&mut self, pins: PinCount) -> Result<ThrowOutcome> {
        match self {
            Frame::Normal(f) => f.receive_throw(pins),
            Frame::Final(f) => f.receive_throw(pins),
        }
    }

    #[must_use]
    pub fn throws(&self) -> SmallVec<[PinCount; 3]> {
        match self {
            Frame::Normal(f) => f.throws(),
            Frame::Final(f) => f.throws(),
        }
    }

    /// Per-throw classification, parallel to [`Frame::throws`].
    #[must_use]
    pub fn throw_kinds(&self) -> SmallVec<[ThrowKind; 3]> {
        rack::classify(&self.throws())
    }

    #[must_use]
    pub fn outcome(&self) -> ThrowOutcome {
        match self {
            Frame::Normal(f) => f.outcome(),
            Frame::Final(f) => f.outcome(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome().is_complete()
    }

    #[must_use]
    pub fn pins_standing(&self) -> Option<PinCount> {
        match self {
            Frame::Normal(f) => f.pins_standing(),
            Frame::Final(f) => f.pins_standing(),
        }
    }

    /// Throws from later frames this frame's value depends on.
    #[must_use]
    pub fn bonus_throws(&self) -> usize {
        match self {
            Frame::Normal(f) => f.bonus_throws(),
            Frame::Final(_) => 0,
        }
    }

    /// Frame value given the throws that follow it, `None` while pending.
    #[must_use]
    pub fn own_value(&self, lookahead: &[PinCount]) -> Option<u16> {
        match self {
            Frame::Normal(f) => f.own_value(lookahead),
            Frame::Final(f) => f.own_value(),
        }
    }

    /// Forward link to the following frame.
    #[must_use]
    pub fn next(&self) -> Option<FrameNo> {
        match self {
            Frame::Normal(f) => f.next(),
            Frame::Final(f) => f.next(),
        }
    }

    pub(crate) fn link_next(&mut self, next: FrameNo) {
        if let Frame::Normal(f) = self {
            f.link_next(next);
        }
    }
}
