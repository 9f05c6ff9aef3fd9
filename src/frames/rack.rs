//! Pin rack tracking.
//!
//! A rack starts with ten pins. A throw that clears it (strike or spare)
//! brings out a fresh rack; otherwise the next throw faces whatever was
//! left standing. The final frame can see up to three racks, so both the
//! legality check and the per-throw classification walk the rack.

use smallvec::SmallVec;

use crate::core::{PinCount, Result, ScoreError};

use super::outcome::ThrowKind;

/// Pins standing in front of the bowler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rack {
    standing: PinCount,
    fresh: bool,
}

impl Default for Rack {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Rack {
    /// A full rack of ten pins.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            standing: PinCount::ALL,
            fresh: true,
        }
    }

    /// Rack state after the given (already legal) throws.
    #[must_use]
    pub fn after(throws: &[PinCount]) -> Self {
        throws.iter().fold(Self::fresh(), |rack, &pins| rack.advance(pins).0)
    }

    /// Pins still standing.
    #[must_use]
    pub const fn standing(self) -> PinCount {
        self.standing
    }

    /// Knock down `pins`, failing if more pins than are standing.
    ///
    /// The rack is untouched on error.
    pub fn knock(&mut self, pins: PinCount) -> Result<ThrowKind> {
        if pins > self.standing {
            return Err(ScoreError::PinSumExceedsTen {
                first: self.standing.remaining().value(),
                second: pins.value(),
            });
        }
        let (rack, kind) = self.advance(pins);
        *self = rack;
        Ok(kind)
    }

    fn advance(self, pins: PinCount) -> (Rack, ThrowKind) {
        if pins < self.standing {
            let standing = PinCount::new(self.standing.value() - pins.value()).unwrap_or(PinCount::ZERO);
            return (Rack { standing, fresh: false }, ThrowKind::Open);
        }
        let kind = if self.fresh { ThrowKind::Strike } else { ThrowKind::Spare };
        (Rack::fresh(), kind)
    }
}

/// Classify each throw of a frame by walking its racks.
#[must_use]
pub fn classify(throws: &[PinCount]) -> SmallVec<[ThrowKind; 3]> {
    let mut rack = Rack::fresh();
    throws
        .iter()
        .map(|&pins| {
            let (next, kind) = rack.advance(pins);
            rack = next;
            kind
        })
        .collect()
}
