//! Per-frame reports for score sheet renderers.
//!
//! A renderer can format `FrameReport`s however it likes. `render` gives
//! the conventional one-line form using a [`SheetConfig`]'s symbols:
//!
//! - strike: `X`
//! - 8 then 2: `8|/`
//! - 9 then gutter: `9|-`
//! - final frame 10, 7, 3: `X|7|/`

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{FrameNo, PinCount, SheetConfig};
use crate::frames::{Frame, ThrowKind, ThrowOutcome};

use super::total::FrameTotal;

/// One throw as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowReport {
    pub pins: PinCount,
    pub kind: ThrowKind,
}

impl ThrowReport {
    /// The sheet symbol for this throw.
    #[must_use]
    pub fn symbol(&self, config: &SheetConfig) -> char {
        match self.kind {
            ThrowKind::Strike => config.strike,
            ThrowKind::Spare => config.spare,
            ThrowKind::Open if self.pins.is_miss() => config.miss,
            // Open throws are always 0-9.
            ThrowKind::Open => char::from_digit(u32::from(self.pins.value()), 10).unwrap_or('?'),
        }
    }
}

/// Snapshot of one frame: its throws, outcome and running total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub ordinal: FrameNo,
    pub throws: SmallVec<[ThrowReport; 3]>,
    pub outcome: ThrowOutcome,
    pub total: FrameTotal,
}

impl FrameReport {
    /// Build a report for a frame with its cached total.
    #[must_use]
    pub fn new(frame: &Frame, total: FrameTotal) -> Self {
        let throws = frame
            .throws()
            .into_iter()
            .zip(frame.throw_kinds())
            .map(|(pins, kind)| ThrowReport { pins, kind })
            .collect();
        Self {
            ordinal: frame.ordinal(),
            throws,
            outcome: frame.outcome(),
            total,
        }
    }

    /// Render the throws with the configured symbols.
    ///
    /// A frame with no throws yet renders as the empty string.
    #[must_use]
    pub fn render(&self, config: &SheetConfig) -> String {
        let mut out = String::with_capacity(5);
        for (i, throw) in self.throws.iter().enumerate() {
            if i > 0 {
                out.push(config.separator);
            }
            out.push(throw.symbol(config));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ordinal: u8, values: &[u8]) -> FrameReport {
        let mut frame = Frame::new(FrameNo::new(ordinal).unwrap());
        for &v in values {
            frame.receive_throw(PinCount::new(v).unwrap()).unwrap();
        }
        FrameReport::new(&frame, FrameTotal::Pending)
    }

    #[test]
    fn test_render_default_symbols() {
        let config = SheetConfig::default();
        assert_eq!(report(1, &[10]).render(&config), "X");
        assert_eq!(report(1, &[8, 2]).render(&config), "8|/");
        assert_eq!(report(1, &[9, 0]).render(&config), "9|-");
        assert_eq!(report(1, &[0, 0]).render(&config), "-|-");
        assert_eq!(report(1, &[4]).render(&config), "4");
        assert_eq!(report(1, &[]).render(&config), "");
        assert_eq!(report(10, &[10, 10, 10]).render(&config), "X|X|X");
        assert_eq!(report(10, &[10, 7, 3]).render(&config), "X|7|/");
        assert_eq!(report(10, &[0, 10, 10]).render(&config), "-|/|X");
    }

    #[test]
    fn test_render_custom_symbols() {
        let config = SheetConfig::new().with_miss('0').with_separator(' ');
        assert_eq!(report(3, &[0, 10]).render(&config), "0 /");
    }

    #[test]
    fn test_report_fields() {
        let r = report(2, &[7, 3]);
        assert_eq!(r.ordinal, FrameNo::new(2).unwrap());
        assert_eq!(r.outcome, ThrowOutcome::Spare);
        assert_eq!(r.throws.len(), 2);
        assert_eq!(r.throws[1].kind, ThrowKind::Spare);
        assert!(r.total.is_pending());
    }
}
