//! The frame chain and deferred lookahead scoring.
//!
//! ## Chain
//!
//! The engine owns every frame in an append-only `im::Vector`. Frame *n*
//! links forward to frame *n+1* once that frame is created (when frame *n*
//! completes); links are never replaced and frames never point backward.
//!
//! ## Totals
//!
//! A strike's value needs the next two throws and a spare's the next one,
//! so a frame's total can trail its own completion. After every throw the
//! engine folds forward from the first pending frame, resolving totals
//! until it reaches a frame whose lookahead throws have not been bowled.
//! A resolved total is cached and never recomputed.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use crate::bowler::RollSource;
use crate::core::{FrameNo, PinCount, Result, ScoreError, SheetConfig};
use crate::frames::Frame;

use super::report::FrameReport;
use super::total::FrameTotal;

/// Scores one game of ten-pin.
///
/// ## Example
///
/// ```
/// use rust_bowling::scoring::{FrameTotal, ScoreEngine};
///
/// let mut engine = ScoreEngine::new();
/// engine.receive_throw(10).unwrap();
/// assert_eq!(engine.total_after(1).unwrap(), FrameTotal::Pending);
///
/// engine.receive_throw(3).unwrap();
/// engine.receive_throw(4).unwrap();
/// assert_eq!(engine.total_after(1).unwrap(), FrameTotal::Resolved(17));
/// assert_eq!(engine.total_after(2).unwrap(), FrameTotal::Resolved(24));
/// assert_eq!(engine.reported_state(1).unwrap(), "X");
/// ```
///
/// Cloning is O(1), so a host can keep snapshots of a game in progress.
#[derive(Clone, Debug, Serialize)]
pub struct ScoreEngine {
    /// Frames started so far; index `i` is frame `i + 1`.
    frames: Vector<Frame>,

    /// Cumulative totals, parallel to `frames`.
    totals: Vector<FrameTotal>,

    config: SheetConfig,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreEngine {
    /// Start a game with the conventional sheet symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SheetConfig::default())
    }

    /// Start a game rendering with the given symbols.
    #[must_use]
    pub fn with_config(config: SheetConfig) -> Self {
        Self {
            frames: Vector::unit(Frame::new(FrameNo::FIRST)),
            totals: Vector::unit(FrameTotal::Pending),
            config,
        }
    }

    /// Replay a sequence of throws, failing on the first illegal one.
    pub fn from_throws(throws: impl IntoIterator<Item = i32>) -> Result<Self> {
        let mut engine = Self::new();
        for pins in throws {
            engine.receive_throw(pins)?;
        }
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    // === Throws ===

    /// Record the next throw.
    ///
    /// ## Errors
    ///
    /// - `InvalidPinCount` if `pins` is outside `0..=10`
    /// - `PinSumExceedsTen` if more pins than are standing
    /// - `GameAlreadyComplete` once frame 10 is done
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn receive_throw(&mut self, pins: i32) -> Result<()> {
        let pins = PinCount::try_from(pins).inspect_err(|err| debug!(%err, "throw rejected"))?;
        self.roll(pins).inspect_err(|err| debug!(%err, "throw rejected"))
    }

    /// Record a throw that is already a validated pin count.
    pub fn roll(&mut self, pins: PinCount) -> Result<()> {
        let index = self.current_index().ok_or(ScoreError::GameAlreadyComplete)?;

        let completed = {
            let frame = self
                .frames
                .get_mut(index)
                .ok_or(ScoreError::GameAlreadyComplete)?;
            frame.receive_throw(pins)?;
            if frame.is_complete() {
                let next = frame.ordinal().next();
                if let Some(next) = next {
                    frame.link_next(next);
                }
                Some((frame.ordinal(), frame.outcome(), next))
            } else {
                None
            }
        };

        if let Some((ordinal, outcome, next)) = completed {
            debug!(frame = ordinal.get(), %outcome, "frame complete");
            match next {
                Some(next) => {
                    self.frames.push_back(Frame::new(next));
                    self.totals.push_back(FrameTotal::Pending);
                }
                None => debug!("game complete"),
            }
        }

        self.resolve_totals();
        Ok(())
    }

    /// Feed rolls from `source` until the game ends or the source runs dry.
    ///
    /// Stops at the first illegal roll and returns its error.
    #[instrument(level = "debug", skip_all)]
    pub fn play<S: RollSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        while let Some(standing) = self.pins_standing() {
            let Some(pins) = source.next_roll(standing) else {
                debug!("roll source exhausted");
                return Ok(());
            };
            self.receive_throw(pins)?;
        }
        Ok(())
    }

    // === Totals ===

    /// Cumulative total after a frame.
    ///
    /// ## Errors
    ///
    /// - `InvalidFrameOrdinal` if `ordinal` is outside `1..=10`
    /// - `FrameNotStarted` if the game has not reached that frame
    pub fn total_after(&self, ordinal: u8) -> Result<FrameTotal> {
        let frame = self.started(ordinal)?;
        self.totals
            .get(frame.index())
            .copied()
            .ok_or(ScoreError::FrameNotStarted { ordinal })
    }

    /// A frame's own value (its pins plus any bonus), without predecessors.
    pub fn frame_value(&self, ordinal: u8) -> Result<FrameTotal> {
        let frame = self.started(ordinal)?;
        Ok(self.own_value(frame.index()).into())
    }

    /// Total after frame 10, once the game is complete.
    #[must_use]
    pub fn final_score(&self) -> Option<u16> {
        if !self.is_game_complete() {
            return None;
        }
        self.totals.last().and_then(|total| total.value())
    }

    /// Resolve every pending total whose lookahead throws are now known.
    fn resolve_totals(&mut self) {
        let Some(start) = self.totals.iter().position(|total| total.is_pending()) else {
            return;
        };
        let mut running = match start {
            0 => 0,
            _ => self.totals.get(start - 1).and_then(|t| t.value()).unwrap_or(0),
        };

        for index in start..self.frames.len() {
            let Some(value) = self.own_value(index) else {
                break;
            };
            running += value;
            self.totals.set(index, FrameTotal::Resolved(running));
            trace!(frame = index + 1, total = running, "total resolved");
        }
    }

    /// Own value of the frame at `index`, `None` while pending.
    fn own_value(&self, index: usize) -> Option<u16> {
        let frame = self.frames.get(index)?;
        let lookahead = self.lookahead(frame, frame.bonus_throws());
        frame.own_value(&lookahead)
    }

    /// Up to `count` throws bowled after `frame`, following forward links.
    fn lookahead(&self, frame: &Frame, count: usize) -> SmallVec<[PinCount; 2]> {
        let mut throws = SmallVec::new();
        let mut cursor = frame.next();
        while throws.len() < count {
            let Some(next) = cursor.and_then(|no| self.frames.get(no.index())) else {
                break;
            };
            throws.extend(next.throws().into_iter().take(count - throws.len()));
            cursor = next.next();
        }
        throws
    }

    // === Progress ===

    /// True once frame 10 has taken all of its throws.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.current_index().is_none()
    }

    /// Frame the next throw goes to, `None` once the game is complete.
    #[must_use]
    pub fn current_frame(&self) -> Option<FrameNo> {
        self.current_index()
            .and_then(|index| self.frames.get(index))
            .map(Frame::ordinal)
    }

    /// Most pins the next throw may knock down, `None` once complete.
    #[must_use]
    pub fn pins_standing(&self) -> Option<PinCount> {
        self.frames.last().and_then(Frame::pins_standing)
    }

    /// The last frame in the chain is current until it completes. Only
    /// frame 10 can complete without a successor being appended.
    fn current_index(&self) -> Option<usize> {
        let last = self.frames.last()?;
        (!last.is_complete()).then(|| self.frames.len() - 1)
    }

    // === Chain access ===

    /// Frames started so far, in order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// A started frame by ordinal.
    pub fn frame(&self, ordinal: u8) -> Result<&Frame> {
        let frame = self.started(ordinal)?;
        self.frames
            .get(frame.index())
            .ok_or(ScoreError::FrameNotStarted { ordinal })
    }

    /// Every throw bowled so far, in order.
    pub fn throws(&self) -> impl Iterator<Item = PinCount> + '_ {
        self.frames.iter().flat_map(|frame| frame.throws())
    }

    fn started(&self, ordinal: u8) -> Result<FrameNo> {
        let frame = FrameNo::new(ordinal)?;
        if frame.index() >= self.frames.len() {
            return Err(ScoreError::FrameNotStarted { ordinal });
        }
        Ok(frame)
    }

    // === Reporting ===

    /// Throws, outcome and total of one frame.
    pub fn frame_report(&self, ordinal: u8) -> Result<FrameReport> {
        let frame = self.frame(ordinal)?;
        Ok(FrameReport::new(frame, self.total_after(ordinal)?))
    }

    /// Reports for every started frame.
    #[must_use]
    pub fn reports(&self) -> Vec<FrameReport> {
        self.frames
            .iter()
            .zip(self.totals.iter())
            .map(|(frame, &total)| FrameReport::new(frame, total))
            .collect()
    }

    /// A frame's throws rendered with the configured sheet symbols.
    pub fn reported_state(&self, ordinal: u8) -> Result<String> {
        Ok(self.frame_report(ordinal)?.render(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(throws: &[i32]) -> ScoreEngine {
        ScoreEngine::from_throws(throws.iter().copied()).unwrap()
    }

    #[test]
    fn test_new_game_has_first_frame_pending() {
        let engine = ScoreEngine::new();
        assert_eq!(engine.current_frame(), Some(FrameNo::FIRST));
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Pending));
        assert_eq!(engine.total_after(2), Err(ScoreError::FrameNotStarted { ordinal: 2 }));
        assert!(!engine.is_game_complete());
    }

    #[test]
    fn test_open_frame_resolves_immediately() {
        let engine = engine(&[3, 4]);
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Resolved(7)));
        assert_eq!(engine.current_frame(), FrameNo::new(2).ok());
        assert_eq!(engine.total_after(2), Ok(FrameTotal::Pending));
    }

    #[test]
    fn test_spare_waits_for_one_throw() {
        let mut engine = engine(&[4, 6]);
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Pending));
        engine.receive_throw(5).unwrap();
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Resolved(15)));
        assert_eq!(engine.total_after(2), Ok(FrameTotal::Pending));
    }

    #[test]
    fn test_double_strike_spans_two_frames() {
        let mut engine = engine(&[10, 10]);
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Pending));
        engine.receive_throw(4).unwrap();
        assert_eq!(engine.total_after(1), Ok(FrameTotal::Resolved(24)));
        assert_eq!(engine.total_after(2), Ok(FrameTotal::Pending));
        engine.receive_throw(2).unwrap();
        assert_eq!(engine.total_after(2), Ok(FrameTotal::Resolved(40)));
        assert_eq!(engine.total_after(3), Ok(FrameTotal::Resolved(46)));
    }

    #[test]
    fn test_forward_links() {
        let engine = engine(&[10, 3, 4]);
        let links: Vec<_> = engine.frames().map(Frame::next).collect();
        assert_eq!(links, vec![FrameNo::new(2).ok(), FrameNo::new(3).ok(), None]);
    }

    #[test]
    fn test_rejected_throw_leaves_game_unchanged() {
        let mut engine = engine(&[6]);
        let before = engine.clone();
        assert_eq!(
            engine.receive_throw(6),
            Err(ScoreError::PinSumExceedsTen { first: 6, second: 6 })
        );
        assert_eq!(
            engine.receive_throw(11),
            Err(ScoreError::InvalidPinCount { value: 11 })
        );
        assert_eq!(engine.throws().collect::<Vec<_>>(), before.throws().collect::<Vec<_>>());
        assert_eq!(engine.pins_standing(), PinCount::new(4).ok());
    }

    #[test]
    fn test_frame_value() {
        let engine = engine(&[10, 5, 5, 2]);
        assert_eq!(engine.frame_value(1), Ok(FrameTotal::Resolved(20)));
        assert_eq!(engine.frame_value(2), Ok(FrameTotal::Resolved(12)));
        assert_eq!(engine.frame_value(3), Ok(FrameTotal::Pending));
    }

    #[test]
    fn test_invalid_ordinal() {
        let engine = ScoreEngine::new();
        assert_eq!(engine.total_after(0), Err(ScoreError::InvalidFrameOrdinal { ordinal: 0 }));
        assert_eq!(engine.total_after(11), Err(ScoreError::InvalidFrameOrdinal { ordinal: 11 }));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut engine = engine(&[10]);
        let snapshot = engine.clone();
        engine.receive_throw(3).unwrap();
        assert_eq!(snapshot.throws().count(), 1);
        assert_eq!(engine.throws().count(), 2);
    }
}
