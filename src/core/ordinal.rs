//! Frame ordinals.
//!
//! Frames are numbered `1..=10`. Frames 1-9 are normal frames and frame 10
//! is the final frame with its optional bonus throw.
//!
//! ```
//! use rust_bowling::core::FrameNo;
//!
//! let ninth = FrameNo::new(9).unwrap();
//! assert_eq!(ninth.next(), Some(FrameNo::LAST));
//! assert!(FrameNo::LAST.is_final());
//! assert_eq!(FrameNo::LAST.next(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Result, ScoreError};

/// Frames in a game of ten-pin.
pub const FRAMES_PER_GAME: u8 = 10;

/// Position of a frame in the game, always in `1..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FrameNo(u8);

impl FrameNo {
    /// The opening frame.
    pub const FIRST: FrameNo = FrameNo(1);

    /// The final (10th) frame.
    pub const LAST: FrameNo = FrameNo(FRAMES_PER_GAME);

    /// Create an ordinal, rejecting anything outside `1..=10`.
    pub fn new(ordinal: u8) -> Result<Self> {
        if (1..=FRAMES_PER_GAME).contains(&ordinal) {
            Ok(Self(ordinal))
        } else {
            Err(ScoreError::InvalidFrameOrdinal { ordinal })
        }
    }

    /// Get the 1-based ordinal.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Get the 0-based position in the frame chain.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// True for frame 10.
    #[must_use]
    pub const fn is_final(self) -> bool {
        self.0 == FRAMES_PER_GAME
    }

    /// The ordinal after this one, `None` after the final frame.
    #[must_use]
    pub const fn next(self) -> Option<FrameNo> {
        if self.is_final() {
            None
        } else {
            Some(FrameNo(self.0 + 1))
        }
    }

    /// Iterate over all ten ordinals in order.
    pub fn all() -> impl Iterator<Item = FrameNo> {
        (1..=FRAMES_PER_GAME).map(FrameNo)
    }
}

impl TryFrom<u8> for FrameNo {
    type Error = ScoreError;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::new(ordinal)
    }
}

impl From<FrameNo> for u8 {
    fn from(frame: FrameNo) -> Self {
        frame.0
    }
}

impl std::fmt::Display for FrameNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
