//! Error type shared by every scoring operation.
//!
//! Errors are raised at the offending call and never retried. A rejected
//! throw leaves the game exactly as it was before the call.

use thiserror::Error;

/// Errors raised while feeding throws or querying a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("pin count {value} is outside 0..=10")]
    InvalidPinCount { value: i32 },

    #[error("throws {first} and {second} knock down more than the 10 pins in the rack")]
    PinSumExceedsTen { first: u8, second: u8 },

    #[error("the game is already complete")]
    GameAlreadyComplete,

    #[error("frame {ordinal} has already taken all of its throws")]
    FrameAlreadyComplete { ordinal: u8 },

    #[error("frame {ordinal} has not been started")]
    FrameNotStarted { ordinal: u8 },

    #[error("frame ordinal {ordinal} is outside 1..=10")]
    InvalidFrameOrdinal { ordinal: u8 },
}

/// Result alias for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;
