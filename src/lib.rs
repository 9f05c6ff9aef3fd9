//! # rust-bowling
//!
//! Scores a single game of ten-pin bowling from a sequence of throws.
//!
//! ## Design Principles
//!
//! 1. **Validated Values**: Raw integers become `PinCount`/`FrameNo` at the
//!    boundary. Nothing deeper accepts an unchecked count.
//!
//! 2. **Unrepresentable Illegal States**: Each frame variant's throw count
//!    is a tagged enum. A normal frame cannot hold a third throw and the
//!    final frame cannot take a bonus throw it has not earned.
//!
//! 3. **Pending Is Not Zero**: Totals that wait on future throws are
//!    `FrameTotal::Pending`, never a sentinel integer.
//!
//! ## Architecture
//!
//! - **Forward-Only Chain**: Frame *n* links to frame *n+1* once it exists.
//!   Lookahead reads follow those links; no frame knows its predecessor.
//!
//! - **Deferred Totals**: After each throw the engine folds forward from
//!   the first pending frame. Resolved totals are cached and never change.
//!
//! - **Persistent Data Structures**: O(1) engine cloning via `im-rs`, so
//!   hosts can snapshot a game in progress.
//!
//! ## Modules
//!
//! - `core`: Pin counts, frame ordinals, errors, sheet configuration, RNG
//! - `frames`: Normal and final frame state machines
//! - `scoring`: ScoreEngine, totals and per-frame reports
//! - `bowler`: Roll sources (scripted and simulated)

pub mod core;
pub mod frames;
pub mod scoring;
pub mod bowler;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PinCount, PINS_PER_RACK,
    FrameNo, FRAMES_PER_GAME,
    Result, ScoreError,
    SheetConfig, BowlerRng,
};

pub use crate::frames::{
    Frame, NormalFrame, NormalState, FinalFrame, FinalState,
    ThrowOutcome, ThrowKind, Rack,
};

pub use crate::scoring::{ScoreEngine, FrameTotal, FrameReport, ThrowReport};

pub use crate::bowler::{RollSource, ScriptedRolls, RandomBowler};
