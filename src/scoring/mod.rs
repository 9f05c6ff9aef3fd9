//! Scoring engine: the frame chain, deferred totals and reports.
//!
//! ## Example Usage
//!
//! ```
//! use rust_bowling::scoring::{FrameTotal, ScoreEngine};
//!
//! // Twelve strikes
//! let engine = ScoreEngine::from_throws([10; 12]).unwrap();
//! assert!(engine.is_game_complete());
//! assert_eq!(engine.total_after(10).unwrap(), FrameTotal::Resolved(300));
//! assert_eq!(engine.reported_state(10).unwrap(), "X|X|X");
//! ```

mod engine;
mod report;
mod total;

pub use engine::ScoreEngine;
pub use report::{FrameReport, ThrowReport};
pub use total::FrameTotal;
