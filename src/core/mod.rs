//! Core value types: pin counts, frame ordinals, errors, configuration, RNG.
//!
//! Everything here is a small validated value. Frames and the scoring
//! engine build on these and never accept raw integers past this layer.

pub mod pins;
pub mod ordinal;
pub mod error;
pub mod config;
pub mod rng;

pub use pins::{PinCount, PINS_PER_RACK};
pub use ordinal::{FrameNo, FRAMES_PER_GAME};
pub use error::{Result, ScoreError};
pub use config::SheetConfig;
pub use rng::BowlerRng;
