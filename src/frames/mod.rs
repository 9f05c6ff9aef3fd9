//! Frames and their throw-count state machines.
//!
//! - `NormalFrame`: frames 1-9, one throw on a strike, otherwise two
//! - `FinalFrame`: frame 10, two throws plus a bonus throw after a strike or spare
//! - `Frame`: closed enum over both, used by the scoring engine's chain
//!
//! Each variant's state is a tagged enum, so a frame cannot hold more
//! throws than its variant allows. Frames only look forward: a normal
//! frame's value is computed from a lookahead slice the engine collects by
//! following `next` links.

mod outcome;
mod rack;
mod normal;
mod last;
mod frame;

pub use outcome::{ThrowKind, ThrowOutcome};
pub use rack::Rack;
pub use normal::{NormalFrame, NormalState};
pub use last::{FinalFrame, FinalState};
pub use frame::Frame;
