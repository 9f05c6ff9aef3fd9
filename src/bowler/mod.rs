//! Roll sources: where pin counts come from.
//!
//! The engine does not care whether rolls come from a console prompt, a
//! recorded game or a simulation. Anything implementing `RollSource` can
//! drive [`ScoreEngine::play`](crate::scoring::ScoreEngine::play).
//!
//! - `ScriptedRolls`: replays a fixed sequence
//! - `RandomBowler`: seeded simulated bowler that only throws legal rolls

mod random;

pub use random::RandomBowler;

use crate::core::PinCount;

/// A supplier of raw pin counts.
pub trait RollSource {
    /// Produce the next roll, or `None` when the source is exhausted.
    ///
    /// `pins_standing` is the most the next throw may legally knock down.
    /// Sources are free to ignore it; the engine validates every roll.
    fn next_roll(&mut self, pins_standing: PinCount) -> Option<i32>;
}

/// Replays a fixed list of rolls in order.
///
/// ```
/// use rust_bowling::bowler::{RollSource, ScriptedRolls};
/// use rust_bowling::core::PinCount;
///
/// let mut rolls = ScriptedRolls::new([10, 7]);
/// assert_eq!(rolls.next_roll(PinCount::ALL), Some(10));
/// assert_eq!(rolls.next_roll(PinCount::ALL), Some(7));
/// assert_eq!(rolls.next_roll(PinCount::ALL), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    rolls: Vec<i32>,
    cursor: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Rolls not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> &[i32] {
        &self.rolls[self.cursor..]
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self, _pins_standing: PinCount) -> Option<i32> {
        let roll = self.rolls.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(roll)
    }
}

impl<F> RollSource for F
where
    F: FnMut(PinCount) -> Option<i32>,
{
    fn next_roll(&mut self, pins_standing: PinCount) -> Option<i32> {
        self(pins_standing)
    }
}
