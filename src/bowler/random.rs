//! Seeded simulated bowler.

use crate::core::{BowlerRng, PinCount};

use super::RollSource;

/// Simulated bowler that throws only legal rolls.
///
/// On each throw it clears every standing pin with probability
/// `clear_rate`, otherwise knocks down a uniform share of them. The same
/// seed always bowls the same game.
///
/// ```
/// use rust_bowling::bowler::RandomBowler;
/// use rust_bowling::scoring::ScoreEngine;
///
/// let mut engine = ScoreEngine::new();
/// engine.play(&mut RandomBowler::new(42)).unwrap();
/// assert!(engine.is_game_complete());
/// assert!(engine.final_score().unwrap() <= 300);
/// ```
#[derive(Clone, Debug)]
pub struct RandomBowler {
    rng: BowlerRng,
    clear_rate: f64,
}

impl RandomBowler {
    /// Default chance of clearing the standing pins on any throw.
    pub const DEFAULT_CLEAR_RATE: f64 = 0.25;

    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BowlerRng::new(seed),
            clear_rate: Self::DEFAULT_CLEAR_RATE,
        }
    }

    /// Set the chance of clearing the standing pins (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_clear_rate(mut self, rate: f64) -> Self {
        self.clear_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// A bowler on an independent, reproducible stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            clear_rate: self.clear_rate,
        }
    }
}

impl RollSource for RandomBowler {
    fn next_roll(&mut self, pins_standing: PinCount) -> Option<i32> {
        let pins = if self.rng.gen_bool(self.clear_rate) {
            pins_standing
        } else {
            self.rng.gen_pins(pins_standing)
        };
        Some(i32::from(pins.value()))
    }
}
