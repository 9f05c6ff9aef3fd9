//! Deterministic random number generation for simulated bowlers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: One seed can drive several independent lanes
//! - **Rack-aware**: `gen_pins` never exceeds the pins still standing
//!
//! ```
//! use rust_bowling::core::{BowlerRng, PinCount};
//!
//! let mut a = BowlerRng::new(7);
//! let mut b = BowlerRng::new(7);
//! let standing = PinCount::new(6).unwrap();
//!
//! let roll = a.gen_pins(standing);
//! assert!(roll <= standing);
//! assert_eq!(roll, b.gen_pins(standing));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::pins::PinCount;

/// Deterministic RNG for generating legal throws.
///
/// Uses ChaCha8 for speed with reproducible output across platforms.
#[derive(Clone, Debug)]
pub struct BowlerRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BowlerRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Knock down a uniformly random number of the standing pins.
    pub fn gen_pins(&mut self, standing: PinCount) -> PinCount {
        let value = self.inner.gen_range(0..=standing.value());
        // Bounded by `standing`, which is itself a valid count.
        PinCount::new(value).unwrap_or(standing)
    }
}
