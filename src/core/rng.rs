//! Random number generation for perk draws.
//!
//! ## Key Features
//!
//! - **Unseeded by default**: `PerkRng::from_entropy()` behaves like a
//!   process-wide uniform source; every run differs.
//! - **Replayable**: the seed is always recorded, so a run drawn from entropy
//!   can be reproduced with `PerkRng::new(rng.seed())`.
//! - **Independent per run**: nothing here is shared across runs; each
//!   randomization owns its generator.
//!
//! ```
//! use perk_randomizer::core::PerkRng;
//!
//! let mut a = PerkRng::new(7);
//! let mut b = PerkRng::new(7);
//! assert_eq!(a.gen_index(10), b.gen_index(10));
//!
//! let fresh = PerkRng::from_entropy();
//! let mut replay = PerkRng::new(fresh.seed());
//! let _ = replay.gen_index(4);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used by the sampler.
///
/// Uses ChaCha8 for speed while keeping the output statistically uniform.
#[derive(Clone, Debug)]
pub struct PerkRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PerkRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..bound`.
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    /// Uniform index in `low..high`.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Default for PerkRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for PerkRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
