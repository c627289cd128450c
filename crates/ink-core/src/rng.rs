//! Per-worker and initialisation-time RNG wrappers.
//!
//! Every traveler thread owns its own `SmallRng`, seeded by:
//!
//!   seed = global_seed XOR (traveler_id * MIXING_CONSTANT)
//!
//! so workers never contend on a shared generator.  Seeding is reproducible,
//! but thread interleaving is not, so a run as a whole is never
//! deterministic; only a single traveler driven synchronously is.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TravelerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TravelerRng ───────────────────────────────────────────────────────────────

/// RNG owned by one traveler worker.  Moved into the worker's thread; never
/// shared.
pub struct TravelerRng(SmallRng);

impl TravelerRng {
    /// Seed deterministically from the run's global seed and a traveler ID.
    pub fn new(global_seed: u64, traveler: TravelerId) -> Self {
        let seed = global_seed ^ (traveler.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TravelerRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG used while seeding the initial world (traveler
/// colours, start cells, headings).  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
