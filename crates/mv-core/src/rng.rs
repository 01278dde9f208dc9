//! Traffic-factor RNG.
//!
//! Every directed adjacency gets one multiplicative "traffic" factor, drawn
//! once when the edge is created and stored on the edge.  Factors are never
//! resampled, so repeated queries against the same graph are deterministic.
//!
//! Seeding with a fixed value reproduces the same factors across builds;
//! seeding from entropy gives a fresh traffic picture each run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrafficRange;

/// Mixes the user seed so that small consecutive seeds (0, 1, 2, …) still
/// land far apart in the generator's state space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Build-time RNG for traffic factors.
///
/// Owned by `RouteGraphBuilder` and dropped when the graph is built; the
/// built graph holds no RNG and therefore cannot resample.
pub struct TrafficRng {
    rng:   SmallRng,
    range: TrafficRange,
}

impl TrafficRng {
    /// Deterministic RNG for reproducible traffic factors.
    pub fn new(seed: u64, range: TrafficRange) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed.wrapping_mul(MIXING_CONSTANT)),
            range,
        }
    }

    /// RNG seeded from OS entropy.
    pub fn from_entropy(range: TrafficRange) -> Self {
        Self { rng: SmallRng::from_entropy(), range }
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed_opt(seed: Option<u64>, range: TrafficRange) -> Self {
        match seed {
            Some(s) => Self::new(s, range),
            None    => Self::from_entropy(range),
        }
    }

    /// Sample one traffic factor uniformly from the closed range
    /// `[range.min, range.max]`.
    #[inline]
    pub fn factor(&mut self) -> f64 {
        if self.range.min == self.range.max {
            return self.range.min;
        }
        self.rng.gen_range(self.range.min..=self.range.max)
    }
}
