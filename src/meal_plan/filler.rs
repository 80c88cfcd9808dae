//! Stand-in values for fields the generated text does not state.
//!
//! The completion text never carries calories or timings and often omits prices, so
//! the parser asks a [`FillerSource`] for them. Production code uses [`RandomFiller`];
//! tests use [`FixedFiller`] or a seeded `RandomFiller` for reproducible plans.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CALORIE_RANGE: Range<u32> = 200..600;
pub const PREP_TIME_RANGE: Range<u32> = 10..30;
pub const COOK_TIME_RANGE: Range<u32> = 15..45;
pub const FALLBACK_COST_RANGE: Range<f64> = 1.0..6.0;

pub trait FillerSource {
    fn calories(&mut self) -> u32;
    fn prep_time(&mut self) -> u32;
    fn cook_time(&mut self) -> u32;
    /// Cost used when an ingredient or grocery line has no usable price.
    fn fallback_cost(&mut self) -> f64;
}

#[derive(Debug, Clone)]
pub struct RandomFiller<R = StdRng> {
    rng: R,
}

impl RandomFiller<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> FillerSource for RandomFiller<R> {
    fn calories(&mut self) -> u32 {
        self.rng.gen_range(CALORIE_RANGE)
    }

    fn prep_time(&mut self) -> u32 {
        self.rng.gen_range(PREP_TIME_RANGE)
    }

    fn cook_time(&mut self) -> u32 {
        self.rng.gen_range(COOK_TIME_RANGE)
    }

    fn fallback_cost(&mut self) -> f64 {
        self.rng.gen_range(FALLBACK_COST_RANGE)
    }
}

/// Always answers with the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFiller {
    pub calories: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub cost: f64,
}

impl Default for FixedFiller {
    fn default() -> Self {
        Self {
            calories: 400,
            prep_time: 15,
            cook_time: 20,
            cost: 3.0,
        }
    }
}

impl FillerSource for FixedFiller {
    fn calories(&mut self) -> u32 {
        self.calories
    }

    fn prep_time(&mut self) -> u32 {
        self.prep_time
    }

    fn cook_time(&mut self) -> u32 {
        self.cook_time
    }

    fn fallback_cost(&mut self) -> f64 {
        self.cost
    }
}
