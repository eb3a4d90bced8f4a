//! Randomness capabilities injected into the pipeline.
//!
//! Both traits take `&mut self`: the pipeline makes at most one call at a
//! time, so implementations can keep a seeded generator internally.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Largest absolute charge adjustment.
pub const MAX_DELTA: Decimal = Decimal::TEN;

/// Produces a plausible first name on demand.
pub trait NameSynthesizer {
    fn generate(&mut self) -> String;
}

/// Produces a bounded random charge perturbation.
pub trait RandomAdjuster {
    /// A value in `[-MAX_DELTA, MAX_DELTA]`.
    fn delta(&mut self) -> Decimal;
}

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alex", "Alice", "Amanda", "Andrew", "Angela", "Anthony", "Ashley",
    "Benjamin", "Brandon", "Brian", "Brittany", "Carlos", "Catherine", "Charles", "Christina",
    "Christopher", "Daniel", "David", "Deborah", "Dennis", "Diana", "Donna", "Edward", "Elena",
    "Elizabeth", "Emily", "Eric", "Frank", "Gabriel", "Grace", "Gregory", "Hannah", "Henry",
    "Isabel", "Jacob", "James", "Janet", "Jason", "Jennifer", "Jessica", "Joseph", "Joshua",
    "Julia", "Karen", "Kevin", "Laura", "Linda", "Lucas", "Margaret", "Maria", "Mark", "Matthew",
    "Megan", "Michael", "Nancy", "Nathan", "Nicole", "Olivia", "Patricia", "Paul", "Rachel",
    "Raymond", "Rebecca", "Richard", "Robert", "Samuel", "Sandra", "Sarah", "Scott", "Sophia",
    "Stephen", "Susan", "Thomas", "Timothy", "Victoria", "William", "Zachary",
];

/// Draws names uniformly from a built-in first-name pool.
#[derive(Debug, Clone)]
pub struct PoolNameSynthesizer {
    rng: StdRng,
}

impl PoolNameSynthesizer {
    /// Deterministic synthesizer: equal seeds yield equal name sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl NameSynthesizer for PoolNameSynthesizer {
    fn generate(&mut self) -> String {
        FIRST_NAMES
            .choose(&mut self.rng)
            .map_or_else(String::new, |name| (*name).to_string())
    }
}

/// Always returns the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantName(pub String);

impl ConstantName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl NameSynthesizer for ConstantName {
    fn generate(&mut self) -> String {
        self.0.clone()
    }
}

/// Uniform draw from `[-MAX_DELTA, MAX_DELTA]`, rounded to cents.
#[derive(Debug, Clone)]
pub struct UniformAdjuster {
    rng: StdRng,
}

impl UniformAdjuster {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomAdjuster for UniformAdjuster {
    fn delta(&mut self) -> Decimal {
        let draw: f64 = self.rng.random_range(-10.0..=10.0);
        Decimal::from_f64(draw)
            .map_or(Decimal::ZERO, |delta| delta.round_dp(2))
            .clamp(-MAX_DELTA, MAX_DELTA)
    }
}

/// Always returns the same delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantDelta(pub Decimal);

impl RandomAdjuster for ConstantDelta {
    fn delta(&mut self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_synthesizers_repeat() {
        let mut first = PoolNameSynthesizer::seeded(7);
        let mut second = PoolNameSynthesizer::seeded(7);
        let a: Vec<String> = (0..10).map(|_| first.generate()).collect();
        let b: Vec<String> = (0..10).map(|_| second.generate()).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|name| FIRST_NAMES.contains(&name.as_str())));
    }

    #[test]
    fn uniform_deltas_stay_in_bounds() {
        let mut adjuster = UniformAdjuster::seeded(42);
        for _ in 0..1_000 {
            let delta = adjuster.delta();
            assert!(delta >= -MAX_DELTA && delta <= MAX_DELTA, "delta {delta}");
            assert!(delta.scale() <= 2);
        }
    }

    #[test]
    fn seeded_adjusters_repeat() {
        let mut first = UniformAdjuster::seeded(3);
        let mut second = UniformAdjuster::seeded(3);
        for _ in 0..20 {
            assert_eq!(first.delta(), second.delta());
        }
    }
}
