//! Injectable source of random outcomes for the simulated network calls

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a simulated operation fails
pub trait OutcomeSource: Send {
    /// Returns true with the given probability (0.0 ..= 1.0)
    fn fails(&mut self, probability: f64) -> bool;
}

/// Uniform random outcomes
pub struct RandomOutcome {
    rng: StdRng,
}

impl RandomOutcome {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, handy for demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSource for RandomOutcome {
    fn fails(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}

/// Scripted outcomes: pops from the front of the queue, then repeats `fallback`
#[derive(Debug, Clone, Default)]
pub struct FixedOutcome {
    queue: std::collections::VecDeque<bool>,
    fallback: bool,
}

impl FixedOutcome {
    pub fn always_succeed() -> Self {
        Self::default()
    }

    pub fn always_fail() -> Self {
        Self {
            queue: Default::default(),
            fallback: true,
        }
    }

    /// `true` entries are failures
    pub fn sequence(outcomes: &[bool]) -> Self {
        Self {
            queue: outcomes.iter().copied().collect(),
            fallback: false,
        }
    }
}

impl OutcomeSource for FixedOutcome {
    fn fails(&mut self, _probability: f64) -> bool {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_outcome_respects_extremes() {
        let mut source = RandomOutcome::seeded(7);
        for _ in 0..100 {
            assert!(!source.fails(0.0));
            assert!(source.fails(1.0));
        }
    }

    #[test]
    fn test_random_outcome_rate_is_roughly_right() {
        let mut source = RandomOutcome::seeded(42);
        let failures = (0..10_000).filter(|_| source.fails(0.2)).count();
        assert!((1_500..2_500).contains(&failures), "got {}", failures);
    }

    #[test]
    fn test_fixed_outcome_sequence() {
        let mut source = FixedOutcome::sequence(&[true, false]);
        assert!(source.fails(0.5));
        assert!(!source.fails(0.5));
        assert!(!source.fails(0.5));
        assert!(FixedOutcome::always_fail().fails(0.0));
    }
}
