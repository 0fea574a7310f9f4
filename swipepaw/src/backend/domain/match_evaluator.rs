//! # Match Evaluator
//!
//! Decides whether an accepting swipe becomes a mutual match. In a real
//! deployment this would be driven by the pet owner or shelter responding;
//! here it is a fixed-probability independent draw per accepting decision.
//!
//! The random source is owned by the evaluator and seedable, so evaluation
//! is deterministic and repeatable under a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{DecisionKind, Pet};

/// Probability that an accept or super-accept becomes a mutual match
pub const MUTUAL_MATCH_PROBABILITY: f64 = 0.10;

/// Evaluates swipe decisions for mutuality
pub struct MatchEvaluator {
    probability: f64,
    rng: StdRng,
}

impl MatchEvaluator {
    /// Create an evaluator with the standard probability and a random seed
    pub fn new() -> Self {
        Self {
            probability: MUTUAL_MATCH_PROBABILITY,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an evaluator with the standard probability and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            probability: MUTUAL_MATCH_PROBABILITY,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an evaluator with an explicit probability.
    ///
    /// Mainly for tests: 1.0 forces every accepting decision to match,
    /// 0.0 forces none to.
    pub fn with_probability(probability: f64, seed: u64) -> Self {
        Self {
            probability,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Decide whether a swipe on a pet becomes a mutual match.
    ///
    /// Reject decisions are never mutual. The current rule ignores the
    /// candidate's attributes; the parameter stays in the signature so a
    /// deterministic attribute-based rule can slot in without changing
    /// callers.
    pub fn evaluate(&mut self, _candidate: &Pet, kind: DecisionKind) -> bool {
        if !kind.is_accepting() {
            return false;
        }

        self.rng.gen::<f64>() < self.probability
    }
}

impl Default for MatchEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::data::sample_pets;

    #[test]
    fn test_reject_is_never_mutual() {
        // Even with a guaranteed-match probability, reject stays false
        let mut evaluator = MatchEvaluator::with_probability(1.0, 42);

        for pet in sample_pets() {
            assert!(!evaluator.evaluate(&pet, DecisionKind::Reject));
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let pets = sample_pets();
        let mut first = MatchEvaluator::with_seed(7);
        let mut second = MatchEvaluator::with_seed(7);

        for _ in 0..100 {
            for pet in &pets {
                assert_eq!(
                    first.evaluate(pet, DecisionKind::Accept),
                    second.evaluate(pet, DecisionKind::Accept)
                );
            }
        }
    }

    #[test]
    fn test_forced_probabilities() {
        let pets = sample_pets();
        let mut always = MatchEvaluator::with_probability(1.0, 1);
        let mut never = MatchEvaluator::with_probability(0.0, 1);

        for pet in &pets {
            assert!(always.evaluate(pet, DecisionKind::Accept));
            assert!(always.evaluate(pet, DecisionKind::SuperAccept));
            assert!(!never.evaluate(pet, DecisionKind::Accept));
        }
    }

    #[test]
    fn test_standard_probability_is_roughly_ten_percent() {
        let pet = &sample_pets()[0];
        let mut evaluator = MatchEvaluator::with_seed(1234);

        let matches = (0..10_000)
            .filter(|_| evaluator.evaluate(pet, DecisionKind::Accept))
            .count();

        // Seeded, so this is a stable check rather than a flaky one
        assert!(matches > 800 && matches < 1200, "got {} matches", matches);
    }
}
