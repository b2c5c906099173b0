//! # Mutation
//!
//! The [`MutationOperator`] trait is the seam for caller-supplied mutation:
//! given a genome and a rate in `[0, 1]`, it returns a new genome. The
//! [`MutationScheduler`] owns the rate itself, decaying it each generation
//! and resetting it when the population stagnates.

pub mod scheduler;

use crate::gene::Gene;
use crate::rng::RandomNumberGenerator;

pub use scheduler::MutationScheduler;

/// Trait for caller-supplied mutation operators.
///
/// The operator receives the genome by shared reference and returns a new
/// genome, so it cannot mutate its input in place. The engine wraps the
/// returned genome in a fresh individual with an unset fitness slot, which
/// is what keeps memoized fitness values valid across generations.
///
/// `rate` is a fraction in `[0, 1]`, derived from the scheduler's current
/// percentage rate.
pub trait MutationOperator<G: Gene>: Send + Sync {
    /// Returns a mutated copy of `genome` at the given rate.
    fn mutate(&self, genome: &[G], rate: f64, rng: &mut RandomNumberGenerator) -> Vec<G>;
}
