//! # Individual
//!
//! An `Individual` is one candidate solution: an ordered genome plus a
//! memoized fitness value. Fitness is computed lazily through the
//! population-wide fitness function on first access and never recomputed
//! for the same instance.
//!
//! ## Example
//!
//! ```rust
//! use evolver::evolution::FitnessFunction;
//! use evolver::individual::Individual;
//!
//! struct Sum;
//!
//! impl FitnessFunction<i32> for Sum {
//!     fn score(&self, genome: &[i32]) -> f64 {
//!         genome.iter().map(|g| f64::from(*g)).sum()
//!     }
//! }
//!
//! let individual = Individual::new(vec![1, 2, 3]);
//! assert_eq!(individual.cached_fitness(), None);
//! assert_eq!(individual.fitness(&Sum), 6.0);
//! assert_eq!(individual.cached_fitness(), Some(6.0));
//! ```

use std::sync::OnceLock;

use crate::evolution::FitnessFunction;
use crate::gene::Gene;

/// One candidate solution: a genome plus a write-once fitness slot.
///
/// The slot makes the memoization invariant explicit: it is either unset or
/// computed, and once computed it can never change. Cloning an individual
/// clones the genome and carries the computed fitness along, which is how
/// strict elitism preserves the champion without re-evaluating it.
#[derive(Debug, Clone)]
pub struct Individual<G: Gene> {
    genome: Vec<G>,
    fitness: OnceLock<f64>,
}

impl<G: Gene> Individual<G> {
    /// Creates an individual from a genome, with the fitness slot unset.
    pub fn new(genome: Vec<G>) -> Self {
        Self {
            genome,
            fitness: OnceLock::new(),
        }
    }

    /// Returns the genome.
    pub fn genome(&self) -> &[G] {
        &self.genome
    }

    /// Returns the fitness of this individual, computing it through
    /// `fitness_fn` on first call and returning the cached value on every
    /// call after that.
    ///
    /// The fitness function must be a pure function of the genome: the
    /// engine relies on that purity to memoize here and to evaluate
    /// distinct individuals concurrently. The slot is written at most once
    /// even under concurrent access.
    pub fn fitness<F>(&self, fitness_fn: &F) -> f64
    where
        F: FitnessFunction<G> + ?Sized,
    {
        *self
            .fitness
            .get_or_init(|| fitness_fn.score(&self.genome))
    }

    /// Returns the cached fitness, or `None` if it has not been computed.
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct CountingFitness {
        evaluations: Arc<AtomicUsize>,
    }

    impl FitnessFunction<i32> for CountingFitness {
        fn score(&self, genome: &[i32]) -> f64 {
            self.evaluations.fetch_add(1, Ordering::SeqCst);
            genome.iter().map(|g| f64::from(*g)).sum()
        }
    }

    #[test]
    fn test_fitness_is_computed_once() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let fitness_fn = CountingFitness {
            evaluations: Arc::clone(&evaluations),
        };

        let individual = Individual::new(vec![1, 2, 3]);
        assert_eq!(individual.cached_fitness(), None);

        let first = individual.fitness(&fitness_fn);
        let second = individual.fitness(&fitness_fn);

        assert_eq!(first, 6.0);
        assert_eq!(second, 6.0);
        // The function ran exactly once for this instance
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_carries_computed_fitness() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let fitness_fn = CountingFitness {
            evaluations: Arc::clone(&evaluations),
        };

        let individual = Individual::new(vec![4, 5]);
        individual.fitness(&fitness_fn);

        let copy = individual.clone();
        assert_eq!(copy.cached_fitness(), Some(9.0));

        // The clone reuses the cached value instead of recomputing
        assert_eq!(copy.fitness(&fitness_fn), 9.0);
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fresh_instance_with_same_genome_recomputes() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let fitness_fn = CountingFitness {
            evaluations: Arc::clone(&evaluations),
        };

        let a = Individual::new(vec![1, 2]);
        let b = Individual::new(vec![1, 2]);

        a.fitness(&fitness_fn);
        b.fitness(&fitness_fn);

        // Memoization is per instance, not per genome
        assert_eq!(evaluations.load(Ordering::SeqCst), 2);
    }
}
