//! # Population
//!
//! A fixed-size array of individuals plus a `sorted` flag. After
//! [`Population::evaluate_and_sort`] the array is descending by fitness,
//! index 0 holding the champion; replacing the array for a new generation
//! clears the flag.

use rayon::prelude::*;
use tracing::trace;

use crate::evolution::fitness::FitnessFunction;
use crate::gene::Gene;
use crate::individual::Individual;

/// Fitness differences below `1 / FITNESS_SCALE` are ordering ties.
const FITNESS_SCALE: f64 = 1000.0;

/// The current generation's individuals and their sort state.
#[derive(Debug)]
pub struct Population<G: Gene> {
    individuals: Vec<Individual<G>>,
    sorted: bool,
}

impl<G: Gene> Population<G> {
    /// Creates an unsorted population from `individuals`.
    pub fn new(individuals: Vec<Individual<G>>) -> Self {
        Self {
            individuals,
            sorted: false,
        }
    }

    /// Returns the individuals in their current order.
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    /// Returns the number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns `true` if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns `true` if the array currently reflects a completed sort.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the champion. Meaningful only when sorted; the population
    /// is never empty once an engine owns it.
    pub fn champion(&self) -> &Individual<G> {
        &self.individuals[0]
    }

    /// Replaces the array with the next generation and clears the sort
    /// flag.
    pub fn replace(&mut self, individuals: Vec<Individual<G>>) {
        self.individuals = individuals;
        self.sorted = false;
    }

    /// Evaluates every individual's fitness and sorts descending, so that
    /// index 0 is the champion. A no-op when already sorted.
    ///
    /// Fitness evaluation fans out to the rayon pool when the population
    /// is at least `parallel_threshold` individuals; each worker only
    /// fills its own individual's write-once fitness slot, so the pass is
    /// race-free. The sort treats fitness differences below 0.001 as ties
    /// and keeps the relative order of tied individuals.
    pub fn evaluate_and_sort<F>(&mut self, fitness_fn: &F, parallel_threshold: usize)
    where
        F: FitnessFunction<G>,
    {
        if self.sorted {
            return;
        }

        if self.individuals.len() >= parallel_threshold {
            trace!(count = self.individuals.len(), "evaluating fitness in parallel");
            self.individuals.par_iter().for_each(|individual| {
                individual.fitness(fitness_fn);
            });
        } else {
            for individual in &self.individuals {
                individual.fitness(fitness_fn);
            }
        }

        self.individuals.sort_by(|a, b| {
            let difference = (b.fitness(fitness_fn) - a.fitness(fitness_fn)) * FITNESS_SCALE;
            (difference as i64).cmp(&0)
        });
        self.sorted = true;
    }
}
