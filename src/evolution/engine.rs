//! # Engine
//!
//! The engine owns the population and orchestrates generation transitions:
//! evaluate and sort, copy the champion (strict elitism), refill the
//! remaining slots from selected parent pairs via crossover and mutation,
//! then swap in the new generation and advance the mutation schedule.
//!
//! ## Example
//!
//! ```rust
//! use evolver::evolution::{Engine, EngineOptions, FitnessFunction};
//! use evolver::individual::Individual;
//! use evolver::mutation::MutationOperator;
//! use evolver::rng::RandomNumberGenerator;
//!
//! struct NegativeSpread;
//!
//! impl FitnessFunction<i32> for NegativeSpread {
//!     fn score(&self, genome: &[i32]) -> f64 {
//!         -genome
//!             .windows(2)
//!             .map(|pair| f64::from((pair[1] - pair[0]).abs()))
//!             .sum::<f64>()
//!     }
//! }
//!
//! struct SwapMutation;
//!
//! impl MutationOperator<i32> for SwapMutation {
//!     fn mutate(&self, genome: &[i32], rate: f64, rng: &mut RandomNumberGenerator) -> Vec<i32> {
//!         let mut genome = genome.to_vec();
//!         if genome.len() > 1 && rng.gen_fraction() < rate {
//!             let a = rng.gen_range(0..genome.len());
//!             let b = rng.gen_range(0..genome.len());
//!             genome.swap(a, b);
//!         }
//!         genome
//!     }
//! }
//!
//! let adam = Individual::new(vec![5, 1, 8, 3, 7, 2, 6, 4]);
//! let mut engine = Engine::new(adam, NegativeSpread, SwapMutation, EngineOptions::default())
//!     .unwrap();
//!
//! let champion = engine.run(10, |_champion| {}).unwrap();
//! assert_eq!(champion.genome().len(), 8);
//! ```

use tracing::debug;

use crate::error::Result;
use crate::evolution::fitness::FitnessFunction;
use crate::evolution::options::EngineOptions;
use crate::evolution::population::Population;
use crate::gene::Gene;
use crate::individual::Individual;
use crate::mating::mate;
use crate::mutation::{MutationOperator, MutationScheduler};
use crate::rng::RandomNumberGenerator;
use crate::selection::RankWeightedSelector;

/// The evolutionary engine: population, schedule, and generation loop.
///
/// The control flow is single-threaded; only the per-generation fitness
/// pass may fan out to the rayon pool (see
/// [`Population::evaluate_and_sort`]). Crossover, mutation, and selection
/// all run on the engine thread.
pub struct Engine<G, F, M>
where
    G: Gene,
    F: FitnessFunction<G>,
    M: MutationOperator<G>,
{
    options: EngineOptions,
    fitness_fn: F,
    mutation_op: M,
    population: Population<G>,
    scheduler: MutationScheduler,
    selector: RankWeightedSelector,
    rng: RandomNumberGenerator,
    generation: usize,
}

impl<G, F, M> Engine<G, F, M>
where
    G: Gene,
    F: FitnessFunction<G>,
    M: MutationOperator<G>,
{
    /// Creates an engine seeded with `adam`.
    ///
    /// `adam` occupies slot 0 of the initial population; every other slot
    /// is a mutated copy of it at the maximum mutation rate.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `options` fails
    /// validation.
    pub fn new(adam: Individual<G>, fitness_fn: F, mutation_op: M, options: EngineOptions) -> Result<Self> {
        Self::with_rng(adam, fitness_fn, mutation_op, options, RandomNumberGenerator::new())
    }

    /// Creates an engine with a caller-supplied random number generator,
    /// for reproducible runs.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `options` fails
    /// validation.
    pub fn with_rng(
        adam: Individual<G>,
        fitness_fn: F,
        mutation_op: M,
        options: EngineOptions,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;

        let scheduler = MutationScheduler::new(
            options.get_max_mutation_rate(),
            options.get_min_mutation_rate(),
            options.get_mutation_rate_decay(),
            options.get_stagnation_reset_threshold(),
        );

        let seed_genome = adam.genome().to_vec();
        let seed_rate = options.get_max_mutation_rate() / 100.0;

        let mut individuals = Vec::with_capacity(options.get_population_size());
        individuals.push(adam);
        for _ in 1..options.get_population_size() {
            let genome = mutation_op.mutate(&seed_genome, seed_rate, &mut rng);
            individuals.push(Individual::new(genome));
        }

        Ok(Self {
            options,
            fitness_fn,
            mutation_op,
            population: Population::new(individuals),
            scheduler,
            selector: RankWeightedSelector,
            rng,
            generation: 0,
        })
    }

    /// Returns the current generation counter.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the current mutation rate in the 0–100 percentage domain.
    pub fn mutation_rate(&self) -> f64 {
        self.scheduler.current_rate()
    }

    /// Returns the engine's configuration.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the current population in its current order.
    pub fn population(&self) -> &[Individual<G>] {
        self.population.individuals()
    }

    /// Returns the current champion, or `None` if the population has not
    /// been sorted yet (before the first generation or run).
    pub fn champion(&self) -> Option<&Individual<G>> {
        if self.population.is_sorted() {
            Some(self.population.champion())
        } else {
            None
        }
    }

    /// Performs one generation transition.
    ///
    /// The champion is copied unchanged into slot 0 of the new population.
    /// The remaining slots are filled in pairs: two rank-weighted parent
    /// draws, crossover, and mutation at the scheduler's current rate —
    /// skipped when exactly one parent is the champion (mutate when both
    /// or neither parent is the champion). When one slot remains, a single
    /// mutated child fills it. The new population is evaluated and sorted
    /// before returning, so the champion is immediately available.
    ///
    /// # Errors
    ///
    /// Propagates `GeneticError::IncompatibleGenome` from mating when
    /// earlier crossovers produced genomes of unequal length.
    pub fn evolve_generation(&mut self) -> Result<()> {
        let parallel_threshold = self.options.get_parallel_threshold();
        self.population
            .evaluate_and_sort(&self.fitness_fn, parallel_threshold);

        let size = self.population.len();
        let rate = self.scheduler.current_fraction();

        let mut next = Vec::with_capacity(size);
        next.push(self.population.champion().clone());

        while next.len() + 1 < size {
            let first = self.selector.pick_rank(size, &mut self.rng);
            let second = self.selector.pick_rank(size, &mut self.rng);

            let parents = self.population.individuals();
            let (child_a, child_b) = mate(&parents[first], &parents[second], &mut self.rng)?;

            if (first == 0) ^ (second == 0) {
                // Exactly one parent is the champion: the children keep
                // their crossover genomes unmutated
                next.push(child_a);
                next.push(child_b);
            } else {
                next.push(Individual::new(self.mutation_op.mutate(
                    child_a.genome(),
                    rate,
                    &mut self.rng,
                )));
                next.push(Individual::new(self.mutation_op.mutate(
                    child_b.genome(),
                    rate,
                    &mut self.rng,
                )));
            }
        }

        if next.len() < size {
            let first = self.selector.pick_rank(size, &mut self.rng);
            let second = self.selector.pick_rank(size, &mut self.rng);

            let parents = self.population.individuals();
            let (child, _) = mate(&parents[first], &parents[second], &mut self.rng)?;
            next.push(Individual::new(self.mutation_op.mutate(
                child.genome(),
                rate,
                &mut self.rng,
            )));
        }

        self.population.replace(next);
        self.generation += 1;
        self.population
            .evaluate_and_sort(&self.fitness_fn, parallel_threshold);

        debug!(
            generation = self.generation,
            champion_fitness = self.population.champion().fitness(&self.fitness_fn),
            mutation_rate = self.scheduler.current_rate(),
            "generation complete"
        );

        Ok(())
    }

    /// Runs the engine for `generations` generations, `0` meaning
    /// unbounded (the caller terminates externally).
    ///
    /// `callback` receives the current champion once before any generation,
    /// after each generation whose champion strictly improved, and
    /// unconditionally once more at the end of the run. The mutation
    /// schedule advances once per generation regardless of whether the
    /// callback fires. Returns a clone of the final champion.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Engine::evolve_generation`].
    pub fn run<C>(&mut self, generations: usize, mut callback: C) -> Result<Individual<G>>
    where
        C: FnMut(&Individual<G>),
    {
        let parallel_threshold = self.options.get_parallel_threshold();
        self.population
            .evaluate_and_sort(&self.fitness_fn, parallel_threshold);

        let mut best_fitness = self.population.champion().fitness(&self.fitness_fn);
        callback(self.population.champion());

        let mut completed = 0;
        while generations == 0 || completed < generations {
            self.evolve_generation()?;

            let champion_fitness = self.population.champion().fitness(&self.fitness_fn);
            let improved = champion_fitness > best_fitness;
            if improved {
                debug!(
                    generation = self.generation,
                    champion_fitness, "champion improved"
                );
                best_fitness = champion_fitness;
                callback(self.population.champion());
            }

            self.scheduler.advance(improved);
            completed += 1;
        }

        callback(self.population.champion());
        Ok(self.population.champion().clone())
    }
}
