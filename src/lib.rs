pub mod error;
pub mod evolution;
pub mod gene;
pub mod individual;
pub mod mating;
pub mod mutation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
pub use evolution::{Engine, EngineOptions, FitnessFunction};
pub use gene::Gene;
pub use individual::Individual;
pub use mutation::{MutationOperator, MutationScheduler};
