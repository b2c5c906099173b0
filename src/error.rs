//! # Error Types
//!
//! This module defines the error types for the genetic algorithm engine,
//! along with a specialized `Result` alias used throughout the crate.
//!
//! ## Examples
//!
//! ```rust
//! use evolver::error::{GeneticError, Result};
//!
//! fn configure(population_size: usize) -> Result<()> {
//!     if population_size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when mating two individuals whose genomes differ
    /// in length. This is a caller contract violation, not a recoverable
    /// runtime condition: it propagates immediately and aborts the current
    /// mating attempt.
    #[error("Incompatible genomes: parent lengths differ ({left} vs {right})")]
    IncompatibleGenome {
        /// Genome length of the first parent.
        left: usize,
        /// Genome length of the second parent.
        right: usize,
    },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use evolver::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
