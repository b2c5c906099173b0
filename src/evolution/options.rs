//! # EngineOptions
//!
//! The `EngineOptions` struct represents the configuration recognized by
//! the engine: population size, the mutation-rate schedule bounds, the
//! stagnation reset threshold, the parallel-evaluation threshold, and
//! optional rotation parameters reserved for caller extensions.
//!
//! ## Example
//!
//! ```rust
//! use evolver::evolution::EngineOptions;
//!
//! // Custom parameters
//! let custom_options = EngineOptions::new(20, 80.0, 5.0, 5.0, 25);
//!
//! // Defaults
//! let default_options = EngineOptions::default();
//! assert_eq!(default_options.get_population_size(), 10);
//!
//! // Builder
//! let built = EngineOptions::builder()
//!     .population_size(50)
//!     .stagnation_reset_threshold(20)
//!     .build();
//! assert_eq!(built.get_population_size(), 50);
//! ```

use crate::error::{GeneticError, Result};

/// Rotation bounds in degrees, forwarded to mutation operators that rotate
/// genome elements. The engine itself never reads these; they exist so
/// rotation-aware callers can configure their operators alongside the
/// engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationOptions {
    pub min_degrees: f64,
    pub max_degrees: f64,
}

/// Configuration options for the engine.
///
/// All mutation rates are percentages in `[0, 100]`; mutation operators
/// receive the scheduler's current rate divided by 100.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    population_size: usize,
    max_mutation_rate: f64,
    mutation_rate_decay: f64,
    min_mutation_rate: f64,
    stagnation_reset_threshold: usize,
    /// Minimum population size before fitness evaluation fans out to the
    /// rayon thread pool.
    parallel_threshold: usize,
    rotation: Option<RotationOptions>,
}

impl EngineOptions {
    /// Creates a new `EngineOptions` instance with the specified
    /// parameters and the default parallel threshold.
    pub fn new(
        population_size: usize,
        max_mutation_rate: f64,
        mutation_rate_decay: f64,
        min_mutation_rate: f64,
        stagnation_reset_threshold: usize,
    ) -> Self {
        Self {
            population_size,
            max_mutation_rate,
            mutation_rate_decay,
            min_mutation_rate,
            stagnation_reset_threshold,
            parallel_threshold: 1000,
            rotation: None,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_mutation_rate(&self) -> f64 {
        self.max_mutation_rate
    }

    pub fn get_mutation_rate_decay(&self) -> f64 {
        self.mutation_rate_decay
    }

    pub fn get_min_mutation_rate(&self) -> f64 {
        self.min_mutation_rate
    }

    pub fn get_stagnation_reset_threshold(&self) -> usize {
        self.stagnation_reset_threshold
    }

    /// Returns the minimum population size for parallel fitness evaluation.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns the rotation bounds, if configured.
    pub fn get_rotation(&self) -> Option<&RotationOptions> {
        self.rotation.as_ref()
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if the population is
    /// empty, any rate lies outside `[0, 100]`, or the minimum mutation
    /// rate exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        for (name, rate) in [
            ("max_mutation_rate", self.max_mutation_rate),
            ("mutation_rate_decay", self.mutation_rate_decay),
            ("min_mutation_rate", self.min_mutation_rate),
        ] {
            if !(0.0..=100.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be in the range [0, 100], got {}",
                    name, rate
                )));
            }
        }

        if self.min_mutation_rate > self.max_mutation_rate {
            return Err(GeneticError::Configuration(format!(
                "min_mutation_rate ({}) cannot exceed max_mutation_rate ({})",
                self.min_mutation_rate, self.max_mutation_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EngineOptions` instance.
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_mutation_rate: 100.0,
            mutation_rate_decay: 10.0,
            min_mutation_rate: 10.0,
            stagnation_reset_threshold: 40,
            parallel_threshold: 1000,
            rotation: None,
        }
    }
}

/// Builder for `EngineOptions`.
///
/// Provides a fluent interface for constructing `EngineOptions` instances;
/// unset fields take the defaults.
#[derive(Debug, Clone, Default)]
pub struct EngineOptionsBuilder {
    population_size: Option<usize>,
    max_mutation_rate: Option<f64>,
    mutation_rate_decay: Option<f64>,
    min_mutation_rate: Option<f64>,
    stagnation_reset_threshold: Option<usize>,
    parallel_threshold: Option<usize>,
    rotation: Option<RotationOptions>,
}

impl EngineOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the maximum mutation rate percentage.
    pub fn max_mutation_rate(mut self, value: f64) -> Self {
        self.max_mutation_rate = Some(value);
        self
    }

    /// Sets the per-generation mutation rate decay percentage.
    pub fn mutation_rate_decay(mut self, value: f64) -> Self {
        self.mutation_rate_decay = Some(value);
        self
    }

    /// Sets the minimum mutation rate percentage.
    pub fn min_mutation_rate(mut self, value: f64) -> Self {
        self.min_mutation_rate = Some(value);
        self
    }

    /// Sets the stagnation reset threshold in generations.
    pub fn stagnation_reset_threshold(mut self, value: usize) -> Self {
        self.stagnation_reset_threshold = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Sets the rotation bounds.
    pub fn rotation(mut self, value: RotationOptions) -> Self {
        self.rotation = Some(value);
        self
    }

    /// Builds the `EngineOptions` instance.
    pub fn build(self) -> EngineOptions {
        let defaults = EngineOptions::default();
        EngineOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            max_mutation_rate: self
                .max_mutation_rate
                .unwrap_or(defaults.max_mutation_rate),
            mutation_rate_decay: self
                .mutation_rate_decay
                .unwrap_or(defaults.mutation_rate_decay),
            min_mutation_rate: self
                .min_mutation_rate
                .unwrap_or(defaults.min_mutation_rate),
            stagnation_reset_threshold: self
                .stagnation_reset_threshold
                .unwrap_or(defaults.stagnation_reset_threshold),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            rotation: self.rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_max_mutation_rate(), 100.0);
        assert_eq!(options.get_mutation_rate_decay(), 10.0);
        assert_eq!(options.get_min_mutation_rate(), 10.0);
        assert_eq!(options.get_stagnation_reset_threshold(), 40);
        assert_eq!(options.get_parallel_threshold(), 1000);
        assert!(options.get_rotation().is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_and_defaults() {
        let options = EngineOptions::builder()
            .population_size(20)
            .max_mutation_rate(80.0)
            .rotation(RotationOptions {
                min_degrees: -15.0,
                max_degrees: 15.0,
            })
            .build();

        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_max_mutation_rate(), 80.0);
        assert_eq!(options.get_min_mutation_rate(), 10.0);
        assert_eq!(
            options.get_rotation(),
            Some(&RotationOptions {
                min_degrees: -15.0,
                max_degrees: 15.0,
            })
        );
    }

    #[test]
    fn test_zero_population_is_rejected() {
        let options = EngineOptions::builder().population_size(0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_out_of_range_rates_are_rejected() {
        let options = EngineOptions::builder().max_mutation_rate(120.0).build();
        assert!(options.validate().is_err());

        let options = EngineOptions::builder().min_mutation_rate(-1.0).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_inverted_rate_bounds_are_rejected() {
        let options = EngineOptions::builder()
            .max_mutation_rate(20.0)
            .min_mutation_rate(30.0)
            .build();
        assert!(options.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_round_trip_through_serde() {
        let options = EngineOptions::builder()
            .population_size(12)
            .rotation(RotationOptions {
                min_degrees: 0.0,
                max_degrees: 90.0,
            })
            .build();

        let json = serde_json::to_string(&options).unwrap();
        let restored: EngineOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.get_population_size(), 12);
        assert_eq!(restored.get_rotation(), options.get_rotation());
    }
}
