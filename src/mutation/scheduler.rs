//! # MutationScheduler
//!
//! Owns the current mutation rate and evolves it once per generation: a
//! percentage decay bounded below by the minimum rate, and a reset back to
//! the maximum rate after too many consecutive generations without
//! improvement.
//!
//! All rates live in the 0–100 percentage domain; consumers receive the
//! current rate divided by 100 as a 0–1 fraction via
//! [`MutationScheduler::current_fraction`].

use tracing::debug;

/// Adaptive mutation-rate schedule with stagnation reset.
///
/// Each generation the rate decays by `ceil(current * adjustment / 100)`,
/// clamped to `min_rate`. A strict champion-fitness improvement zeroes the
/// stale counter; `reset_threshold` consecutive non-improving generations
/// snap the rate back to `max_rate`. The reset is applied after the decay
/// step, so the generation following a reset runs at exactly `max_rate`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationScheduler {
    max_rate: f64,
    min_rate: f64,
    adjustment_percent: f64,
    reset_threshold: usize,
    current_rate: f64,
    stale_count: usize,
}

impl MutationScheduler {
    /// Creates a scheduler starting at `max_rate`.
    ///
    /// Rates are percentages in `[0, 100]`; the engine validates them
    /// before construction.
    pub fn new(
        max_rate: f64,
        min_rate: f64,
        adjustment_percent: f64,
        reset_threshold: usize,
    ) -> Self {
        Self {
            max_rate,
            min_rate,
            adjustment_percent,
            reset_threshold,
            current_rate: max_rate,
            stale_count: 0,
        }
    }

    /// Returns the current mutation rate in the 0–100 percentage domain.
    pub fn current_rate(&self) -> f64 {
        self.current_rate
    }

    /// Returns the current mutation rate as a fraction in `[0, 1]`, the
    /// form mutation operators consume.
    pub fn current_fraction(&self) -> f64 {
        self.current_rate / 100.0
    }

    /// Returns the number of consecutive non-improving generations seen
    /// since the last improvement or reset.
    pub fn stale_count(&self) -> usize {
        self.stale_count
    }

    /// Advances the schedule by one generation.
    ///
    /// `improved` must reflect a strict improvement: a new champion fitness
    /// greater than the previous one. Equal fitness counts as stagnation.
    pub fn advance(&mut self, improved: bool) {
        let decay = (self.current_rate * self.adjustment_percent / 100.0).ceil();
        self.current_rate = (self.current_rate - decay).max(self.min_rate);

        if improved {
            self.stale_count = 0;
        } else {
            self.stale_count += 1;
            if self.stale_count >= self.reset_threshold {
                debug!(
                    stale_generations = self.stale_count,
                    max_rate = self.max_rate,
                    "mutation rate reset after stagnation"
                );
                self.current_rate = self.max_rate;
                self.stale_count = 0;
            }
        }
    }
}
