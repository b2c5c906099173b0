//! # Rank-Weighted Selection
//!
//! Selects parents from a sorted population (index 0 = best) with
//! triangular-number weighting: the individual at rank `i` receives weight
//! `N - i`, so the champion is favoured without ever excluding the weakest
//! rank, which keeps weight 1.
//!
//! The population must already be sorted descending by fitness. That is a
//! precondition of the weighting scheme, not something this module checks
//! at runtime.

use crate::rng::RandomNumberGenerator;

/// Rank-weighted random sampler over a sorted population.
///
/// A single uniform draw in `[0, 1)` is scaled against the total weight
/// `N * (N + 1) / 2` and walked through the cumulative rank weights.
#[derive(Debug, Clone, Default)]
pub struct RankWeightedSelector;

impl RankWeightedSelector {
    /// Picks a rank from a sorted population of `population_len`
    /// individuals, weighting rank `i` by `population_len - i`.
    ///
    /// `population_len` must be nonzero; the engine guarantees this for
    /// every population it owns.
    pub fn pick_rank(
        &self,
        population_len: usize,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let total_weight = (population_len * (population_len + 1) / 2) as f64;
        self.rank_for(rng.gen_fraction() * total_weight, population_len)
    }

    /// Maps a scaled draw in `[0, total_weight)` to a rank.
    ///
    /// A draw that falls through every rank is a floating-point boundary
    /// artifact, not an error; it deterministically lands on the champion.
    fn rank_for(&self, draw: f64, population_len: usize) -> usize {
        let mut cumulative = 0.0;
        for rank in 0..population_len {
            cumulative += (population_len - rank) as f64;
            if draw < cumulative {
                return rank;
            }
        }
        0
    }
}
