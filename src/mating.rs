//! # Mating
//!
//! Split-point crossover with deduplication. Two parents of equal genome
//! length produce two children: each child takes one parent's prefix up to
//! the split index, then the other parent's genes in their original order,
//! skipping any gene already present in the child.
//!
//! Skipping duplicates keeps children free of repeated genes when the
//! parents are — the permutation-genome use case, where each gene is a
//! distinct city or task — at the cost of a child genome that can differ
//! in length from its parents when the parents themselves carry
//! duplicates.

use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Genomes longer than this split at the exact midpoint; shorter genomes
/// draw a random split away from the ends to avoid degenerate crossovers.
const MIDPOINT_SPLIT_LENGTH: usize = 7;

/// Produces two offspring from two parents via split-point crossover.
///
/// Both children are returned with unset fitness and are scored lazily
/// under the population-wide fitness function, like every other
/// individual.
///
/// # Errors
///
/// Returns [`GeneticError::IncompatibleGenome`] if the parents' genome
/// lengths differ. This is a programming-contract violation and is not
/// retried.
pub fn mate<G: Gene>(
    parent_a: &Individual<G>,
    parent_b: &Individual<G>,
    rng: &mut RandomNumberGenerator,
) -> Result<(Individual<G>, Individual<G>)> {
    let a = parent_a.genome();
    let b = parent_b.genome();

    if a.len() != b.len() {
        return Err(GeneticError::IncompatibleGenome {
            left: a.len(),
            right: b.len(),
        });
    }

    let split = split_index(a.len(), rng);

    Ok((
        Individual::new(cross(a, b, split)),
        Individual::new(cross(b, a, split)),
    ))
}

/// Picks the crossover split index for a genome of the given length.
///
/// Lengths above [`MIDPOINT_SPLIT_LENGTH`] split at exactly `len / 2`;
/// shorter genomes draw uniformly from `[len / 4, 3 * len / 4)`, falling
/// back to the lower bound when the range is empty.
fn split_index(len: usize, rng: &mut RandomNumberGenerator) -> usize {
    if len > MIDPOINT_SPLIT_LENGTH {
        len / 2
    } else {
        let lower = len / 4;
        let upper = 3 * len / 4;
        if lower < upper {
            rng.gen_range(lower..upper)
        } else {
            lower
        }
    }
}

/// Builds one child: the prefix parent's genes up to `split`, then the
/// suffix parent's genes in order, skipping any gene already present in
/// the child.
fn cross<G: Gene>(prefix_parent: &[G], suffix_parent: &[G], split: usize) -> Vec<G> {
    let mut child: Vec<G> = prefix_parent[..split].to_vec();

    for gene in suffix_parent {
        if !child.contains(gene) {
            child.push(gene.clone());
        }
    }

    child
}
