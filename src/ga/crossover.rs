//! Uniform bit-level crossover.
//!
//! Crossover recombines two parent genomes position by position. The random
//! wrapper builds a swap mask from fair coin flips; the mask kernel is
//! deterministic so recombination can be pinned by test vectors.

// Operator names repeat the module name
#![allow(clippy::module_name_repetitions)]

use crate::ga::codec::Genome;
use rand::Rng;

/// Apply a swap mask to a parent pair.
///
/// Where a mask bit is set the children exchange that position; elsewhere
/// each keeps its own. Parents must share a length, which both children
/// preserve.
#[must_use]
pub fn crossover_with_mask(first: Genome, second: Genome, mask: u32) -> (Genome, Genome) {
    debug_assert_eq!(first.bit_len(), second.bit_len());
    let len = first.bit_len();
    let a = first.raw();
    let b = second.raw();

    let child1 = (a & !mask) | (b & mask);
    let child2 = (b & !mask) | (a & mask);
    (Genome::from_raw(child1, len), Genome::from_raw(child2, len))
}

/// Uniform crossover: one fair coin per bit position decides whether the
/// parents swap that bit between the two children.
#[must_use]
pub fn uniform_crossover<R: Rng>(first: Genome, second: Genome, rng: &mut R) -> (Genome, Genome) {
    let len = first.bit_len();
    let mut mask = 0u32;
    for position in 0..len {
        if rng.gen_bool(0.5) {
            mask |= 1 << (len - 1 - position);
        }
    }
    crossover_with_mask(first, second, mask)
}
