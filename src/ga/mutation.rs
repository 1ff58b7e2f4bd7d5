//! Segment-reversal mutation.
//!
//! Mutation reverses a contiguous run of bits between two random positions,
//! endpoints included. The positional kernel is deterministic so the
//! boundary semantics are pinned by test vectors.

use crate::ga::codec::Genome;
use rand::Rng;

/// Reverse the inclusive bit segment `[low, high]`.
///
/// Positions count from the most significant end; `low` must not exceed
/// `high` and both must lie inside the genome. Length is unchanged.
#[must_use]
pub fn reverse_between(genome: Genome, low: u32, high: u32) -> Genome {
    debug_assert!(low <= high && high < genome.bit_len());
    let mut result = genome;
    let mut i = low;
    let mut j = high;
    while i < j {
        let a = result.bit(i);
        let b = result.bit(j);
        result = result.with_bit(i, b).with_bit(j, a);
        i += 1;
        j -= 1;
    }
    result
}

/// Draw two distinct positions and reverse the segment between them,
/// endpoints included.
#[must_use]
pub fn reverse_segment<R: Rng>(genome: Genome, rng: &mut R) -> Genome {
    let len = genome.bit_len();
    let first = rng.gen_range(0..len);
    let mut second = rng.gen_range(0..len);
    while second == first {
        second = rng.gen_range(0..len);
    }
    reverse_between(genome, first.min(second), first.max(second))
}
