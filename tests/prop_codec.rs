//! Property-based tests for the genome codec and genetic operators.
//!
//! Run with: cargo test prop_codec

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use gaintune::ga::{
    GainBounds, GainTriple, GenomeLayout, crossover_with_mask, reverse_segment, select_pair,
    uniform_crossover,
};

// Half a display unit: decoded gains are rounded to two decimals on top of
// the quantization truncation.
const DISPLAY_SLACK: f64 = 0.005;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Decoding the encoding of any in-bounds triple stays within one
    /// quantization step per field.
    #[test]
    fn prop_roundtrip_within_one_step(
        kp in 2.00f64..=18.00,
        ti in 1.05f64..=9.42,
        td in 0.26f64..=2.37,
    ) {
        let bounds = GainBounds::default();
        let layout = GenomeLayout::new(&bounds).unwrap();
        let triple = GainTriple { kp, ti, td };

        let decoded = layout.decode(layout.encode(&triple).unwrap());
        prop_assert!((decoded.kp - kp).abs() <= bounds.kp.step() + DISPLAY_SLACK);
        prop_assert!((decoded.ti - ti).abs() <= bounds.ti.step() + DISPLAY_SLACK);
        prop_assert!((decoded.td - td).abs() <= bounds.td.step() + DISPLAY_SLACK);
    }

    /// Crossover never changes genome length, and the children decode to
    /// in-bounds gains afterwards.
    #[test]
    fn prop_crossover_preserves_length_and_bounds(
        kp1 in 2.00f64..=18.00, ti1 in 1.05f64..=9.42, td1 in 0.26f64..=2.37,
        kp2 in 2.00f64..=18.00, ti2 in 1.05f64..=9.42, td2 in 0.26f64..=2.37,
        mask in any::<u32>(),
    ) {
        let bounds = GainBounds::default();
        let layout = GenomeLayout::new(&bounds).unwrap();
        let first = layout.encode(&GainTriple { kp: kp1, ti: ti1, td: td1 }).unwrap();
        let second = layout.encode(&GainTriple { kp: kp2, ti: ti2, td: td2 }).unwrap();

        let (c1, c2) = crossover_with_mask(first, second, mask);
        prop_assert_eq!(c1.bit_len(), first.bit_len());
        prop_assert_eq!(c2.bit_len(), second.bit_len());

        for child in [c1, c2] {
            let gains = layout.decode(child);
            prop_assert!(gains.kp >= bounds.kp.min && gains.kp <= bounds.kp.max);
            prop_assert!(gains.ti >= bounds.ti.min && gains.ti <= bounds.ti.max);
            prop_assert!(gains.td >= bounds.td.min && gains.td <= bounds.td.max);
        }
    }

    /// Each crossover position is either kept or swapped, never invented.
    #[test]
    fn prop_crossover_bits_kept_or_swapped(
        kp1 in 2.00f64..=18.00, ti1 in 1.05f64..=9.42, td1 in 0.26f64..=2.37,
        kp2 in 2.00f64..=18.00, ti2 in 1.05f64..=9.42, td2 in 0.26f64..=2.37,
        seed in any::<u64>(),
    ) {
        let layout = GenomeLayout::new(&GainBounds::default()).unwrap();
        let first = layout.encode(&GainTriple { kp: kp1, ti: ti1, td: td1 }).unwrap();
        let second = layout.encode(&GainTriple { kp: kp2, ti: ti2, td: td2 }).unwrap();

        let mut rng = SmallRng::seed_from_u64(seed);
        let (c1, c2) = uniform_crossover(first, second, &mut rng);
        for position in 0..first.bit_len() {
            let kept = c1.bit(position) == first.bit(position)
                && c2.bit(position) == second.bit(position);
            let swapped = c1.bit(position) == second.bit(position)
                && c2.bit(position) == first.bit(position);
            prop_assert!(kept || swapped);
        }
    }

    /// Mutation never changes genome length or population of set bits, and
    /// the result still decodes to in-bounds gains.
    #[test]
    fn prop_mutation_preserves_length_and_bounds(
        kp in 2.00f64..=18.00,
        ti in 1.05f64..=9.42,
        td in 0.26f64..=2.37,
        seed in any::<u64>(),
    ) {
        let bounds = GainBounds::default();
        let layout = GenomeLayout::new(&bounds).unwrap();
        let genome = layout.encode(&GainTriple { kp, ti, td }).unwrap();

        let mut rng = SmallRng::seed_from_u64(seed);
        let mutated = reverse_segment(genome, &mut rng);
        prop_assert_eq!(mutated.bit_len(), genome.bit_len());
        prop_assert_eq!(mutated.raw().count_ones(), genome.raw().count_ones());

        let gains = layout.decode(mutated);
        prop_assert!(gains.kp >= bounds.kp.min && gains.kp <= bounds.kp.max);
        prop_assert!(gains.ti >= bounds.ti.min && gains.ti <= bounds.ti.max);
        prop_assert!(gains.td >= bounds.td.min && gains.td <= bounds.td.max);
    }

    /// The selector always returns two distinct in-range indices.
    #[test]
    fn prop_selector_indices_distinct(
        seed in any::<u64>(),
        scores in prop::collection::vec(0.01f64..100.0, 2..12),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (first, second) = select_pair(&scores, &mut rng);
        prop_assert_ne!(first, second);
        prop_assert!(first < scores.len());
        prop_assert!(second < scores.len());
    }
}
