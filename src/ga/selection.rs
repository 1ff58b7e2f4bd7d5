//! Parent selection over a scored population.
//!
//! Selection is fitness-proportionate by cumulative weight over the raw
//! scores of the current generation.

// Statistics use intentional casts from counts to floats
#![allow(clippy::cast_precision_loss)]

use rand::Rng;

/// Pick two distinct parent indices, weighted by raw score.
///
/// Weights are `score_i / Σ score`. Scores are lower-is-better, so the
/// higher-scoring (worse) individuals are drawn more often; elitism, not
/// selection pressure, is what keeps the convergence curve non-increasing.
/// The second index is redrawn until it differs from the first.
#[must_use]
pub fn select_pair<R: Rng>(scores: &[f64], rng: &mut R) -> (usize, usize) {
    debug_assert!(scores.len() >= 2);
    let total: f64 = scores.iter().sum();

    let first = weighted_index(scores, total, rng);
    let mut second = weighted_index(scores, total, rng);
    while second == first {
        second = weighted_index(scores, total, rng);
    }
    (first, second)
}

/// Cumulative-weight draw over `scores`.
///
/// Falls back to the last index when rounding leaves the cumulative sum
/// short of the draw, and to a uniform draw when the total is not positive.
fn weighted_index<R: Rng>(scores: &[f64], total: f64, rng: &mut R) -> usize {
    if total <= 0.0 {
        return rng.gen_range(0..scores.len());
    }

    let draw: f64 = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (index, score) in scores.iter().enumerate() {
        cumulative += score / total;
        if draw <= cumulative {
            return index;
        }
    }
    scores.len() - 1
}

/// Aggregate score statistics for one generation.
#[derive(Debug, Clone, Copy)]
pub struct FitnessStats {
    /// Mean score.
    pub mean: f64,
    /// Best (lowest) score.
    pub best: f64,
    /// Worst (highest) score.
    pub worst: f64,
    /// Score standard deviation.
    pub std_dev: f64,
}

impl FitnessStats {
    /// Compute statistics from a slice of scores (lower is better).
    #[must_use]
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self {
                mean: 0.0,
                best: 0.0,
                worst: 0.0,
                std_dev: 0.0,
            };
        }

        let sum: f64 = scores.iter().sum();
        let mean = sum / scores.len() as f64;

        let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let variance =
            scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;

        Self {
            mean,
            best,
            worst,
            std_dev: variance.sqrt(),
        }
    }
}
