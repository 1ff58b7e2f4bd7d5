//! The generational driver.
//!
//! Orchestrates a tuning run: random initialization, elitist carry-over,
//! repeated mating events to refill the population, re-scoring, re-sorting,
//! and convergence tracking across generations.

// Driver prints verbose progress to stderr
#![allow(clippy::print_stderr)]

use crate::error::{TuneError, TuneResult};
use crate::ga::codec::GenomeLayout;
use crate::ga::crossover::uniform_crossover;
use crate::ga::fitness::FitnessOracle;
use crate::ga::genome::{GainBounds, GainTriple};
use crate::ga::mutation::reverse_segment;
use crate::ga::population::{Individual, Population};
use crate::ga::selection::{FitnessStats, select_pair};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for one tuning run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of candidates generated per generation.
    pub population_size: usize,
    /// Number of generations to run.
    pub generations: usize,
    /// Crossover odds out of 10 per mating event.
    pub crossover_odds: u32,
    /// Mutation odds out of 100, evaluated independently per child.
    pub mutation_odds: u32,
    /// Legacy mating-pool size; not consulted by the active selection path.
    pub mating_pool: usize,
    /// Number of best individuals carried unchanged between generations.
    pub keep: usize,
    /// Declared bounds and bit widths for the three gains.
    pub bounds: GainBounds,
    /// RNG seed for reproducibility.
    pub seed: u64,
    /// Whether to print per-generation progress to stderr.
    pub verbose: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 150,
            crossover_odds: 7,
            mutation_odds: 25,
            mating_pool: 20,
            keep: 2,
            bounds: GainBounds::default(),
            seed: 42,
            verbose: false,
        }
    }
}

impl GaConfig {
    /// Check the configuration before running.
    ///
    /// # Errors
    ///
    /// [`TuneError::InvalidConfig`] describing the first violated
    /// constraint.
    pub fn validate(&self) -> TuneResult<()> {
        if self.population_size < 2 {
            return Err(TuneError::InvalidConfig(
                "population size must be at least two".to_string(),
            ));
        }
        if self.keep == 0 {
            return Err(TuneError::InvalidConfig(
                "at least one elite must be kept per generation".to_string(),
            ));
        }
        if self.keep >= self.population_size {
            return Err(TuneError::InvalidConfig(format!(
                "keep {} must be below population size {}",
                self.keep, self.population_size
            )));
        }
        if self.crossover_odds > 10 {
            return Err(TuneError::InvalidConfig(format!(
                "crossover odds {} exceed 10",
                self.crossover_odds
            )));
        }
        if self.mutation_odds > 100 {
            return Err(TuneError::InvalidConfig(format!(
                "mutation odds {} exceed 100",
                self.mutation_odds
            )));
        }
        GenomeLayout::new(&self.bounds).map(|_| ())
    }
}

/// Statistics for a single generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number, starting at zero.
    pub generation: usize,
    /// Best (lowest) score after this generation's sort.
    pub best_score: f64,
    /// Mean score across the generation.
    pub mean_score: f64,
    /// Score standard deviation.
    pub std_dev: f64,
    /// Individuals that scored successfully this generation.
    pub scored: usize,
}

/// Outcome of a tuning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneReport {
    /// Best individual of the final generation. Elites survive unchanged,
    /// so this is also the best candidate seen across the whole run.
    pub best: Individual,
    /// Best score per generation, oldest first; never increases.
    pub best_per_generation: Vec<f64>,
    /// Per-generation statistics.
    pub generations: Vec<GenerationStats>,
    /// The final generation, sorted best first.
    pub final_population: Population,
}

/// Run the full tuning loop against `oracle`.
///
/// Scoring is sequential and the run is fully determined by `config.seed`.
///
/// # Errors
///
/// [`TuneError::InvalidConfig`] when the configuration fails
/// [`GaConfig::validate`]; [`TuneError::InsufficientInitialPopulation`]
/// when too few initial candidates score; [`TuneError::EncodingOverflow`]
/// if a stored gain escapes its declared bound (an invariant violation).
pub fn tune<O: FitnessOracle>(oracle: &O, config: &GaConfig) -> TuneResult<TuneReport> {
    config.validate()?;
    let layout = GenomeLayout::new(&config.bounds)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut population = initial_population(oracle, config, &mut rng)?;
    population.sort_by_score();

    let mut best_per_generation = Vec::with_capacity(config.generations);
    let mut generations = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        let next = breed_generation(oracle, config, &layout, &population, &mut rng)?;

        let scores = next.scores();
        let stats = FitnessStats::from_scores(&scores);
        let scored = scores.len();
        if config.verbose {
            eprintln!(
                "gen {generation:>4}: best={:.4} mean={:.4} std={:.4} scored={scored}",
                stats.best, stats.mean, stats.std_dev
            );
        }

        best_per_generation.push(stats.best);
        generations.push(GenerationStats {
            generation,
            best_score: stats.best,
            mean_score: stats.mean,
            std_dev: stats.std_dev,
            scored,
        });
        population = next;
    }

    let best = population
        .best()
        .copied()
        .ok_or_else(|| TuneError::InsufficientInitialPopulation {
            scored: 0,
            required: config.keep.max(2),
        })?;

    Ok(TuneReport {
        best,
        best_per_generation,
        generations,
        final_population: population,
    })
}

/// Score `population_size` random candidates, dropping unscoreable ones.
///
/// Dropped candidates are not retried, so the scored set may come up short;
/// a set too small to select and carry elites from is a fatal start.
fn initial_population<O: FitnessOracle, R: Rng>(
    oracle: &O,
    config: &GaConfig,
    rng: &mut R,
) -> TuneResult<Population> {
    let mut population = Population::with_capacity(config.population_size);
    for index in 0..config.population_size {
        let gains = GainTriple::random(rng, &config.bounds);
        if let Ok(score) = oracle.evaluate(&gains) {
            population.push(Individual {
                gains,
                score,
                index,
            });
        }
    }

    let required = config.keep.max(2);
    if population.len() < required {
        return Err(TuneError::InsufficientInitialPopulation {
            scored: population.len(),
            required,
        });
    }
    Ok(population)
}

/// Produce the next generation from a sorted, fully-scored current one.
///
/// Carries the top `keep` unchanged, then runs the mating events. Children
/// the oracle cannot score are dropped, shrinking the generation; this is
/// accepted, not corrected.
fn breed_generation<O: FitnessOracle, R: Rng>(
    oracle: &O,
    config: &GaConfig,
    layout: &GenomeLayout,
    current: &Population,
    rng: &mut R,
) -> TuneResult<Population> {
    let mut next = Population::with_capacity(config.population_size);
    for (rank, elite) in current.individuals().iter().take(config.keep).enumerate() {
        next.push(Individual {
            index: rank,
            ..*elite
        });
    }

    let scores = current.scores();
    // A lone survivor cannot form a distinct parent pair
    let mating_events = if current.len() < 2 {
        0
    } else {
        (config.population_size - config.keep) / 2
    };

    for _ in 0..mating_events {
        let (first, second) = select_pair(&scores, rng);
        let parent1 = layout.encode(&current.individuals()[first].gains)?;
        let parent2 = layout.encode(&current.individuals()[second].gains)?;

        let (mut child1, mut child2) = if rng.gen_range(0..10_u32) < config.crossover_odds {
            uniform_crossover(parent1, parent2, rng)
        } else {
            (parent1, parent2)
        };
        if rng.gen_range(0..100_u32) < config.mutation_odds {
            child1 = reverse_segment(child1, rng);
        }
        if rng.gen_range(0..100_u32) < config.mutation_odds {
            child2 = reverse_segment(child2, rng);
        }

        for child in [child1, child2] {
            let gains = layout.decode(child);
            if let Ok(score) = oracle.evaluate(&gains) {
                next.push(Individual {
                    gains,
                    score,
                    index: next.len(),
                });
            }
        }
    }

    next.sort_by_score();
    Ok(next)
}
