// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Gaintune: a genetic-algorithm tuner for PID controller gains.
//!
//! Candidate gain triples (Kp, Ti, Td) are encoded as fixed-width binary
//! genomes and evolved against an external scoring function. The scoring
//! function — typically a closed-loop step-response simulation — is an
//! external collaborator behind the [`FitnessOracle`] trait: the engine
//! only sees a scalar where lower is better, or [`Unscoreable`] when the
//! candidate system has no usable response.
//!
//! # Example
//!
//! ```
//! use gaintune::{GaConfig, GainTriple, Unscoreable};
//!
//! let config = GaConfig {
//!     population_size: 10,
//!     generations: 5,
//!     ..GaConfig::default()
//! };
//! let oracle = |gains: &GainTriple| -> Result<f64, Unscoreable> {
//!     Ok((gains.kp - 10.0).powi(2) + gains.ti + gains.td)
//! };
//!
//! let report = gaintune::ga::tune(&oracle, &config)?;
//! assert_eq!(report.best_per_generation.len(), 5);
//! # Ok::<(), gaintune::TuneError>(())
//! ```

pub mod error;
pub mod ga;

pub use error::{TuneError, TuneResult, Unscoreable};

// Re-export key engine types at crate root for convenience
pub use ga::{FitnessOracle, GaConfig, GainBounds, GainTriple, TuneReport};
