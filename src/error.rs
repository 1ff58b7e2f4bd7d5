//! Error types for the gain tuner.

// Conventional Error-suffixed names repeat the module name
#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Outcome of a fitness evaluation that produced no valid score.
///
/// This is an expected, frequent result (an unstable candidate system,
/// typically): the driver drops the candidate and continues, so it is a
/// first-class value rather than a [`TuneError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unscoreable;

impl fmt::Display for Unscoreable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate could not be scored")
    }
}

impl std::error::Error for Unscoreable {}

/// Fatal failures of a tuning run.
#[derive(Debug, Clone, PartialEq)]
pub enum TuneError {
    /// A gain escaped its declared bound before encoding.
    EncodingOverflow {
        /// Name of the offending field.
        field: &'static str,
        /// The out-of-range value.
        value: f64,
    },
    /// Too few of the initial random candidates scored to start the run.
    InsufficientInitialPopulation {
        /// How many candidates scored successfully.
        scored: usize,
        /// Minimum usable starting population.
        required: usize,
    },
    /// The configuration violates a structural constraint.
    InvalidConfig(String),
}

impl fmt::Display for TuneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuneError::EncodingOverflow { field, value } => {
                write!(f, "{field} value {value} does not fit its encoded field")
            }
            TuneError::InsufficientInitialPopulation { scored, required } => {
                write!(
                    f,
                    "only {scored} of the required {required} initial candidates scored"
                )
            }
            TuneError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for TuneError {}

/// Result type for tuner operations.
pub type TuneResult<T> = Result<T, TuneError>;
