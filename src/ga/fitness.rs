//! The scoring boundary between the tuner and the plant simulation.
//!
//! The engine never inspects how a score is produced. It only requires a
//! finite non-negative scalar where lower is better, or [`Unscoreable`]
//! when the closed-loop response cannot be characterized.

// The oracle trait repeats the module name
#![allow(clippy::module_name_repetitions)]

use crate::error::Unscoreable;
use crate::ga::genome::GainTriple;

/// External scoring contract for candidate gain triples.
pub trait FitnessOracle {
    /// Score a candidate; lower is better.
    ///
    /// # Errors
    ///
    /// [`Unscoreable`] when no valid score exists for the candidate. The
    /// driver drops such candidates and continues.
    fn evaluate(&self, gains: &GainTriple) -> Result<f64, Unscoreable>;
}

impl<F> FitnessOracle for F
where
    F: Fn(&GainTriple) -> Result<f64, Unscoreable>,
{
    fn evaluate(&self, gains: &GainTriple) -> Result<f64, Unscoreable> {
        self(gains)
    }
}
