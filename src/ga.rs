//! Genetic-algorithm engine for tuning controller gains.
//!
//! Candidate gain triples are quantized onto a fixed-width binary genome
//! and evolved against an external scoring function. One RNG stream drives
//! the whole run, so results are reproducible from the configured seed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Generational Driver          │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │          Genome Codec               │
//! ├─────────────────────────────────────┤
//! │     Fitness Oracle (external)       │
//! └─────────────────────────────────────┘
//! ```

mod codec;
mod crossover;
mod evolution;
mod fitness;
mod genome;
mod mutation;
mod population;
mod selection;

pub use codec::{Genome, GenomeLayout};
pub use crossover::{crossover_with_mask, uniform_crossover};
pub use evolution::{GaConfig, GenerationStats, TuneReport, tune};
pub use fitness::FitnessOracle;
pub use genome::{DISPLAY_DECIMALS, FieldSpec, GainBounds, GainTriple, round_display};
pub use mutation::{reverse_between, reverse_segment};
pub use population::{Individual, Population};
pub use selection::{FitnessStats, select_pair};
