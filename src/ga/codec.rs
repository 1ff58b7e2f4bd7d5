//! Fixed-width binary genome codec.
//!
//! A genome packs the three gain fields into a single unsigned word,
//! most-significant first: Kp, then Ti, then Td. Field widths and
//! concatenation order are the serialization contract; the genetic
//! operators treat the packed word as an opaque bit-string.

// Quantization intentionally truncates toward zero
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::error::{TuneError, TuneResult};
use crate::ga::genome::{FieldSpec, GainBounds, GainTriple, round_display};
use serde::{Deserialize, Serialize};

/// A fixed-length bit-string genome.
///
/// Bit positions count from the most significant end: position 0 is the
/// first bit of the Kp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    raw: u32,
    len: u32,
}

impl Genome {
    /// Build a genome from a raw word and total bit length.
    ///
    /// Bits above `len` are masked off.
    #[must_use]
    pub fn from_raw(raw: u32, len: u32) -> Self {
        debug_assert!(len >= 1 && len <= 32);
        let mask = if len == 32 { u32::MAX } else { (1 << len) - 1 };
        Self {
            raw: raw & mask,
            len,
        }
    }

    /// Raw packed word; only the low [`Self::bit_len`] bits are significant.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.raw
    }

    /// Total bit length.
    #[must_use]
    pub fn bit_len(self) -> u32 {
        self.len
    }

    /// Bit at `position`, counted from the most significant end.
    #[must_use]
    pub fn bit(self, position: u32) -> bool {
        debug_assert!(position < self.len);
        (self.raw >> (self.len - 1 - position)) & 1 == 1
    }

    /// Copy of the genome with the bit at `position` set to `value`.
    #[must_use]
    pub fn with_bit(self, position: u32, value: bool) -> Self {
        debug_assert!(position < self.len);
        let mask = 1 << (self.len - 1 - position);
        let raw = if value {
            self.raw | mask
        } else {
            self.raw & !mask
        };
        Self { raw, len: self.len }
    }
}

/// Placement of one field inside the packed word.
#[derive(Debug, Clone, Copy)]
struct FieldLayout {
    spec: FieldSpec,
    shift: u32,
}

/// Packed field placement derived from declared bounds.
#[derive(Debug, Clone, Copy)]
pub struct GenomeLayout {
    kp: FieldLayout,
    ti: FieldLayout,
    td: FieldLayout,
    total_bits: u32,
}

impl GenomeLayout {
    /// Derive the packed layout for the given bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::InvalidConfig`] for inverted bounds, zero-width
    /// fields, or a total width beyond 32 bits.
    pub fn new(bounds: &GainBounds) -> TuneResult<Self> {
        for (name, spec) in [("Kp", bounds.kp), ("Ti", bounds.ti), ("Td", bounds.td)] {
            if spec.bits == 0 {
                return Err(TuneError::InvalidConfig(format!(
                    "{name} field width must be at least one bit"
                )));
            }
            if spec.min >= spec.max {
                return Err(TuneError::InvalidConfig(format!(
                    "{name} bounds are inverted or empty ({} ..= {})",
                    spec.min, spec.max
                )));
            }
        }
        let total = bounds.total_bits();
        if total > 32 {
            return Err(TuneError::InvalidConfig(format!(
                "total genome width {total} exceeds 32 bits"
            )));
        }
        Ok(Self {
            kp: FieldLayout {
                spec: bounds.kp,
                shift: bounds.ti.bits + bounds.td.bits,
            },
            ti: FieldLayout {
                spec: bounds.ti,
                shift: bounds.td.bits,
            },
            td: FieldLayout {
                spec: bounds.td,
                shift: 0,
            },
            total_bits: total,
        })
    }

    /// Total bit length of encoded genomes.
    #[must_use]
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Encode a gain triple into its packed genome.
    ///
    /// # Errors
    ///
    /// Returns [`TuneError::EncodingOverflow`] if a gain lies outside its
    /// declared bound. The driver only ever encodes generated or decoded
    /// values, which are in range by construction, so this surfacing means
    /// an invariant was violated upstream.
    pub fn encode(&self, gains: &GainTriple) -> TuneResult<Genome> {
        let kp = encode_field("Kp", &self.kp, gains.kp)?;
        let ti = encode_field("Ti", &self.ti, gains.ti)?;
        let td = encode_field("Td", &self.td, gains.td)?;
        Ok(Genome::from_raw(
            (kp << self.kp.shift) | (ti << self.ti.shift) | td,
            self.total_bits,
        ))
    }

    /// Decode a packed genome back to gains at display precision.
    ///
    /// Inverse of [`Self::encode`] up to one quantization step per field.
    #[must_use]
    pub fn decode(&self, genome: Genome) -> GainTriple {
        debug_assert_eq!(genome.bit_len(), self.total_bits);
        GainTriple {
            kp: decode_field(&self.kp, genome.raw()),
            ti: decode_field(&self.ti, genome.raw()),
            td: decode_field(&self.td, genome.raw()),
        }
    }
}

fn encode_field(name: &'static str, field: &FieldLayout, value: f64) -> TuneResult<u32> {
    let spec = &field.spec;
    let scaled = ((value - spec.min) * spec.factor()).trunc();
    if scaled < 0.0 || scaled > f64::from(spec.max_raw()) {
        return Err(TuneError::EncodingOverflow { field: name, value });
    }
    Ok(scaled as u32)
}

fn decode_field(field: &FieldLayout, raw: u32) -> f64 {
    let spec = &field.spec;
    let bits = (raw >> field.shift) & spec.max_raw();
    round_display(f64::from(bits) / spec.factor() + spec.min)
}
