//! Gain triples and their declared bounds.
//!
//! A candidate solution is three bounded controller gains. Each gain carries
//! a declared range and a bit width; together these fix the quantization
//! grid the codec maps onto.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Decimal digits kept when generating or decoding gains.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Round a gain to the fixed display precision.
#[must_use]
pub fn round_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// Declared range and encoded width for one gain field.
///
/// Bounds are expected at display precision; the scale factor maps the range
/// linearly onto the field's integer span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Width of the encoded field in bits.
    pub bits: u32,
}

impl FieldSpec {
    /// Largest raw value representable in the field.
    #[must_use]
    pub fn max_raw(&self) -> u32 {
        debug_assert!(self.bits >= 1 && self.bits <= 32);
        u32::MAX >> (32 - self.bits)
    }

    /// Linear scale factor from gain units to raw field units.
    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::from(self.max_raw()) / (self.max - self.min)
    }

    /// Size of one quantization step in gain units.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.max - self.min) / f64::from(self.max_raw())
    }

    /// Draw a uniform in-range value at display precision.
    #[must_use]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        round_display(rng.gen_range(self.min..=self.max))
    }
}

/// Declared bounds and widths for the three controller gains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainBounds {
    /// Proportional gain field.
    pub kp: FieldSpec,
    /// Integral time field.
    pub ti: FieldSpec,
    /// Derivative time field.
    pub td: FieldSpec,
}

impl Default for GainBounds {
    fn default() -> Self {
        Self {
            kp: FieldSpec {
                min: 2.00,
                max: 18.00,
                bits: 11,
            },
            ti: FieldSpec {
                min: 1.05,
                max: 9.42,
                bits: 10,
            },
            td: FieldSpec {
                min: 0.26,
                max: 2.37,
                bits: 8,
            },
        }
    }
}

impl GainBounds {
    /// Total encoded width of the three fields.
    #[must_use]
    pub fn total_bits(&self) -> u32 {
        self.kp.bits + self.ti.bits + self.td.bits
    }
}

/// The three controller gains being tuned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainTriple {
    /// Proportional gain.
    pub kp: f64,
    /// Integral time.
    pub ti: f64,
    /// Derivative time.
    pub td: f64,
}

impl GainTriple {
    /// Draw a random triple inside the declared bounds.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, bounds: &GainBounds) -> Self {
        Self {
            kp: bounds.kp.sample(rng),
            ti: bounds.ti.sample(rng),
            td: bounds.td.sample(rng),
        }
    }
}
