//! Money as integer minor units.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A nightly price in minor currency units (e.g. cents).
///
/// Prices travel through the engine as exact integers; the two-decimal
/// rendering required by channel payloads falls out of the representation
/// instead of being a rounding step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// From minor units (cents).
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// From whole major units (e.g. `300` → `300.00`).
    pub const fn from_major(major: u64) -> Self {
        Self(major * 100)
    }

    /// From a major-unit float, rounded half away from zero to the nearest
    /// cent. Negative or non-finite input clamps to zero.
    pub fn from_major_f64(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        Self((value * 100.0).round() as u64)
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Major-unit float for JSON payloads (exact for amounts below 2^53 cents).
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    /// Two-decimal rendering, e.g. `550.00`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_two_decimals() {
        assert_eq!(Price::from_major(300).to_string(), "300.00");
        assert_eq!(Price::from_minor(55050).to_string(), "550.50");
        assert_eq!(Price::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn from_major_f64_rounds_to_cents() {
        assert_eq!(Price::from_major_f64(123.456), Price::from_minor(12346));
        assert_eq!(Price::from_major_f64(99.994), Price::from_minor(9999));
    }

    #[test]
    fn from_major_f64_clamps_bad_input() {
        assert_eq!(Price::from_major_f64(-10.0), Price::ZERO);
        assert_eq!(Price::from_major_f64(f64::NAN), Price::ZERO);
    }
}
