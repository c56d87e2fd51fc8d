//! 16.16 fixed-point values.

use serde::{Deserialize, Serialize};

/// A real number stored as an integer scaled by 65536.
///
/// Backed by `i64`. Every value the engine derives from a `u32` base stays
/// below 2^49, so plain arithmetic never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed16(i64);

impl Fixed16 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 16;
    /// The scale factor, 1.0 in fixed point.
    pub const SCALE: i64 = 1 << Self::FRAC_BITS;
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw scaled value.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Convert a whole number to fixed point.
    pub const fn from_int(value: i64) -> Self {
        Self(value * Self::SCALE)
    }

    /// The raw scaled value.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Integer part, rounding toward negative infinity.
    pub const fn floor_int(self) -> i64 {
        self.0.div_euclid(Self::SCALE)
    }

    /// Lossy conversion for display.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl std::fmt::Display for Fixed16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_scales() {
        assert_eq!(Fixed16::from_int(100).raw(), 6_553_600);
        assert_eq!(Fixed16::from_int(0), Fixed16::ZERO);
    }

    #[test]
    fn floor_int_rounds_down() {
        assert_eq!(Fixed16::from_raw(65_535).floor_int(), 0);
        assert_eq!(Fixed16::from_raw(65_536).floor_int(), 1);
        assert_eq!(Fixed16::from_raw(131_071).floor_int(), 1);
        assert_eq!(Fixed16::from_raw(-1).floor_int(), -1);
        assert_eq!(Fixed16::from_raw(-65_536).floor_int(), -1);
        assert_eq!(Fixed16::from_raw(-65_537).floor_int(), -2);
    }

    #[test]
    fn to_f64_and_display() {
        let half = Fixed16::from_raw(32_768);
        assert!((half.to_f64() - 0.5).abs() < f64::EPSILON);
        assert_eq!(half.to_string(), "32768/65536");
    }

    #[test]
    fn serializes_as_raw_integer() {
        let json = serde_json::to_string(&Fixed16::from_int(2)).unwrap();
        assert_eq!(json, "131072");
    }
}
