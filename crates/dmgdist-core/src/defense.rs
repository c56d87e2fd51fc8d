//! Defense attenuation.
//!
//! A defense value is a bitmask over nine fixed multiplicative
//! coefficients. Each set bit scales the running damage by its
//! coefficient, lowest bit first, discarding the fractional part before
//! every step so precision never compounds across coefficients.

use crate::fixed::Fixed16;

/// Number of meaningful bits in a defense mask.
pub const DEFENSE_BITS: usize = 9;

/// Attenuation coefficients in 16.16 fixed point, indexed by mask bit.
///
/// Every entry is below 1.0 and the table is strictly decreasing.
pub const COEFFICIENTS: [i64; DEFENSE_BITS] = [
    0xF8E4, 0xF1FA, 0xE4B8, 0xCC58, 0xA31D, 0x67EE, 0x2A31, 0x06F4, 0x0030,
];

/// Returns true if bit `index` of `mask` selects its coefficient.
pub fn bit_set(mask: u32, index: usize) -> bool {
    mask & (1 << index) != 0
}

/// Apply the coefficients selected by `mask` to `base`.
///
/// Bits above the ninth are ignored. Inputs are expected to be validated
/// by the caller; the function is total over `u32` either way.
pub fn apply_defense(base: u32, mask: u32) -> Fixed16 {
    COEFFICIENTS
        .iter()
        .enumerate()
        .filter(|&(i, _)| bit_set(mask, i))
        .fold(Fixed16::from_int(i64::from(base)), |acc, (_, &coeff)| {
            Fixed16::from_raw(acc.floor_int() * coeff)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_bits_is_identity() {
        assert_eq!(apply_defense(100, 0).raw(), 6_553_600);
        assert_eq!(apply_defense(9999, 0).raw(), 655_294_464);
    }

    #[test]
    fn zero_base_stays_zero() {
        for mask in [0, 1, 0x1FF, 9999] {
            assert_eq!(apply_defense(0, mask), Fixed16::ZERO);
        }
    }

    #[test]
    fn single_coefficient() {
        assert_eq!(apply_defense(100, 0b1).raw(), 100 * 0xF8E4);
    }

    #[test]
    fn fraction_is_dropped_between_steps() {
        // 100 * 0xF8E4 = 97.22..., only 97 carries into the second step
        assert_eq!(apply_defense(100, 0b11).raw(), 97 * 0xF1FA);
        assert_eq!(apply_defense(100, 0b11).raw(), 6_008_762);
    }

    #[test]
    fn mixed_bits() {
        assert_eq!(apply_defense(50, 0b10101).raw(), 1_753_794);
    }

    #[test]
    fn all_bits() {
        assert_eq!(apply_defense(100, 0x1FF).raw(), 0);
        assert_eq!(apply_defense(9999, 0x1FF).raw(), 336);
    }

    #[test]
    fn high_bits_ignored() {
        assert_eq!(apply_defense(100, 0x200), apply_defense(100, 0));
        assert_eq!(apply_defense(100, 0x203), apply_defense(100, 0b11));
    }

    #[test]
    fn table_is_decreasing_and_below_one() {
        assert!(COEFFICIENTS.windows(2).all(|w| w[0] > w[1]));
        assert!(COEFFICIENTS.iter().all(|&c| c > 0 && c < Fixed16::SCALE));
    }

    #[test]
    fn bit_predicate() {
        assert!(bit_set(0b100, 2));
        assert!(!bit_set(0b100, 1));
        assert!(bit_set(9999, 0));
    }
}
