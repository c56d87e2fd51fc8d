//! Validation of raw caller input.
//!
//! Turns user-supplied text into the integers the engine expects. The
//! engine never calls into this module; callers validate first and only
//! pass values that made it through.

use crate::error::{InputError, InputResult};

/// Largest accepted base or defense value.
pub const MAX_INPUT: u32 = 9999;

/// Name and inclusive bounds of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    /// Field name used in error messages.
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl FieldBounds {
    /// Create bounds for a named field.
    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    /// Returns true if `value` lies within the bounds.
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

/// Bounds for the base damage.
pub const BASE: FieldBounds = FieldBounds::new("base", 0, MAX_INPUT);

/// Bounds for the defense mask.
pub const DEFENSE: FieldBounds = FieldBounds::new("def", 0, MAX_INPUT);

/// Parse one field.
///
/// Accepts any finite number without a fractional part, so `"100"`,
/// `"1e2"` and `"100.0"` all read as 100. Surrounding whitespace is
/// ignored. Empty input is not an integer.
pub fn parse_field(raw: &str, bounds: FieldBounds) -> InputResult<u32> {
    let value = parse_integer(raw.trim()).ok_or_else(|| InputError::NotInteger {
        field: bounds.name,
        raw: raw.to_string(),
    })?;

    u32::try_from(value)
        .ok()
        .filter(|_| bounds.contains(value))
        .ok_or(InputError::OutOfRange {
            field: bounds.name,
            value,
            min: bounds.min,
            max: bounds.max,
        })
}

/// Parse a base and defense pair, base first.
pub fn parse_request(base: &str, def: &str) -> InputResult<(u32, u32)> {
    let base = parse_field(base, BASE)?;
    let def = parse_field(def, DEFENSE)?;
    Ok((base, def))
}

fn parse_integer(s: &str) -> Option<i64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    // saturates; anything this large is out of range anyway
    Some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_field("0", BASE), Ok(0));
        assert_eq!(parse_field("100", BASE), Ok(100));
        assert_eq!(parse_field("9999", DEFENSE), Ok(9999));
        assert_eq!(parse_field("  42 ", BASE), Ok(42));
        assert_eq!(parse_field("+7", BASE), Ok(7));
    }

    #[test]
    fn integral_number_literals() {
        assert_eq!(parse_field("1e2", BASE), Ok(100));
        assert_eq!(parse_field("100.0", BASE), Ok(100));
        assert_eq!(parse_field("-0", BASE), Ok(0));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "   ", "1.5", "abc", "inf", "NaN", "1e400", "12px"] {
            assert_eq!(
                parse_field(raw, BASE),
                Err(InputError::NotInteger {
                    field: "base",
                    raw: raw.to_string(),
                }),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_field("10000", DEFENSE),
            Err(InputError::OutOfRange {
                field: "def",
                value: 10_000,
                min: 0,
                max: 9999,
            })
        );
        assert!(matches!(
            parse_field("-1", BASE),
            Err(InputError::OutOfRange { value: -1, .. })
        ));
        assert!(matches!(
            parse_field("1e12", BASE),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = parse_field("1.5", BASE).unwrap_err();
        assert_eq!(err.to_string(), "base must be an integer, got \"1.5\"");
        let err = parse_field("12000", DEFENSE).unwrap_err();
        assert_eq!(err.to_string(), "def must be between 0 and 9999, got 12000");
    }

    #[test]
    fn request_checks_base_first() {
        assert_eq!(parse_request("100", "3"), Ok((100, 3)));
        let err = parse_request("x", "y").unwrap_err();
        assert!(matches!(err, InputError::NotInteger { field: "base", .. }));
        let err = parse_request("1", "y").unwrap_err();
        assert!(matches!(err, InputError::NotInteger { field: "def", .. }));
    }

    #[test]
    fn custom_bounds() {
        let bounds = FieldBounds::new("level", 1, 5);
        assert!(bounds.contains(1));
        assert!(!bounds.contains(0));
        assert_eq!(parse_field("5", bounds), Ok(5));
        assert!(parse_field("6", bounds).is_err());
    }
}
