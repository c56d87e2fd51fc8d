//! Damage distribution engine.
//!
//! Attenuates a base damage value by a defense bitmask using a fixed table
//! of 16-bit fixed-point coefficients, then enumerates the damage values a
//! hit can land on when the result spreads uniformly around that average.
//! Two builders produce the same distribution: a per-magnitude reference
//! enumeration and a closed-form bucket counter.

pub mod defense;
pub mod distribution;
pub mod error;
pub mod fixed;
pub mod input;

pub use defense::{COEFFICIENTS, apply_defense};
pub use distribution::{Algorithm, Distribution, DistributionRow, build_distribution};
pub use error::{InputError, InputResult};
pub use fixed::Fixed16;
pub use input::{FieldBounds, parse_field, parse_request};
