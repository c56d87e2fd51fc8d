//! Damage distributions.
//!
//! A hit deals damage spread uniformly over a window of magnitudes
//! `0..=width` on either side of the fixed-point average, where `width`
//! is one eighth of the average. Every (side, magnitude) pair is one
//! equally likely outcome, so a window always holds `2 * (width + 1)`
//! outcomes. Magnitude zero is counted once per side.
//!
//! Two builders compute the same [`Distribution`]:
//! - [`reference`] walks every magnitude in the window
//! - [`fast`] counts each damage bucket's magnitude range in closed form

pub mod fast;
pub mod reference;
pub mod sample;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defense::apply_defense;
use crate::fixed::Fixed16;

/// One damage value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    /// Damage dealt, at least 1.
    pub damage: u64,
    /// Number of outcomes landing on this damage.
    pub count: u64,
    /// `count / total_outcomes`.
    pub prob: f64,
    /// Running sum of `prob` up to and including this row.
    pub cum_prob: f64,
}

/// The full damage distribution for one base and defense pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Average damage after defense.
    pub avg: Fixed16,
    /// Largest magnitude offset from the average, in raw fixed-point units.
    pub width: Fixed16,
    /// Number of equally likely outcomes in the window.
    pub total_outcomes: u64,
    /// Rows in strictly ascending damage order.
    pub rows: Vec<DistributionRow>,
}

impl Distribution {
    /// Assemble rows from per-damage outcome counts.
    ///
    /// Both builders go through here so their probabilities are computed
    /// by identical floating-point steps.
    pub(crate) fn from_counts(avg: Fixed16, width: Fixed16, counts: BTreeMap<u64, u64>) -> Self {
        let total_outcomes = outcome_count(width);
        let mut cumulative = 0.0;
        let rows = counts
            .into_iter()
            .map(|(damage, count)| {
                let prob = count as f64 / total_outcomes as f64;
                cumulative += prob;
                DistributionRow {
                    damage,
                    count,
                    prob,
                    cum_prob: cumulative,
                }
            })
            .collect();

        Self {
            avg,
            width,
            total_outcomes,
            rows,
        }
    }

    /// Lowest damage in the distribution (1 if there are no rows).
    pub fn min_damage(&self) -> u64 {
        self.rows.first().map_or(1, |r| r.damage)
    }

    /// Highest damage in the distribution (1 if there are no rows).
    pub fn max_damage(&self) -> u64 {
        self.rows.last().map_or(1, |r| r.damage)
    }

    /// The average as a float, for display.
    pub fn avg_damage(&self) -> f64 {
        self.avg.to_f64()
    }

    /// Look up the row for a damage value.
    pub fn get(&self, damage: u64) -> Option<&DistributionRow> {
        self.rows
            .binary_search_by_key(&damage, |r| r.damage)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Probability that a hit deals at most `damage`.
    pub fn cdf(&self, damage: u64) -> f64 {
        let idx = self.rows.partition_point(|r| r.damage <= damage);
        if idx == 0 {
            0.0
        } else {
            self.rows[idx - 1].cum_prob
        }
    }

    /// Sum of all row counts.
    pub fn counted_outcomes(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }
}

/// Which builder to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// One step per magnitude in the window.
    Reference,
    /// One step per damage bucket.
    #[default]
    Fast,
}

impl Algorithm {
    /// Build the distribution for `base` attenuated by `mask`.
    pub fn build(self, base: u32, mask: u32) -> Distribution {
        match self {
            Self::Reference => reference::build(base, mask),
            Self::Fast => fast::build(base, mask),
        }
    }

    /// Parse an algorithm name like "fast" or "reference".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reference" | "ref" => Some(Self::Reference),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

/// Build a distribution with the default (fast) builder.
pub fn build_distribution(base: u32, mask: u32) -> Distribution {
    Algorithm::default().build(base, mask)
}

/// Average and window width for an input pair.
pub(crate) fn window(base: u32, mask: u32) -> (Fixed16, Fixed16) {
    let avg = apply_defense(base, mask);
    (avg, window_width(avg))
}

/// One eighth of the average, rounded toward negative infinity.
pub fn window_width(avg: Fixed16) -> Fixed16 {
    Fixed16::from_raw(avg.raw().div_euclid(8))
}

/// Number of outcomes in a window of the given width.
pub fn outcome_count(width: Fixed16) -> u64 {
    2 * (width.raw().max(0) as u64 + 1)
}

/// Damage dealt for a raw damage level, never below 1.
pub fn clamp_level(level: i64) -> u64 {
    u64::try_from(level)
        .ok()
        .filter(|&d| d != 0)
        .unwrap_or(1)
}

/// Damage dealt at a fixed-point point in the window.
pub fn to_damage(raw: i64) -> u64 {
    clamp_level(Fixed16::from_raw(raw).floor_int())
}
