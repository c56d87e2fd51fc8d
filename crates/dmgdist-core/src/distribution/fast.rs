//! Closed-form bucket counting.
//!
//! Damage on the plus side, `floor((avg + mag) / S)`, is a step function
//! of the magnitude; on the minus side, `floor((avg - mag) / S)`, it steps
//! down. Each damage level `d` therefore owns one contiguous run of
//! magnitudes, and its size is the overlap of that run with `[0, width]`.
//! All ranges are closed on both ends, matching the inclusive
//! `0..=width` walk of the reference builder.
//!
//! Cost is proportional to the number of damage levels the window
//! touches rather than to the width itself.

use std::collections::BTreeMap;

use super::{Distribution, clamp_level, window};
use crate::fixed::Fixed16;

const S: i64 = Fixed16::SCALE;

/// Build the distribution by counting each damage bucket directly.
pub fn build(base: u32, mask: u32) -> Distribution {
    let (avg, width) = window(base, mask);
    let (avg_raw, width_raw) = (avg.raw(), width.raw());

    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    let buckets = plus_buckets(avg_raw, width_raw).chain(minus_buckets(avg_raw, width_raw));
    for (level, size) in buckets {
        let Ok(size) = u64::try_from(size) else {
            continue;
        };
        if size == 0 {
            continue;
        }
        tracing::trace!(level, size, "bucket");
        *counts.entry(clamp_level(level)).or_insert(0) += size;
    }

    let dist = Distribution::from_counts(avg, width, counts);
    tracing::debug!(
        base,
        mask,
        avg = avg_raw,
        width = width_raw,
        total_outcomes = dist.total_outcomes,
        rows = dist.rows.len(),
        "built fast distribution"
    );
    dist
}

/// Size of `[lo, hi] ∩ [0, width]`. Zero or negative when they miss.
pub(crate) fn overlap(lo: i64, hi: i64, width: i64) -> i64 {
    hi.min(width) - lo.max(0) + 1
}

/// `(level, size)` for every level reachable as `floor((avg + mag) / S)`.
fn plus_buckets(avg: i64, width: i64) -> impl Iterator<Item = (i64, i64)> {
    let first = avg.div_euclid(S);
    let last = (avg + width).div_euclid(S);
    (first..=last).map(move |d| {
        let lo = d * S - avg;
        let hi = (d + 1) * S - 1 - avg;
        (d, overlap(lo, hi, width))
    })
}

/// `(level, size)` for every level reachable as `floor((avg - mag) / S)`.
fn minus_buckets(avg: i64, width: i64) -> impl Iterator<Item = (i64, i64)> {
    let first = (avg - width).div_euclid(S);
    let last = avg.div_euclid(S);
    (first..=last).map(move |d| {
        let lo = avg - (d + 1) * S + 1;
        let hi = avg - d * S;
        (d, overlap(lo, hi, width))
    })
}
