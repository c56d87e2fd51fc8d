//! Per-magnitude enumeration.
//!
//! Visits every magnitude in the window and tallies the damage on both
//! sides of the average. Linear in the window width, which grows with the
//! average; use [`fast`](super::fast) for large inputs.

use std::collections::BTreeMap;

use super::{Distribution, to_damage, window};

/// Build the distribution by walking every magnitude `0..=width`.
pub fn build(base: u32, mask: u32) -> Distribution {
    let (avg, width) = window(base, mask);

    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for mag in 0..=width.raw() {
        *counts.entry(to_damage(avg.raw() + mag)).or_insert(0) += 1;
        *counts.entry(to_damage(avg.raw() - mag)).or_insert(0) += 1;
    }

    let dist = Distribution::from_counts(avg, width, counts);
    tracing::debug!(
        base,
        mask,
        avg = avg.raw(),
        width = width.raw(),
        total_outcomes = dist.total_outcomes,
        rows = dist.rows.len(),
        "built reference distribution"
    );
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_unit_base() {
        // avg = 1.0, the minus side dips below 1.0 and clamps back up
        let dist = build(1, 0);
        assert_eq!(dist.total_outcomes, 16_386);
        assert_eq!(dist.rows.len(), 1);
        assert_eq!(dist.rows[0].damage, 1);
        assert_eq!(dist.rows[0].count, 16_386);
    }

    #[test]
    fn magnitude_zero_counts_twice() {
        let dist = build(0, 0);
        assert_eq!(dist.rows[0].count, 2);
    }

    #[test]
    fn counts_are_conserved() {
        let dist = build(20, 0b101);
        assert_eq!(dist.counted_outcomes(), dist.total_outcomes);
        let pairs: Vec<_> = dist.rows.iter().map(|r| (r.damage, r.count)).collect();
        assert_eq!(
            pairs,
            vec![
                (14, 9613),
                (15, 65_536),
                (16, 65_537),
                (17, 65_536),
                (18, 65_536),
                (19, 6366)
            ]
        );
    }
}
