//! Drawing damage rolls from a distribution.

use rand::Rng;

use super::Distribution;

impl Distribution {
    /// Draw one damage value.
    ///
    /// Picks one of the `total_outcomes` window outcomes uniformly and
    /// returns the damage it lands on, so each row comes up with exactly
    /// its `count / total_outcomes` probability.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        if self.total_outcomes == 0 {
            return self.min_damage();
        }
        let mut pick = rng.random_range(0..self.total_outcomes);
        for row in &self.rows {
            if pick < row.count {
                return row.damage;
            }
            pick -= row.count;
        }
        self.max_damage()
    }

    /// Draw `n` damage values.
    pub fn sample_n<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}
