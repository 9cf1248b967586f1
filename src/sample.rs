//! Random draws from a distribution.
//!
//! The random source is always supplied by the caller, so results are
//! reproducible with a seeded generator.
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::Rng;

use crate::dist::Distribution;
use crate::error::DiceError;
use crate::outcome::Outcome;

impl Distribution {
    fn weighted_index(&self) -> Result<(Vec<&Outcome>, WeightedIndex<f64>), DiceError> {
        let outcomes: Vec<&Outcome> = self.probs().keys().collect();
        let index = WeightedIndex::new(self.probs().values()).map_err(|e| {
            log::debug!("weighted_index: {}", e);
            DiceError::DegenerateDistribution
        })?;
        Ok((outcomes, index))
    }

    /// Draws `n` independent outcomes, weighted by their probabilities.
    ///
    /// # Examples
    ///
    /// ```
    /// use nicedice::dist::Distribution;
    ///
    /// let d6 = Distribution::from_sides(6).unwrap();
    /// let rolls = d6.roll(3, &mut rand::thread_rng()).unwrap();
    /// assert_eq!(rolls.len(), 3);
    /// ```
    pub fn roll<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Outcome>, DiceError> {
        let (outcomes, index) = self.weighted_index()?;
        Ok((0..n).map(|_| outcomes[index.sample(rng)].clone()).collect())
    }

    /// Draws a single outcome.
    pub fn roll_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Outcome, DiceError> {
        let (outcomes, index) = self.weighted_index()?;
        Ok(outcomes[index.sample(rng)].clone())
    }
}
