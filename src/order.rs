//! Order statistics: best of N, worst of N.
use std::cmp;

use log::debug;

use crate::dist::Distribution;
use crate::error::DiceError;
use crate::outcome::Outcome;

/// Which extreme of several draws to keep.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Extremum {
    /// Keep the largest draw ("advantage").
    Max,
    /// Keep the smallest draw ("disadvantage").
    Min,
}

impl Extremum {
    pub fn apply(self, a: &Outcome, b: &Outcome) -> Outcome {
        match self {
            Extremum::Max => cmp::max(a, b).clone(),
            Extremum::Min => cmp::min(a, b).clone(),
        }
    }
}

impl Distribution {
    /// Distribution of the `extremum` of `n` independent draws from `self`.
    ///
    /// Starting from one draw, each step folds in one more independent draw
    /// with [`combine`][Distribution::combine]. The running result and the
    /// base distribution are combined over their full cross product, as the
    /// new draw is a fresh sample and not a copy of an earlier one. The
    /// support never grows, so the cost is `(n - 1) × |self|²`.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `n < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nicedice::dist::Distribution;
    /// use nicedice::order::Extremum;
    /// use nicedice::outcome::Outcome;
    ///
    /// let d20 = Distribution::from_sides(20).unwrap();
    /// let advantage = d20.repeat_extreme(2, Extremum::Max).unwrap();
    /// assert!(advantage.probability(&Outcome::from(20)) > advantage.probability(&Outcome::from(1)));
    /// ```
    pub fn repeat_extreme(&self, n: usize, extremum: Extremum) -> Result<Distribution, DiceError> {
        if n < 1 {
            return Err(DiceError::invalid("need at least one draw"));
        }
        let mut current = self.clone();
        for i in 1..n {
            current = current.combine(self, |a, b| extremum.apply(a, b));
            debug!("repeat_extreme: {:?} of {} draws, {} outcomes", extremum, i + 1, current.len());
        }
        Ok(current)
    }
}

/// Free-function form of [`Distribution::repeat_extreme`].
pub fn repeat_extreme(dist: &Distribution, n: usize, extremum: Extremum) -> Result<Distribution, DiceError> {
    dist.repeat_extreme(n, extremum)
}
