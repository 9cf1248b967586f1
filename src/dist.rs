//! # Finite Discrete Distributions
//!
//! A [`Distribution`] is an explicit probability mass function: an ordered
//! mapping from [`Outcome`] to probability. It is the model of one random
//! variable, typically a die or some quantity derived from dice.
//!
//! ## Invariants
//!
//! Every distribution handed out by a public constructor or operation:
//!
//! - has probabilities summing to 1 within [`EPSILON`];
//! - has unique outcome keys (colliding outcomes have their mass summed);
//! - is never mutated afterwards. Each operation allocates a fresh mapping.
//!
//! ## Combining Independent Variables
//!
//! [`Distribution::combine`] is the central algorithm. Given `X ~ self` and an
//! independent `Y ~ other`, it computes the distribution of `op(X, Y)` by taking
//! the full cross product of both supports:
//!
//! ```text
//! P(Z = z) = Σ { P(X = x) · P(Y = y) | op(x, y) = z }
//! ```
//!
//! This is the discrete convolution generalized to an arbitrary binary function.
//! Arithmetic ([`ops`][crate::ops]), comparisons, and order statistics
//! ([`order`][crate::order]) are all built on it.
//!
//! ## Cost Model
//!
//! A single `combine` costs `|self| × |other|` evaluations of `op`. The result
//! support can be as large as that product, so chains of combinations may grow
//! multiplicatively: summing `k` dice with `n` faces each touches up to
//! `n^k` pairs in the worst case (in practice far fewer, as sums collide).
//! Nothing here limits that growth.
//!
//! ## Example
//!
//! ```rust
//! use nicedice::dist::Distribution;
//!
//! let d6 = Distribution::from_sides(6).unwrap();
//! let two_d6 = &d6 + &d6;
//!
//! assert_eq!(two_d6.len(), 11);
//! assert!((two_d6.probability(&7.into()) - 6.0 / 36.0).abs() < 1e-12);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use crate::error::DiceError;
use crate::ops::Operand;
use crate::outcome::Outcome;

/// Tolerance for the "probabilities sum to one" invariant.
pub const EPSILON: f64 = 1e-9;

/// A finite discrete probability distribution over [`Outcome`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: BTreeMap<Outcome, f64>,
}

impl Distribution {
    /// Wraps an already normalized mapping.
    pub(crate) fn from_probs(probs: BTreeMap<Outcome, f64>) -> Self {
        debug_assert!(!probs.is_empty());
        Self { probs }
    }

    /// Uniform distribution over the faces `1..=n` of a fair die.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `n < 1`.
    pub fn from_sides(n: u32) -> Result<Self, DiceError> {
        if n < 1 {
            return Err(DiceError::invalid(format!("a die needs at least one side, got {}", n)));
        }
        let p = 1.0 / n as f64;
        let probs = (1..=n).map(|face| (Outcome::from(face), p)).collect();
        Ok(Self::from_probs(probs))
    }

    /// Empirical distribution of a sequence of observed outcomes.
    ///
    /// Each distinct value gets its relative frequency `count / total`.
    ///
    /// # Errors
    ///
    /// [`DiceError::InvalidArgument`] if `values` is empty.
    pub fn from_observations<I, T>(values: I) -> Result<Self, DiceError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Outcome>,
    {
        let mut counts = BTreeMap::<Outcome, usize>::new();
        let mut total = 0usize;
        for value in values {
            *counts.entry(value.into()).or_default() += 1;
            total += 1;
        }
        if total == 0 {
            return Err(DiceError::invalid("no observations given"));
        }
        let total = total as f64;
        let probs = counts.into_iter().map(|(k, c)| (k, c as f64 / total)).collect();
        Ok(Self::from_probs(probs))
    }

    /// Distribution concentrated entirely on `value`.
    pub fn point_mass(value: impl Into<Outcome>) -> Self {
        let mut probs = BTreeMap::new();
        probs.insert(value.into(), 1.0);
        Self::from_probs(probs)
    }

    /// Distribution proportional to the given weights.
    ///
    /// Weights of repeated outcomes are summed. The result is normalized by
    /// the total weight, so the weights need not sum to one.
    ///
    /// # Errors
    ///
    /// - [`DiceError::InvalidArgument`] on an empty sequence, or a negative or
    ///   non-finite weight.
    /// - [`DiceError::DegenerateDistribution`] if all weights are zero.
    pub fn from_weights<I, T>(pairs: I) -> Result<Self, DiceError>
    where
        I: IntoIterator<Item = (T, f64)>,
        T: Into<Outcome>,
    {
        let mut raw = Vec::new();
        for (value, weight) in pairs {
            let value = value.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(DiceError::invalid(format!("bad weight {} for outcome {}", weight, value)));
            }
            raw.push((value, weight));
        }
        if raw.is_empty() {
            return Err(DiceError::invalid("no weighted outcomes given"));
        }

        // Scale by the largest weight first, so that the sums below stay finite.
        let largest = raw.iter().map(|(_, w)| *w).fold(0.0, f64::max);
        if largest <= 0.0 {
            return Err(DiceError::DegenerateDistribution);
        }
        let mut weights = BTreeMap::<Outcome, f64>::new();
        for (value, weight) in raw {
            *weights.entry(value).or_default() += weight / largest;
        }
        normalize(weights)
    }
}

/// Divides every mass by the total, failing when there is none.
fn normalize(mut probs: BTreeMap<Outcome, f64>) -> Result<Distribution, DiceError> {
    let total: f64 = probs.values().sum();
    if total <= 0.0 {
        return Err(DiceError::DegenerateDistribution);
    }
    for p in probs.values_mut() {
        *p /= total;
    }
    Ok(Distribution::from_probs(probs))
}

impl Distribution {
    /// The underlying outcome-to-probability mapping.
    pub fn probs(&self) -> &BTreeMap<Outcome, f64> {
        &self.probs
    }

    /// Iterates over `(outcome, probability)` in ascending outcome order.
    ///
    /// This is the read-only summary meant for presentation layers.
    pub fn iter(&self) -> impl Iterator<Item = (&Outcome, f64)> + '_ {
        self.probs.iter().map(|(k, &p)| (k, p))
    }

    /// Probability of `outcome`, zero if it is not in the support.
    pub fn probability(&self, outcome: &Outcome) -> f64 {
        self.probs.get(outcome).copied().unwrap_or(0.0)
    }

    /// Outcomes carrying nonzero probability, ascending.
    pub fn support(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.probs.iter().filter(|(_, &p)| p > 0.0).map(|(k, _)| k)
    }

    /// Number of distinct outcomes, each with positive mass.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always `false`: every distribution has at least one outcome.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn min_outcome(&self) -> Option<&Outcome> {
        self.probs.keys().next()
    }

    pub fn max_outcome(&self) -> Option<&Outcome> {
        self.probs.keys().next_back()
    }

    /// Total probability mass.
    pub fn total(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Checks that the total mass is one, within [`EPSILON`].
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= EPSILON
    }
}

impl Distribution {
    /// Distribution of `op(X, Y)` for independent `X ~ self` and `Y ~ other`.
    ///
    /// `other` may be another distribution or a scalar; scalars are lifted to
    /// [`Distribution::point_mass`] by their [`Operand`] impl.
    ///
    /// Every pair of outcomes is visited, so the cost is `|self| × |other|`.
    /// Outcomes that `op` maps to the same key have their probabilities summed.
    /// Pairs whose joint probability underflows to zero are dropped, so every
    /// outcome of the result has positive mass.
    /// Since the input masses each sum to one, so does the result.
    ///
    /// `op` must be a pure function of its arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use nicedice::dist::Distribution;
    /// use nicedice::outcome::Outcome;
    ///
    /// let coin = Distribution::from_sides(2).unwrap();
    /// let diff = coin.combine(&coin, |a, b| a - b);
    /// assert_eq!(diff.len(), 3);
    /// assert_eq!(diff.probability(&Outcome::from(0)), 0.5);
    /// ```
    pub fn combine<O, F>(&self, other: &O, op: F) -> Distribution
    where
        O: Operand + ?Sized,
        F: Fn(&Outcome, &Outcome) -> Outcome,
    {
        let other = other.to_distribution();
        let mut probs = BTreeMap::new();
        for (s1, &p1) in self.probs.iter() {
            for (s2, &p2) in other.probs.iter() {
                let p = p1 * p2;
                // Underflowed pairs carry no mass.
                if p == 0.0 {
                    continue;
                }
                *probs.entry(op(s1, s2)).or_insert(0.0) += p;
            }
        }
        debug!(
            "combine(|lhs| = {}, |rhs| = {}) -> {} outcomes",
            self.len(),
            other.len(),
            probs.len()
        );
        Distribution::from_probs(probs)
    }

    /// Distribution of `f(X)` for `X ~ self`.
    ///
    /// Outcomes mapped to the same value have their probabilities summed.
    pub fn map<F>(&self, f: F) -> Distribution
    where
        F: Fn(&Outcome) -> Outcome,
    {
        let mut probs = BTreeMap::new();
        for (s, &p) in self.probs.iter() {
            *probs.entry(f(s)).or_insert(0.0) += p;
        }
        Distribution::from_probs(probs)
    }

    /// Conditions the distribution on the event `predicate`.
    ///
    /// Outcomes failing the predicate are dropped and the remaining
    /// probabilities are divided by their total.
    ///
    /// # Errors
    ///
    /// [`DiceError::DegenerateDistribution`] if no probability mass satisfies
    /// the predicate.
    pub fn filter_support<P>(&self, predicate: P) -> Result<Distribution, DiceError>
    where
        P: Fn(&Outcome) -> bool,
    {
        let kept: BTreeMap<Outcome, f64> = self
            .probs
            .iter()
            .filter(|(k, _)| predicate(*k))
            .map(|(k, &p)| (k.clone(), p))
            .collect();
        trace!("filter_support: kept {} of {} outcomes", kept.len(), self.len());
        normalize(kept)
    }
}

/// Free-function form of [`Distribution::combine`].
pub fn combine<O, F>(lhs: &Distribution, rhs: &O, op: F) -> Distribution
where
    O: Operand + ?Sized,
    F: Fn(&Outcome, &Outcome) -> Outcome,
{
    lhs.combine(rhs, op)
}

/// Free-function form of [`Distribution::filter_support`].
pub fn filter_support<P>(dist: &Distribution, predicate: P) -> Result<Distribution, DiceError>
where
    P: Fn(&Outcome) -> bool,
{
    dist.filter_support(predicate)
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (outcome, p)) in self.probs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.6}", outcome, p)?;
        }
        write!(f, "}}")
    }
}
