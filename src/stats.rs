//! Summary statistics of a distribution.
//!
//! Numeric values are taken from [`Outcome::to_f64`], so booleans count as
//! 0 and 1. In particular, the expectation of a comparison result is the
//! probability that the comparison holds.
use crate::dist::Distribution;
use crate::error::DiceError;
use crate::outcome::Outcome;

/// Probability mass at `true` of a boolean distribution.
///
/// Meant for the result of a comparison such as
/// [`Distribution::greater_than`]. A boolean distribution that never holds
/// (so has no `true` outcome at all) gives `0.0`.
///
/// # Errors
///
/// [`DiceError::InvalidArgument`] if any outcome is not a boolean.
pub fn probability_of_true(dist: &Distribution) -> Result<f64, DiceError> {
    if let Some(bad) = dist.probs().keys().find(|k| !k.is_bool()) {
        return Err(DiceError::invalid(format!(
            "probability_of_true needs a boolean distribution, found outcome {}",
            bad
        )));
    }
    Ok(dist.probability(&Outcome::Bool(true)))
}

/// Expected value `Σ x · P(x)`.
pub fn expectation(dist: &Distribution) -> f64 {
    dist.iter().map(|(x, p)| x.to_f64() * p).sum()
}

/// Variance `Σ P(x) · (x - μ)²`.
pub fn variance(dist: &Distribution) -> f64 {
    let mu = expectation(dist);
    dist.iter()
        .map(|(x, p)| {
            let d = x.to_f64() - mu;
            p * d * d
        })
        .sum()
}

/// Standard deviation, the square root of [`variance`].
pub fn std_dev(dist: &Distribution) -> f64 {
    variance(dist).sqrt()
}

impl Distribution {
    pub fn probability_of_true(&self) -> Result<f64, DiceError> {
        probability_of_true(self)
    }

    pub fn expectation(&self) -> f64 {
        expectation(self)
    }

    pub fn variance(&self) -> f64 {
        variance(self)
    }

    pub fn std_dev(&self) -> f64 {
        std_dev(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_d6_moments() {
        let d6 = Distribution::from_sides(6).unwrap();
        assert_close(expectation(&d6), 3.5);
        assert_close(variance(&d6), 35.0 / 12.0);
        assert_close(std_dev(&d6), (35.0f64 / 12.0).sqrt());
    }

    #[test]
    fn test_point_mass_has_no_spread() {
        let d = Distribution::point_mass(4);
        assert_close(d.expectation(), 4.0);
        assert_close(d.variance(), 0.0);
    }

    #[test]
    fn test_variance_of_sum_adds() {
        let d6 = Distribution::from_sides(6).unwrap();
        let d8 = Distribution::from_sides(8).unwrap();
        let sum = &d6 + &d8;
        assert_close(sum.expectation(), 3.5 + 4.5);
        assert_close(sum.variance(), d6.variance() + d8.variance());
    }

    #[test]
    fn test_expectation_of_float_outcomes() {
        let d = Distribution::from_observations([0.5, 1.5]).unwrap();
        assert_close(d.expectation(), 1.0);
        assert_close(d.variance(), 0.25);
    }

    #[test]
    fn test_probability_of_true() {
        let d6 = Distribution::from_sides(6).unwrap();
        let event = d6.greater_than(&4);
        assert_close(probability_of_true(&event).unwrap(), 2.0 / 6.0);
        // A Bernoulli variable's mean is its success probability.
        assert_close(event.expectation(), 2.0 / 6.0);
    }

    #[test]
    fn test_probability_of_true_rejects_numbers() {
        let d6 = Distribution::from_sides(6).unwrap();
        assert!(matches!(probability_of_true(&d6), Err(DiceError::InvalidArgument(_))));

        let mixed = Distribution::from_observations([Outcome::from(true), Outcome::from(1)]).unwrap();
        assert!(matches!(probability_of_true(&mixed), Err(DiceError::InvalidArgument(_))));
    }
}
