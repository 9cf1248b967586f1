//! Algebraic properties of distributions.
//!
//! Tests cover construction, normalization, combination symmetry, scalar
//! lifting, order statistics, conditioning, and statistics.

use nicedice::dist::{combine, filter_support, Distribution};
use nicedice::order::{repeat_extreme, Extremum};
use nicedice::outcome::Outcome;
use nicedice::stats::{expectation, probability_of_true, variance};
use nicedice::DiceError;

const TOL: f64 = 1e-9;

fn d(n: u32) -> Distribution {
    Distribution::from_sides(n).unwrap()
}

fn assert_same(a: &Distribution, b: &Distribution) {
    let ka: Vec<&Outcome> = a.probs().keys().collect();
    let kb: Vec<&Outcome> = b.probs().keys().collect();
    assert_eq!(ka, kb);
    for (x, p) in a.iter() {
        let q = b.probability(x);
        assert!((p - q).abs() < TOL, "P({}): {} != {}", x, p, q);
    }
}

// ─── Construction ──────────────────────────────────────────────────────────────

#[test]
fn uniform_die_support_and_mass() {
    for n in 1..=30u32 {
        let die = d(n);
        let support: Vec<Outcome> = die.support().cloned().collect();
        let expected: Vec<Outcome> = (1..=n).map(Outcome::from).collect();
        assert_eq!(support, expected);
        for (_, p) in die.iter() {
            assert!((p - 1.0 / n as f64).abs() < TOL);
        }
        assert!((die.total() - 1.0).abs() < TOL);
    }
}

#[test]
fn zero_sided_die_is_rejected() {
    assert!(matches!(Distribution::from_sides(0), Err(DiceError::InvalidArgument(_))));
}

#[test]
fn observations_give_relative_frequencies() {
    let obs = Distribution::from_observations([1, 1, 2, 3]).unwrap();
    assert!((obs.probability(&Outcome::from(1)) - 0.5).abs() < TOL);
    assert!((obs.probability(&Outcome::from(2)) - 0.25).abs() < TOL);
    assert!((obs.probability(&Outcome::from(3)) - 0.25).abs() < TOL);
}

// ─── Normalization ─────────────────────────────────────────────────────────────

#[test]
fn every_derivation_is_normalized() {
    let d6 = d(6);
    let d8 = d(8);
    let derived = vec![
        &d6 + &d8,
        &d6 - &d8,
        &d6 * &d8,
        &(&d6 + &d8) * &d(4),
        d6.less_than(&d8),
        d6.less_or_equal(&d8),
        d6.greater_than(&d8),
        d6.greater_or_equal(&d8),
        d6.repeat_extreme(4, Extremum::Max).unwrap(),
        d6.repeat_extreme(4, Extremum::Min).unwrap(),
        d6.filter_support(|x| *x != Outcome::from(3)).unwrap(),
        Distribution::from_observations([2, 7, 7, 1, 8, 2, 8]).unwrap(),
    ];
    for dist in derived {
        assert!(dist.is_normalized(), "not normalized: {}", dist);
    }
}

// ─── Combination ───────────────────────────────────────────────────────────────

#[test]
fn combine_with_swapped_arguments() {
    let a = d(6);
    let b = d(10);
    let f = |x: &Outcome, y: &Outcome| x - &(y * &Outcome::from(2));
    let lhs = combine(&a, &b, f);
    let rhs = combine(&b, &a, |x, y| f(y, x));
    assert_same(&lhs, &rhs);
}

#[test]
fn addition_commutes() {
    let a = d(4);
    let b = d(12);
    assert_same(&(&a + &b), &(&b + &a));
}

#[test]
fn scalar_is_lifted_to_point_mass() {
    let d6 = d(6);
    let via_scalar = combine(&d6, &5, |a, b| a * b);
    let via_point_mass = combine(&d6, &Distribution::point_mass(5), |a, b| a * b);
    assert_eq!(via_scalar, via_point_mass);
    assert_eq!(&d6 + 5, &d6 + &Distribution::point_mass(5));
}

#[test]
fn self_combination_is_independent() {
    let d6 = d(6);
    let doubled = &d6 + &d6;
    // Not 2 * X, which would only hit even numbers.
    assert_eq!(doubled.len(), 11);
    assert!((doubled.probability(&Outcome::from(7)) - 1.0 / 6.0).abs() < TOL);
}

// ─── Order statistics ──────────────────────────────────────────────────────────

#[test]
fn single_draw_extreme_is_identity() {
    let d8 = d(8);
    assert_eq!(repeat_extreme(&d8, 1, Extremum::Max).unwrap(), d8);
}

#[test]
fn zero_draws_are_rejected() {
    assert!(matches!(
        repeat_extreme(&d(8), 0, Extremum::Min),
        Err(DiceError::InvalidArgument(_))
    ));
}

#[test]
fn advantage_beats_disadvantage() {
    let d20 = d(20);
    let adv = repeat_extreme(&d20, 2, Extremum::Max).unwrap();
    let dis = repeat_extreme(&d20, 2, Extremum::Min).unwrap();

    let support: Vec<Outcome> = adv.support().cloned().collect();
    let expected: Vec<Outcome> = (1..=20u32).map(Outcome::from).collect();
    assert_eq!(support, expected);
    assert!(adv.probability(&Outcome::from(20)) > adv.probability(&Outcome::from(1)));

    let p = probability_of_true(&adv.greater_than(&dis)).unwrap();
    assert!(p > 0.5, "P(adv > dis) = {}", p);
}

#[test]
fn max_of_three_d6_closed_form() {
    let best = d(6).repeat_extreme(3, Extremum::Max).unwrap();
    for k in 1..=6i32 {
        let expected = (k.pow(3) - (k - 1).pow(3)) as f64 / 216.0;
        assert!((best.probability(&Outcome::from(k)) - expected).abs() < TOL);
    }
}

// ─── Conditioning ──────────────────────────────────────────────────────────────

#[test]
fn filter_renormalizes() {
    let two_d6 = &d(6) + &d(6);
    let at_least_ten = filter_support(&two_d6, |x| *x >= Outcome::from(10)).unwrap();
    assert!((at_least_ten.total() - 1.0).abs() < TOL);
    // 3 ways to make 10, 2 for 11, 1 for 12.
    assert!((at_least_ten.probability(&Outcome::from(10)) - 0.5).abs() < TOL);
}

#[test]
fn filter_with_no_match_is_degenerate() {
    let res = filter_support(&d(6), |x| *x > Outcome::from(10));
    assert_eq!(res, Err(DiceError::DegenerateDistribution));
}

// ─── Statistics ────────────────────────────────────────────────────────────────

#[test]
fn d6_expectation_and_variance() {
    assert!((expectation(&d(6)) - 3.5).abs() < TOL);
    assert!((variance(&d(6)) - 35.0 / 12.0).abs() < TOL);
    assert!((variance(&d(6)) - 2.9167).abs() < 1e-4);
}

#[test]
fn comparison_yields_bernoulli() {
    let above = d(6).greater_than(&3);
    let keys: Vec<&Outcome> = above.probs().keys().collect();
    assert_eq!(keys, vec![&Outcome::from(false), &Outcome::from(true)]);
    assert!((probability_of_true(&above).unwrap() - 0.5).abs() < TOL);
}

#[test]
fn probability_of_true_needs_booleans() {
    assert!(matches!(probability_of_true(&d(6)), Err(DiceError::InvalidArgument(_))));
}
