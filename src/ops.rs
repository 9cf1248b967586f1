//! Arithmetic and comparison operators on distributions.
//!
//! Every operator here is [`Distribution::combine`] with a fixed binary
//! function. The right-hand side is anything implementing [`Operand`]: another
//! distribution, or a scalar which is lifted to a point mass first.
//!
//! # Comparisons return distributions
//!
//! [`Distribution::less_than`] and friends do **not** return `bool`. Comparing
//! two random variables yields a random boolean, so the result is a Bernoulli
//! distribution over `{false, true}`. Use
//! [`probability_of_true`][crate::stats::probability_of_true] to read off the
//! chance that the comparison holds. For the same reason `Distribution` does
//! not implement `PartialOrd`.
//!
//! ```
//! use nicedice::dist::Distribution;
//!
//! let d6 = Distribution::from_sides(6).unwrap();
//! let above_three = d6.greater_than(&3);
//! assert_eq!(above_three.len(), 2);
//! assert!((above_three.probability_of_true().unwrap() - 0.5).abs() < 1e-12);
//! ```
use std::borrow::Cow;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;

use crate::dist::Distribution;
use crate::outcome::Outcome;

/// Right-hand side of a combination.
///
/// Scalars convert to [`Distribution::point_mass`]; distributions are borrowed
/// as they are.
pub trait Operand {
    fn to_distribution(&self) -> Cow<'_, Distribution>;
}

impl Operand for Distribution {
    fn to_distribution(&self) -> Cow<'_, Distribution> {
        Cow::Borrowed(self)
    }
}

impl Operand for Outcome {
    fn to_distribution(&self) -> Cow<'_, Distribution> {
        Cow::Owned(Distribution::point_mass(self.clone()))
    }
}

impl Operand for BigInt {
    fn to_distribution(&self) -> Cow<'_, Distribution> {
        Cow::Owned(Distribution::point_mass(self.clone()))
    }
}

macro_rules! scalar_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn to_distribution(&self) -> Cow<'_, Distribution> {
                    Cow::Owned(Distribution::point_mass(*self))
                }
            }
        )*
    };
}

scalar_operand!(bool, i32, i64, u32, u64, usize, f64);

fn lt(a: &Outcome, b: &Outcome) -> Outcome {
    Outcome::Bool(a < b)
}

fn le(a: &Outcome, b: &Outcome) -> Outcome {
    Outcome::Bool(a <= b)
}

fn gt(a: &Outcome, b: &Outcome) -> Outcome {
    Outcome::Bool(a > b)
}

fn ge(a: &Outcome, b: &Outcome) -> Outcome {
    Outcome::Bool(a >= b)
}

impl Distribution {
    /// Distribution of `X + Y`.
    pub fn plus<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, |a, b| a + b)
    }

    /// Distribution of `X - Y`.
    pub fn minus<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, |a, b| a - b)
    }

    /// Distribution of `X * Y`.
    pub fn times<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, |a, b| a * b)
    }

    /// Bernoulli distribution of the event `X < Y`.
    pub fn less_than<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, lt)
    }

    /// Bernoulli distribution of the event `X <= Y`.
    pub fn less_or_equal<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, le)
    }

    /// Bernoulli distribution of the event `X > Y`.
    pub fn greater_than<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, gt)
    }

    /// Bernoulli distribution of the event `X >= Y`.
    pub fn greater_or_equal<O: Operand + ?Sized>(&self, rhs: &O) -> Distribution {
        self.combine(rhs, ge)
    }
}

// Operator sugar: `&a + &b`, `a + b`, `&a + 3`, `a * 2.5`, ...
// A single integer type on the right keeps `d + 1` unambiguous.
macro_rules! binary_op {
    ($Trait:ident, $method:ident, $named:ident) => {
        impl $Trait<&Distribution> for &Distribution {
            type Output = Distribution;

            fn $method(self, rhs: &Distribution) -> Self::Output {
                self.$named(rhs)
            }
        }

        impl $Trait<Distribution> for Distribution {
            type Output = Distribution;

            fn $method(self, rhs: Distribution) -> Self::Output {
                (&self).$named(&rhs)
            }
        }

        impl $Trait<&Distribution> for Distribution {
            type Output = Distribution;

            fn $method(self, rhs: &Distribution) -> Self::Output {
                (&self).$named(rhs)
            }
        }

        impl $Trait<Distribution> for &Distribution {
            type Output = Distribution;

            fn $method(self, rhs: Distribution) -> Self::Output {
                self.$named(&rhs)
            }
        }

        binary_op!(@scalar $Trait, $method, $named, Outcome, i64, f64);
    };
    (@scalar $Trait:ident, $method:ident, $named:ident, $($t:ty),*) => {
        $(
            impl $Trait<$t> for &Distribution {
                type Output = Distribution;

                fn $method(self, rhs: $t) -> Self::Output {
                    self.$named(&rhs)
                }
            }

            impl $Trait<$t> for Distribution {
                type Output = Distribution;

                fn $method(self, rhs: $t) -> Self::Output {
                    (&self).$named(&rhs)
                }
            }
        )*
    };
}

binary_op!(Add, add, plus);
binary_op!(Sub, sub, minus);
binary_op!(Mul, mul, times);
