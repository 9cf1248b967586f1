//! Outcome values of a random variable.
//!
//! An [`Outcome`] is a tagged value: a boolean, an arbitrary-precision integer,
//! or a float. Distributions key their probability mass by outcomes, and the
//! same mapping may see several variants over a chain of derivations (a sum
//! of dice is integral, a comparison is boolean, a scaled die may be
//! fractional). The order, equality and hash defined here are consistent
//! across variants, so mappings behave the same whichever variant populated
//! them.
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

/// A single value a random variable can take.
///
/// # Ordering
///
/// - Booleans sort before all numbers, with `false < true`.
/// - Numbers compare by exact numeric value, across variants:
///   `Int(2) == Float(2.0)` and `Float(-0.0) == Float(0.0)`.
/// - `NaN` is equal to itself and greater than every other number.
///
/// # Arithmetic
///
/// Integer with integer stays an exact integer; a float operand promotes the
/// result to a float. Booleans take part as the integers 0 and 1.
#[derive(Debug, Clone)]
pub enum Outcome {
    Bool(bool),
    Int(BigInt),
    Float(f64),
}

impl Outcome {
    pub fn is_bool(&self) -> bool {
        matches!(self, Outcome::Bool(_))
    }

    /// Returns the integer value, if this outcome is integral.
    ///
    /// Booleans count as integral (0 and 1); floats never do, even when their
    /// value is a whole number, so that float arithmetic stays float.
    pub fn as_int(&self) -> Option<Cow<'_, BigInt>> {
        match self {
            Outcome::Bool(b) => Some(Cow::Owned(BigInt::from(*b as u8))),
            Outcome::Int(i) => Some(Cow::Borrowed(i)),
            Outcome::Float(_) => None,
        }
    }

    /// Numeric value of the outcome, as used by expectation and variance.
    ///
    /// Integers too large for `f64` saturate to positive or negative infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Outcome::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Outcome::Int(i) => i.to_f64().unwrap_or(if i.sign() == Sign::Minus {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Outcome::Float(x) => *x,
        }
    }

    fn arith(
        &self,
        rhs: &Outcome,
        int_op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
        float_op: impl FnOnce(f64, f64) -> f64,
    ) -> Outcome {
        match (self.as_int(), rhs.as_int()) {
            (Some(a), Some(b)) => Outcome::Int(int_op(&*a, &*b)),
            _ => Outcome::Float(float_op(self.to_f64(), rhs.to_f64())),
        }
    }
}

/// Integer value of a finite whole float.
fn integral(x: f64) -> Option<BigInt> {
    if x.is_finite() && x.fract() == 0.0 {
        BigInt::from_f64(x)
    } else {
        None
    }
}

fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a float.
fn cmp_int_float(i: &BigInt, x: f64) -> Ordering {
    if x.is_nan() || x == f64::INFINITY {
        return Ordering::Less;
    }
    if x == f64::NEG_INFINITY {
        return Ordering::Greater;
    }
    let floor = x.floor();
    let Some(whole) = BigInt::from_f64(floor) else {
        return Ordering::Less;
    };
    match i.cmp(&whole) {
        Ordering::Equal if x > floor => Ordering::Less,
        ord => ord,
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        use Outcome::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Bool(_), _) => Ordering::Less,
            (_, Bool(_)) => Ordering::Greater,
            (Int(a), Int(b)) => a.cmp(b),
            (Int(a), Float(b)) => cmp_int_float(a, *b),
            (Float(a), Int(b)) => cmp_int_float(b, *a).reverse(),
            (Float(a), Float(b)) => cmp_floats(*a, *b),
        }
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Outcome {}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Outcome::Bool(b) => {
                0u8.hash(state);
                b.hash(state);
            }
            Outcome::Int(i) => {
                1u8.hash(state);
                i.hash(state);
            }
            Outcome::Float(x) => match integral(*x) {
                // Must agree with the `Int` arm, since `Int(2) == Float(2.0)`.
                Some(i) => {
                    1u8.hash(state);
                    i.hash(state);
                }
                None => {
                    2u8.hash(state);
                    if x.is_nan() {
                        u64::MAX.hash(state);
                    } else {
                        x.to_bits().hash(state);
                    }
                }
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{}", b),
            Outcome::Int(i) => write!(f, "{}", i),
            Outcome::Float(x) => write!(f, "{}", x),
        }
    }
}

impl Add for &Outcome {
    type Output = Outcome;

    fn add(self, rhs: Self) -> Self::Output {
        self.arith(rhs, |a, b| a + b, |a, b| a + b)
    }
}

impl Sub for &Outcome {
    type Output = Outcome;

    fn sub(self, rhs: Self) -> Self::Output {
        self.arith(rhs, |a, b| a - b, |a, b| a - b)
    }
}

impl Mul for &Outcome {
    type Output = Outcome;

    fn mul(self, rhs: Self) -> Self::Output {
        self.arith(rhs, |a, b| a * b, |a, b| a * b)
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Outcome::Bool(value)
    }
}

impl From<i32> for Outcome {
    fn from(value: i32) -> Self {
        Outcome::Int(BigInt::from(value))
    }
}

impl From<i64> for Outcome {
    fn from(value: i64) -> Self {
        Outcome::Int(BigInt::from(value))
    }
}

impl From<u32> for Outcome {
    fn from(value: u32) -> Self {
        Outcome::Int(BigInt::from(value))
    }
}

impl From<u64> for Outcome {
    fn from(value: u64) -> Self {
        Outcome::Int(BigInt::from(value))
    }
}

impl From<usize> for Outcome {
    fn from(value: usize) -> Self {
        Outcome::Int(BigInt::from(value))
    }
}

impl From<BigInt> for Outcome {
    fn from(value: BigInt) -> Self {
        Outcome::Int(value)
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Outcome::Float(value)
    }
}
