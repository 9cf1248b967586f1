//! # nicedice: dice as probability distributions
//!
//! **`nicedice`** models discrete random variables, such as dice, as explicit probability mass functions,
//! and provides an algebra to combine them: arithmetic, probabilistic comparisons, order statistics
//! ("best of N", "worst of N"), conditioning, and summary statistics.
//!
//! ## Key Ideas
//!
//! - **Exact, not simulated**: a [`Distribution`][crate::dist::Distribution] lists every outcome with its probability.
//!   Derived distributions are computed by enumerating outcomes, never by sampling.
//! - **Independence**: combining two distributions treats them as independent random variables,
//!   even when both sides are the same value. `&d6 + &d6` is the sum of two separate rolls.
//! - **Comparisons are random too**: `d6.greater_than(&3)` is a distribution over `{false, true}`, not a `bool`.
//!   Read the chance of `true` with [`probability_of_true`][crate::stats::probability_of_true].
//! - **Pure values**: every operation returns a new distribution and leaves its inputs untouched.
//!
//! ## Basic Usage
//!
//! ```rust
//! use nicedice::dist::Distribution;
//! use nicedice::order::Extremum;
//!
//! let d20 = Distribution::from_sides(20).unwrap();
//!
//! // Rolling with advantage or disadvantage: best or worst of two d20.
//! let advantage = d20.repeat_extreme(2, Extremum::Max).unwrap();
//! let disadvantage = d20.repeat_extreme(2, Extremum::Min).unwrap();
//!
//! // How likely is the advantaged roll to beat the disadvantaged one?
//! let wins = advantage.greater_than(&disadvantage);
//! assert!(wins.probability_of_true().unwrap() > 0.5);
//!
//! // Summary statistics.
//! let d6 = Distribution::from_sides(6).unwrap();
//! assert!((d6.expectation() - 3.5).abs() < 1e-12);
//! assert!((d6.variance() - 35.0 / 12.0).abs() < 1e-12);
//! ```
//!
//! ## Core Components
//!
//! - **[`dist`]**: The [`Distribution`][crate::dist::Distribution] type, its constructors, and the `combine` algorithm.
//! - **[`ops`]**: Arithmetic operators and comparisons.
//! - **[`order`]**: Order statistics over repeated draws.
//! - **[`stats`]**: Expectation, variance, and probability of an event.
//! - **[`sample`]**: Weighted random draws.

pub mod dist;
pub mod error;
pub mod ops;
pub mod order;
pub mod outcome;
pub mod sample;
pub mod stats;

pub use dist::Distribution;
pub use error::DiceError;
pub use order::Extremum;
pub use outcome::Outcome;
