//! Zero-configuration API.
//!
//! Every sampler in the crate under its canonical name, with no engine
//! parameter: each call draws from the calling thread's [`Hurricane`]
//! (created on first use, hardware-seeded once, never reseeded). See
//! [`crate::engine`] for the threading model.
//!
//! ```
//! let roll = tempest::global::dice(3, 6);
//! assert!((3..=18).contains(&roll));
//! ```

use crate::engine::with_hurricane;
use crate::{dice, generators, sample, variates, zero_cool};

// --- primitive samplers ---

/// Maximum-precision uniform draw in `[0, 1)`.
pub fn generate_canonical() -> f64 {
    with_hurricane(sample::generate_canonical)
}

/// Uniform float between the normalized bounds, high end exclusive.
pub fn random_float(left_limit: f64, right_limit: f64) -> f64 {
    with_hurricane(|rng| sample::random_float(left_limit, right_limit, rng))
}

/// Uniform integer between the normalized bounds, both inclusive.
pub fn random_int(left_limit: i64, right_limit: i64) -> i64 {
    with_hurricane(|rng| sample::random_int(left_limit, right_limit, rng))
}

/// Uniform integer in `[0, number)`; continuation offset 0 below 1.
pub fn random_below(number: i64) -> i64 {
    with_hurricane(|rng| sample::random_below(number, rng))
}

/// Uniform index in `[0, size)`; continuation offset −1 below 1.
pub fn random_index(size: i64) -> i64 {
    with_hurricane(|rng| sample::random_index(size, rng))
}

/// Uniform value from a stepped integer range.
pub fn random_range(start: i64, stop: i64, step: i64) -> i64 {
    with_hurricane(|rng| sample::random_range(start, stop, step, rng))
}

// --- distribution library ---

/// `true` with probability `truth_factor` in `[0, 1]`.
pub fn bernoulli(truth_factor: f64) -> bool {
    with_hurricane(|rng| variates::bernoulli(truth_factor, rng))
}

/// Binomial success count.
pub fn binomial(number_of_trials: i64, probability: f64) -> i64 {
    with_hurricane(|rng| variates::binomial(number_of_trials, probability, rng))
}

/// Negative-binomial failure count.
pub fn negative_binomial(number_of_trials: i64, probability: f64) -> i64 {
    with_hurricane(|rng| variates::negative_binomial(number_of_trials, probability, rng))
}

/// Geometric failure count.
pub fn geometric(probability: f64) -> i64 {
    with_hurricane(|rng| variates::geometric(probability, rng))
}

/// Poisson count with the given mean.
pub fn poisson(mean: f64) -> i64 {
    with_hurricane(|rng| variates::poisson(mean, rng))
}

/// Exponential variate with rate `lambda_rate`.
pub fn expovariate(lambda_rate: f64) -> f64 {
    with_hurricane(|rng| variates::expovariate(lambda_rate, rng))
}

/// Gamma variate.
pub fn gammavariate(shape: f64, scale: f64) -> f64 {
    with_hurricane(|rng| variates::gammavariate(shape, scale, rng))
}

/// Weibull variate.
pub fn weibullvariate(shape: f64, scale: f64) -> f64 {
    with_hurricane(|rng| variates::weibullvariate(shape, scale, rng))
}

/// Normal variate.
pub fn normalvariate(mean: f64, std_dev: f64) -> f64 {
    with_hurricane(|rng| variates::normalvariate(mean, std_dev, rng))
}

/// Log-normal variate.
pub fn lognormvariate(log_mean: f64, log_deviation: f64) -> f64 {
    with_hurricane(|rng| variates::lognormvariate(log_mean, log_deviation, rng))
}

/// Extreme-value (Gumbel) variate.
pub fn extreme_value(location: f64, scale: f64) -> f64 {
    with_hurricane(|rng| variates::extreme_value(location, scale, rng))
}

/// Chi-squared variate.
pub fn chi_squared(degrees_of_freedom: f64) -> f64 {
    with_hurricane(|rng| variates::chi_squared(degrees_of_freedom, rng))
}

/// Cauchy variate.
pub fn cauchy(location: f64, scale: f64) -> f64 {
    with_hurricane(|rng| variates::cauchy(location, scale, rng))
}

/// Fisher F variate.
pub fn fisher_f(degrees_of_freedom_1: f64, degrees_of_freedom_2: f64) -> f64 {
    with_hurricane(|rng| variates::fisher_f(degrees_of_freedom_1, degrees_of_freedom_2, rng))
}

/// Student t variate.
pub fn student_t(degrees_of_freedom: f64) -> f64 {
    with_hurricane(|rng| variates::student_t(degrees_of_freedom, rng))
}

/// Beta variate on `[0, 1]`.
pub fn betavariate(alpha: f64, beta: f64) -> f64 {
    with_hurricane(|rng| variates::betavariate(alpha, beta, rng))
}

/// Pareto variate with shape `alpha`.
pub fn paretovariate(alpha: f64) -> f64 {
    with_hurricane(|rng| variates::paretovariate(alpha, rng))
}

/// Von Mises variate on `[0, 2π)`.
pub fn vonmisesvariate(mu: f64, kappa: f64) -> f64 {
    with_hurricane(|rng| variates::vonmisesvariate(mu, kappa, rng))
}

/// Triangular variate between `low` and `high` peaking at `mode`.
pub fn triangular(low: f64, high: f64, mode: f64) -> f64 {
    with_hurricane(|rng| variates::triangular(low, high, mode, rng))
}

// --- dice & spreads ---

/// `true` with probability `truth_factor` percent (0–100).
pub fn percent_true(truth_factor: f64) -> bool {
    with_hurricane(|rng| dice::percent_true(truth_factor, rng))
}

/// One die roll in `[1, sides]`.
pub fn d(sides: i64) -> i64 {
    with_hurricane(|rng| dice::d(sides, rng))
}

/// Total of `rolls` dice.
pub fn dice(rolls: i64, sides: i64) -> i64 {
    with_hurricane(|rng| dice::dice(rolls, sides, rng))
}

/// Best three of `num` six-sided dice.
pub fn ability_dice(num: i64) -> i64 {
    with_hurricane(|rng| dice::ability_dice(num, rng))
}

/// Uniform spread in `[-number, number]`.
pub fn plus_or_minus(number: i64) -> i64 {
    with_hurricane(|rng| dice::plus_or_minus(number, rng))
}

/// Triangular spread in `[-number, number]`.
pub fn plus_or_minus_linear(number: i64) -> i64 {
    with_hurricane(|rng| dice::plus_or_minus_linear(number, rng))
}

/// Gaussian spread in `[-number, number]` with uniform rejection repair.
pub fn plus_or_minus_gauss(number: i64) -> i64 {
    with_hurricane(|rng| dice::plus_or_minus_gauss(number, rng))
}

/// In-range passthrough, otherwise a fresh uniform index.
pub fn fuzzy_clamp(target: i64, upper_bound: i64) -> i64 {
    with_hurricane(|rng| dice::fuzzy_clamp(target, upper_bound, rng))
}

// --- ZeroCool index biasing ---

/// Gamma-shaped index biased toward 0.
pub fn front_gauss(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::front_gauss(number, rng))
}

/// Normal-shaped index biased toward the center.
pub fn middle_gauss(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::middle_gauss(number, rng))
}

/// Gamma-shaped index biased toward `number - 1`.
pub fn back_gauss(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::back_gauss(number, rng))
}

/// Random position among the gauss shapes.
pub fn quantum_gauss(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::quantum_gauss(number, rng))
}

/// Poisson-shaped index biased low.
pub fn front_poisson(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::front_poisson(number, rng))
}

/// Coin flip between the skewed poisson ends.
pub fn middle_poisson(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::middle_poisson(number, rng))
}

/// Poisson-shaped index biased high.
pub fn back_poisson(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::back_poisson(number, rng))
}

/// Random position among the poisson shapes.
pub fn quantum_poisson(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::quantum_poisson(number, rng))
}

/// Linear index biased low.
pub fn front_linear(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::front_linear(number, rng))
}

/// Linear index with a centered peak.
pub fn middle_linear(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::middle_linear(number, rng))
}

/// Linear index biased high.
pub fn back_linear(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::back_linear(number, rng))
}

/// Random position among the linear shapes.
pub fn quantum_linear(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::quantum_linear(number, rng))
}

/// Random shape, then random position within it.
pub fn quantum_monty(number: i64) -> i64 {
    with_hurricane(|rng| zero_cool::quantum_monty(number, rng))
}

// --- slice helpers ---

/// Uniformly selects one element, or `None` from an empty slice.
pub fn random_value<T>(slice: &[T]) -> Option<&T> {
    with_hurricane(|rng| generators::random_value(slice, rng))
}

// ============================================================================
// Tests
// ============================================================================
