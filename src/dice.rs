//! Dice mechanics and plus-or-minus spread generators.

use rand::Rng;

use crate::sample::{analytic_continuation, random_float, random_index, random_int, smart_clamp};
use crate::variates::normalvariate;

/// `true` with probability `truth_factor` **percent** (0–100).
///
/// Distinct convention from [`crate::variates::bernoulli`], which takes a
/// probability in `[0, 1]`.
///
/// # Examples
/// ```
/// use tempest::dice::percent_true;
/// use tempest::Hurricane;
///
/// let mut rng = Hurricane::seeded(42);
/// assert!(percent_true(100.0, &mut rng));
/// assert!(!percent_true(0.0, &mut rng));
/// ```
pub fn percent_true<R: Rng>(truth_factor: f64, rng: &mut R) -> bool {
    random_float(0.0, 100.0, rng) < truth_factor
}

/// Rolls one die with the given number of `sides`: uniform in
/// `[1, sides]`.
///
/// Non-positive side counts mirror through analytic continuation with
/// offset 0, so `d(-20)` rolls in `[-20, -1]` and `d(0)` is 0.
pub fn d<R: Rng>(sides: i64, rng: &mut R) -> i64 {
    if sides > 0 {
        random_int(1, sides, rng)
    } else {
        analytic_continuation(d, sides, 0, rng)
    }
}

/// Total of `rolls` dice with the given number of `sides`.
///
/// Zero rolls total 0; negative rolls negate the mirrored total.
pub fn dice<R: Rng>(rolls: i64, sides: i64, rng: &mut R) -> i64 {
    if rolls > 0 {
        return (0..rolls).map(|_| d(sides, rng)).sum();
    }
    if rolls == 0 {
        return 0;
    }
    -dice(-rolls, sides, rng)
}

/// Ability score: roll `num` six-sided dice and total the best three.
///
/// `num` is clamped into `[3, 9]`; exactly three dice degenerate to a
/// plain `dice(3, 6)` roll.
pub fn ability_dice<R: Rng>(num: i64, rng: &mut R) -> i64 {
    let n = smart_clamp(num, 3, 9);
    if n == 3 {
        return dice(3, 6, rng);
    }
    let mut rolls: Vec<i64> = (0..n).map(|_| d(6, rng)).collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));
    rolls.iter().take(3).sum()
}

/// Uniform spread: integer in `[-number, number]`.
pub fn plus_or_minus<R: Rng>(number: i64, rng: &mut R) -> i64 {
    random_int(-number, number, rng)
}

/// Triangular spread over `[-number, number]`, peaked at zero.
pub fn plus_or_minus_linear<R: Rng>(number: i64, rng: &mut R) -> i64 {
    let num = number.abs();
    dice(2, num + 1, rng) - (num + 2)
}

/// Gaussian spread over `[-number, number]` with deviation `number/π`.
///
/// A draw that lands outside the bounds is replaced by a fresh uniform
/// draw in range (rejection, not clipping).
pub fn plus_or_minus_gauss<R: Rng>(number: i64, rng: &mut R) -> i64 {
    let num = number.abs();
    let result = normalvariate(0.0, num as f64 / std::f64::consts::PI, rng) as i64;
    if result >= -num && result <= num {
        return result;
    }
    random_int(-num, num, rng)
}

/// Returns `target` when it already lies in `[0, upper_bound)`, otherwise
/// a fresh uniform index in that range.
///
/// The boundary-repair primitive behind the biased index generators in
/// [`crate::zero_cool`]: replacing an out-of-range sample preserves the
/// bias shape where naive clipping would pile mass onto the endpoints.
pub fn fuzzy_clamp<R: Rng>(target: i64, upper_bound: i64, rng: &mut R) -> i64 {
    if target >= 0 && target < upper_bound {
        target
    } else {
        random_index(upper_bound, rng)
    }
}

// ============================================================================
// Tests
// ============================================================================
