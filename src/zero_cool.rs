//! The ZeroCool family: biased index generators over `[0, number)`.
//!
//! Twelve functions arranged as three shapes × four positions, plus one
//! master dispatcher. Each draws an integer in `[0, number)` biased
//! toward the front, middle, or back of the range, or picks one of the
//! three positions at random ("quantum").
//!
//! | | front | middle | back | quantum |
//! |---|---|---|---|---|
//! | **gauss** | [`front_gauss`] | [`middle_gauss`] | [`back_gauss`] | [`quantum_gauss`] |
//! | **poisson** | [`front_poisson`] | [`middle_poisson`] | [`back_poisson`] | [`quantum_poisson`] |
//! | **linear** | [`front_linear`] | [`middle_linear`] | [`back_linear`] | [`quantum_linear`] |
//!
//! [`quantum_monty`] stacks one more level on top, picking the shape
//! family at random as well.
//!
//! # Negative inputs
//!
//! None of these functions reject an input. Zero and negative `number`
//! go through [`analytic_continuation`] with offset −1, mirroring
//! through the complementary function of the same shape: `front_gauss`
//! continues through `back_gauss` and vice versa (likewise the poisson
//! and linear pairs), while the middles mirror themselves. For
//! `number < 0` every function lands in `[number, -1]`; at zero they
//! return −1.

use rand::Rng;

use crate::dice::{d, fuzzy_clamp, percent_true};
use crate::sample::analytic_continuation;
use crate::variates::{gammavariate, normalvariate, poisson, triangular};

/// Gamma-shaped index biased toward 0.
pub fn front_gauss<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        let result = gammavariate(1.0, number as f64 / 10.0, rng) as i64;
        fuzzy_clamp(result, number, rng)
    } else {
        analytic_continuation(back_gauss, number, -1, rng)
    }
}

/// Normal-shaped index biased toward the center of the range.
pub fn middle_gauss<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        let result = normalvariate(number as f64 / 2.0, number as f64 / 10.0, rng) as i64;
        fuzzy_clamp(result, number, rng)
    } else {
        analytic_continuation(middle_gauss, number, -1, rng)
    }
}

/// Mirror of [`front_gauss`]: biased toward `number - 1`.
pub fn back_gauss<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        number - front_gauss(number, rng) - 1
    } else {
        analytic_continuation(front_gauss, number, -1, rng)
    }
}

/// Rolls a d3 and dispatches to the front, middle, or back gauss shape.
pub fn quantum_gauss<R: Rng>(number: i64, rng: &mut R) -> i64 {
    match d(3, rng) {
        1 => front_gauss(number, rng),
        2 => middle_gauss(number, rng),
        _ => back_gauss(number, rng),
    }
}

/// Poisson-shaped index biased toward the low end.
pub fn front_poisson<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        let result = poisson(number as f64 / 4.0, rng);
        fuzzy_clamp(result, number, rng)
    } else {
        analytic_continuation(back_poisson, number, -1, rng)
    }
}

/// Mirror of [`front_poisson`]: biased toward the high end.
pub fn back_poisson<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        let result = number - front_poisson(number, rng) - 1;
        fuzzy_clamp(result, number, rng)
    } else {
        analytic_continuation(front_poisson, number, -1, rng)
    }
}

/// Even coin flip between the two skewed poisson ends.
///
/// Not a true center-weighted distribution; the bulge sits at both
/// quarter points rather than the middle.
pub fn middle_poisson<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if percent_true(50.0, rng) {
        front_poisson(number, rng)
    } else {
        back_poisson(number, rng)
    }
}

/// Rolls a d3 and dispatches to the front, middle, or back poisson shape.
pub fn quantum_poisson<R: Rng>(number: i64, rng: &mut R) -> i64 {
    match d(3, rng) {
        1 => front_poisson(number, rng),
        2 => middle_poisson(number, rng),
        _ => back_poisson(number, rng),
    }
}

/// Triangular index with its mode at 0: linearly biased low.
pub fn front_linear<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        triangular(0.0, number as f64, 0.0, rng) as i64
    } else {
        analytic_continuation(back_linear, number, -1, rng)
    }
}

/// Triangular index with its mode at `number`: linearly biased high.
pub fn back_linear<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        triangular(0.0, number as f64, number as f64, rng) as i64
    } else {
        analytic_continuation(front_linear, number, -1, rng)
    }
}

/// Triangular index with a centered mode.
pub fn middle_linear<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        triangular(0.0, number as f64, number as f64 / 2.0, rng) as i64
    } else {
        analytic_continuation(middle_linear, number, -1, rng)
    }
}

/// Rolls a d3 and dispatches to the front, middle, or back linear shape.
pub fn quantum_linear<R: Rng>(number: i64, rng: &mut R) -> i64 {
    match d(3, rng) {
        1 => front_linear(number, rng),
        2 => middle_linear(number, rng),
        _ => back_linear(number, rng),
    }
}

/// The master dispatcher: a d3 picks the shape family, then that
/// family's quantum dispatcher picks the position.
pub fn quantum_monty<R: Rng>(number: i64, rng: &mut R) -> i64 {
    match d(3, rng) {
        1 => quantum_linear(number, rng),
        2 => quantum_gauss(number, rng),
        _ => quantum_poisson(number, rng),
    }
}

// ============================================================================
// Tests
// ============================================================================
