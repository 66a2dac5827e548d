//! Primitive uniform samplers and range utilities.
//!
//! Everything here draws directly from an engine passed as the final
//! parameter; the [`crate::global`] module exposes the same functions
//! bound to the per-thread engine.
//!
//! # Negative inputs
//!
//! The integer "count" samplers never reject an argument. Zero and
//! negative inputs are resolved by [`analytic_continuation`]: the
//! positive-domain result is mirrored through a sign flip plus a fixed
//! offset. The offset differs deliberately between [`random_below`]
//! (offset 0, "a count") and [`random_index`] (offset −1, "a valid
//! index"), and downstream callers depend on which one they call.

use rand::Rng;

/// Smallest representable `Integer` domain value.
pub const MIN_INT: i64 = i64::MIN;
/// Largest representable `Integer` domain value.
pub const MAX_INT: i64 = i64::MAX;
/// Most negative representable `Float` domain value.
pub const MIN_FLOAT: f64 = f64::MIN;
/// Largest representable `Float` domain value.
pub const MAX_FLOAT: f64 = f64::MAX;
/// Largest `Float` below zero.
pub const MIN_BELOW: f64 = -5e-324;
/// Smallest `Float` above zero.
pub const MIN_ABOVE: f64 = 5e-324;

/// Clamps `target` into the range spanned by `a` and `b`, in either order.
///
/// # Examples
/// ```
/// use tempest::sample::smart_clamp;
///
/// assert_eq!(smart_clamp(5, 0, 10), 5);
/// assert_eq!(smart_clamp(5, 10, 0), 5);
/// assert_eq!(smart_clamp(-3, 0, 10), 0);
/// assert_eq!(smart_clamp(99.0, 10.0, 0.0), 10.0);
/// ```
pub fn smart_clamp<T: PartialOrd>(target: T, a: T, b: T) -> T {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if target < low {
        low
    } else if target > high {
        high
    } else {
        target
    }
}

/// Extends a positive-domain integer sampler to zero and negative inputs.
///
/// For `number > 0` returns `func(number)`; for `number < 0` returns
/// `-func(-number) + offset`; for `number == 0` returns `offset`. Every
/// negative-input-safe sampler in this crate routes its non-positive
/// branch through here, giving one odd-symmetric policy instead of an
/// error path.
pub fn analytic_continuation<R, F>(func: F, number: i64, offset: i64, rng: &mut R) -> i64
where
    R: Rng,
    F: FnOnce(i64, &mut R) -> i64,
{
    if number > 0 {
        func(number, rng)
    } else if number < 0 {
        -func(-number, rng) + offset
    } else {
        offset
    }
}

/// Maximum-precision uniform draw in `[0, 1)`.
///
/// Uses the top 53 bits of one engine output, so every representable
/// value is an exact multiple of 2⁻⁵³.
///
/// # Examples
/// ```
/// use tempest::sample::generate_canonical;
/// use tempest::Hurricane;
///
/// let mut rng = Hurricane::seeded(42);
/// for _ in 0..1000 {
///     let x = generate_canonical(&mut rng);
///     assert!((0.0..1.0).contains(&x));
/// }
/// ```
pub fn generate_canonical<R: Rng>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform float in `[min(a, b), max(a, b))`.
///
/// Bounds may be given in either order. A zero-width range returns its
/// single value.
pub fn random_float<R: Rng>(left_limit: f64, right_limit: f64, rng: &mut R) -> f64 {
    let low = left_limit.min(right_limit);
    let high = left_limit.max(right_limit);
    if low < high {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Uniform integer in `[min(a, b), max(a, b)]`, inclusive of both bounds.
///
/// # Examples
/// ```
/// use tempest::sample::random_int;
/// use tempest::Hurricane;
///
/// let mut rng = Hurricane::seeded(42);
/// for _ in 0..1000 {
///     let x = random_int(10, -10, &mut rng);
///     assert!((-10..=10).contains(&x));
/// }
/// ```
pub fn random_int<R: Rng>(left_limit: i64, right_limit: i64, rng: &mut R) -> i64 {
    let low = left_limit.min(right_limit);
    let high = left_limit.max(right_limit);
    rng.random_range(low..=high)
}

/// Uniform integer in `[0, number)` for positive `number`.
///
/// Non-positive inputs mirror through [`analytic_continuation`] with
/// offset 0: `random_below(0) == 0`, and `random_below(-5)` lies in
/// `(-5, 0]`.
pub fn random_below<R: Rng>(number: i64, rng: &mut R) -> i64 {
    if number > 0 {
        rng.random_range(0..number)
    } else {
        analytic_continuation(random_below, number, 0, rng)
    }
}

/// Uniform index in `[0, size)` for positive `size`.
///
/// Non-positive inputs mirror through [`analytic_continuation`] with
/// offset −1: `random_index(0) == -1`, and `random_index(-5)` lies in
/// `[-5, 0)`.
pub fn random_index<R: Rng>(size: i64, rng: &mut R) -> i64 {
    if size > 0 {
        rng.random_range(0..size)
    } else {
        analytic_continuation(random_index, size, -1, rng)
    }
}

/// Uniform value from the stepped range `start, start ± step, …` toward
/// `stop`, exclusive of `stop`.
///
/// `start == stop` or `step == 0` return `start`. Positive steps walk up
/// from the low bound, negative steps walk down from the high bound.
pub fn random_range<R: Rng>(start: i64, stop: i64, step: i64, rng: &mut R) -> i64 {
    if start == stop {
        return start;
    }
    let width = (start - stop).abs() - 1;
    if step > 0 {
        return start.min(stop) + step * random_below((width + step) / step, rng);
    }
    if step < 0 {
        return start.max(stop) - step * random_below((width - step) / step, rng);
    }
    start
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Hurricane;

    #[test]
    fn test_random_below_range_invariant() {
        let mut rng = Hurricane::seeded(42);
        for &n in &[1, 2, 5, 100, 100_000] {
            for _ in 0..10_000 {
                let x = random_below(n, &mut rng);
                assert!((0..n).contains(&x), "random_below({n}) = {x}");
            }
        }
    }

    #[test]
    fn test_random_index_range_invariant() {
        let mut rng = Hurricane::seeded(43);
        for &n in &[1, 2, 5, 100, 100_000] {
            for _ in 0..10_000 {
                let x = random_index(n, &mut rng);
                assert!((0..n).contains(&x), "random_index({n}) = {x}");
            }
        }
    }

    #[test]
    fn test_random_below_zero_and_negative() {
        let mut rng = Hurricane::seeded(44);
        assert_eq!(random_below(0, &mut rng), 0);
        for _ in 0..10_000 {
            let x = random_below(-5, &mut rng);
            assert!((-4..=0).contains(&x), "random_below(-5) = {x}");
        }
    }

    #[test]
    fn test_random_index_zero_and_negative() {
        let mut rng = Hurricane::seeded(45);
        assert_eq!(random_index(0, &mut rng), -1);
        for _ in 0..10_000 {
            let x = random_index(-5, &mut rng);
            assert!((-5..=-1).contains(&x), "random_index(-5) = {x}");
        }
    }

    #[test]
    fn test_negative_mirror_covers_support() {
        // The mirrored distributions must reach both of their endpoints.
        let mut rng = Hurricane::seeded(46);
        let below: Vec<i64> = (0..5_000).map(|_| random_below(-5, &mut rng)).collect();
        assert!(below.contains(&0));
        assert!(below.contains(&-4));
        let index: Vec<i64> = (0..5_000).map(|_| random_index(-5, &mut rng)).collect();
        assert!(index.contains(&-1));
        assert!(index.contains(&-5));
    }

    #[test]
    fn test_generate_canonical_bounds() {
        let mut rng = Hurricane::seeded(47);
        for _ in 0..10_000 {
            let x = generate_canonical(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_float_reversed_bounds() {
        let mut rng = Hurricane::seeded(48);
        for _ in 0..10_000 {
            let x = random_float(10.0, -10.0, &mut rng);
            assert!((-10.0..10.0).contains(&x));
        }
    }

    #[test]
    fn test_random_float_zero_width() {
        let mut rng = Hurricane::seeded(49);
        assert_eq!(random_float(3.5, 3.5, &mut rng), 3.5);
    }

    #[test]
    fn test_random_int_single_point() {
        let mut rng = Hurricane::seeded(50);
        assert_eq!(random_int(7, 7, &mut rng), 7);
    }

    #[test]
    fn test_random_range_stepped() {
        let mut rng = Hurricane::seeded(51);
        for _ in 0..5_000 {
            let x = random_range(0, 10, 2, &mut rng);
            assert!(x % 2 == 0 && (0..10).contains(&x), "random_range = {x}");
        }
    }

    #[test]
    fn test_random_range_degenerate() {
        let mut rng = Hurricane::seeded(52);
        assert_eq!(random_range(4, 4, 2, &mut rng), 4);
        assert_eq!(random_range(0, 10, 0, &mut rng), 0);
    }

    #[test]
    fn test_smart_clamp_inside() {
        assert_eq!(smart_clamp(5, 0, 10), 5);
        assert_eq!(smart_clamp(0, 0, 10), 0);
        assert_eq!(smart_clamp(10, 0, 10), 10);
    }

    #[test]
    fn test_domain_limits() {
        assert!(MIN_BELOW < 0.0 && MIN_BELOW > -1e-300);
        assert!(MIN_ABOVE > 0.0 && MIN_ABOVE < 1e-300);
        assert!(MIN_INT < 0 && MAX_INT > 0);
        assert!(MIN_FLOAT < 0.0 && MAX_FLOAT > 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::Hurricane;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn smart_clamp_order_independent(
            target in -1000.0_f64..1000.0,
            a in -1000.0_f64..1000.0,
            b in -1000.0_f64..1000.0,
        ) {
            prop_assert_eq!(smart_clamp(target, a, b), smart_clamp(target, b, a));
        }

        #[test]
        fn smart_clamp_identity_in_bounds(
            a in -1000.0_f64..1000.0,
            b in -1000.0_f64..1000.0,
            frac in 0.0_f64..=1.0,
        ) {
            let low = a.min(b);
            let high = a.max(b);
            let target = low + frac * (high - low);
            prop_assert_eq!(smart_clamp(target, a, b), target);
        }

        #[test]
        fn random_below_in_range(seed in 0_u64..10_000, n in 1_i64..1_000_000) {
            let mut rng = Hurricane::seeded(seed);
            let x = random_below(n, &mut rng);
            prop_assert!((0..n).contains(&x));
        }

        #[test]
        fn random_below_odd_symmetry(seed in 0_u64..10_000, n in 1_i64..1_000_000) {
            let mut rng = Hurricane::seeded(seed);
            let x = random_below(-n, &mut rng);
            prop_assert!(x <= 0 && x > -n);
        }

        #[test]
        fn random_int_within_normalized_bounds(
            seed in 0_u64..10_000,
            a in -1_000_000_i64..1_000_000,
            b in -1_000_000_i64..1_000_000,
        ) {
            let mut rng = Hurricane::seeded(seed);
            let x = random_int(a, b, &mut rng);
            prop_assert!(x >= a.min(b) && x <= a.max(b));
        }
    }
}
