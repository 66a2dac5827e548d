//! Named statistical distribution samplers.
//!
//! Each function constructs a parameterized distribution bound to the
//! supplied engine and draws exactly one sample. Names and parameter
//! orders mirror a well-known standard-library distribution API that
//! downstream callers pattern-match against, so they are part of the
//! public contract.
//!
//! # Supported samplers
//!
//! | Sampler | Parameters | Returns |
//! |---|---|---|
//! | [`bernoulli`] | p ∈ [0, 1] (clamped) | bool |
//! | [`binomial`] | trials ≥ 1 (floored), p (clamped) | Integer |
//! | [`negative_binomial`] | trials ≥ 1 (floored), p (clamped) | Integer |
//! | [`geometric`] | p (clamped) | Integer |
//! | [`poisson`] | mean (unclamped) | Integer |
//! | [`expovariate`] | λ | Float |
//! | [`gammavariate`] | shape, scale | Float |
//! | [`weibullvariate`] | shape, scale | Float |
//! | [`normalvariate`] | mean, std dev | Float |
//! | [`lognormvariate`] | log mean, log deviation | Float |
//! | [`extreme_value`] | location, scale | Float |
//! | [`chi_squared`] | dof ≥ 0 (floored) | Float |
//! | [`cauchy`] | location, scale | Float |
//! | [`fisher_f`] | dof₁, dof₂ ≥ 0 (floored) | Float |
//! | [`student_t`] | dof ≥ 0 (floored) | Float |
//! | [`betavariate`] | α, β | Float |
//! | [`paretovariate`] | α | Float |
//! | [`vonmisesvariate`] | μ, κ | Float |
//! | [`triangular`] | low, high, mode | Float |
//!
//! # Parameter domains
//!
//! Only the clamps and floors listed above are applied; every other
//! parameter is passed through as-is, including out-of-domain values
//! (a negative `poisson` mean, a negative `normalvariate` deviation).
//! This asymmetry is part of the inherited contract. Where the
//! underlying sampler rejects such a parameter outright, the function
//! returns its location parameter (or zero) instead of failing, keeping
//! every sampler a total function.

use rand::Rng;
use rand_distr::{
    Bernoulli, Binomial, Cauchy, ChiSquared, Distribution, Exp, FisherF, Gamma, Geometric, Gumbel,
    LogNormal, Normal, Poisson, StudentT, Weibull,
};

use crate::sample::{generate_canonical, smart_clamp};

// ============================================================================
// Discrete distributions
// ============================================================================

/// `true` with probability `truth_factor`, clamped into `[0, 1]`.
///
/// Note the distinct convention from [`crate::dice::percent_true`], which
/// takes a 0–100 percentage.
pub fn bernoulli<R: Rng>(truth_factor: f64, rng: &mut R) -> bool {
    match Bernoulli::new(smart_clamp(truth_factor, 0.0, 1.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => false,
    }
}

/// Successes in `number_of_trials` attempts at probability `probability`.
///
/// Trials are floored at 1; the probability is clamped into `[0, 1]`.
pub fn binomial<R: Rng>(number_of_trials: i64, probability: f64, rng: &mut R) -> i64 {
    let trials = number_of_trials.max(1) as u64;
    let p = smart_clamp(probability, 0.0, 1.0);
    match Binomial::new(trials, p) {
        Ok(dist) => dist.sample(rng) as i64,
        Err(_) => 0,
    }
}

/// Failures before the `number_of_trials`-th success at probability
/// `probability`. Same clamps as [`binomial`].
///
/// Sampled as a Poisson draw whose rate is Gamma-distributed, the
/// standard mixture construction for this distribution.
pub fn negative_binomial<R: Rng>(number_of_trials: i64, probability: f64, rng: &mut R) -> i64 {
    let trials = number_of_trials.max(1) as f64;
    let p = smart_clamp(probability, 0.0, 1.0);
    match Gamma::new(trials, (1.0 - p) / p) {
        Ok(gamma) => {
            let rate = gamma.sample(rng);
            match Poisson::new(rate) {
                Ok(dist) => {
                    let value: f64 = dist.sample(rng);
                    value as i64
                }
                Err(_) => 0,
            }
        }
        Err(_) => 0,
    }
}

/// Failures before the first success at probability `probability`,
/// clamped into `[0, 1]`.
pub fn geometric<R: Rng>(probability: f64, rng: &mut R) -> i64 {
    let p = smart_clamp(probability, 0.0, 1.0);
    if p <= 0.0 {
        return 0;
    }
    match Geometric::new(p) {
        Ok(dist) => dist.sample(rng) as i64,
        Err(_) => 0,
    }
}

/// Poisson-distributed count with the given `mean`.
///
/// The mean is used as-is; a non-positive mean is out of the sampler's
/// domain and yields 0. This is the known unclamped gap in the inherited
/// contract.
pub fn poisson<R: Rng>(mean: f64, rng: &mut R) -> i64 {
    match Poisson::new(mean) {
        Ok(dist) => {
            let value: f64 = dist.sample(rng);
            value as i64
        }
        Err(_) => 0,
    }
}

// ============================================================================
// Continuous distributions
// ============================================================================

/// Exponential variate with rate `lambda_rate`.
pub fn expovariate<R: Rng>(lambda_rate: f64, rng: &mut R) -> f64 {
    match Exp::new(lambda_rate) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Gamma variate with the given `shape` and `scale`.
pub fn gammavariate<R: Rng>(shape: f64, scale: f64, rng: &mut R) -> f64 {
    match Gamma::new(shape, scale) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Weibull variate with the given `shape` and `scale`.
pub fn weibullvariate<R: Rng>(shape: f64, scale: f64, rng: &mut R) -> f64 {
    match Weibull::new(scale, shape) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Normal (Gaussian) variate N(`mean`, `std_dev`²).
pub fn normalvariate<R: Rng>(mean: f64, std_dev: f64, rng: &mut R) -> f64 {
    match Normal::new(mean, std_dev) {
        Ok(dist) => dist.sample(rng),
        Err(_) => mean,
    }
}

/// Log-normal variate; `log_mean` and `log_deviation` parameterize the
/// underlying normal.
pub fn lognormvariate<R: Rng>(log_mean: f64, log_deviation: f64, rng: &mut R) -> f64 {
    match LogNormal::new(log_mean, log_deviation) {
        Ok(dist) => dist.sample(rng),
        Err(_) => log_mean.exp(),
    }
}

/// Extreme-value (Gumbel) variate with the given `location` and `scale`.
pub fn extreme_value<R: Rng>(location: f64, scale: f64, rng: &mut R) -> f64 {
    match Gumbel::new(location, scale) {
        Ok(dist) => dist.sample(rng),
        Err(_) => location,
    }
}

/// Chi-squared variate; degrees of freedom floored at 0.
pub fn chi_squared<R: Rng>(degrees_of_freedom: f64, rng: &mut R) -> f64 {
    match ChiSquared::new(degrees_of_freedom.max(0.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Cauchy variate with the given `location` and `scale`.
pub fn cauchy<R: Rng>(location: f64, scale: f64, rng: &mut R) -> f64 {
    match Cauchy::new(location, scale) {
        Ok(dist) => dist.sample(rng),
        Err(_) => location,
    }
}

/// Fisher F variate; both degrees of freedom floored at 0.
pub fn fisher_f<R: Rng>(degrees_of_freedom_1: f64, degrees_of_freedom_2: f64, rng: &mut R) -> f64 {
    match FisherF::new(degrees_of_freedom_1.max(0.0), degrees_of_freedom_2.max(0.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

/// Student t variate; degrees of freedom floored at 0.
pub fn student_t<R: Rng>(degrees_of_freedom: f64, rng: &mut R) -> f64 {
    match StudentT::new(degrees_of_freedom.max(0.0)) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    }
}

// ============================================================================
// Pinned-algorithm distributions
// ============================================================================

/// Beta variate on `[0, 1]` built from two gamma draws.
///
/// Computed as `y / (y + gammavariate(beta, 1))` with `y =
/// gammavariate(alpha, 1)`, returning exactly `0.0` when `y == 0.0` so a
/// degenerate gamma draw can never produce NaN.
///
/// # Examples
/// ```
/// use tempest::variates::betavariate;
/// use tempest::Hurricane;
///
/// let mut rng = Hurricane::seeded(42);
/// for _ in 0..1000 {
///     let x = betavariate(2.0, 3.0, &mut rng);
///     assert!((0.0..=1.0).contains(&x));
/// }
/// ```
pub fn betavariate<R: Rng>(alpha: f64, beta: f64, rng: &mut R) -> f64 {
    let y = gammavariate(alpha, 1.0, rng);
    if y == 0.0 {
        return 0.0;
    }
    y / (y + gammavariate(beta, 1.0, rng))
}

/// Pareto variate with shape `alpha`: `1 / (1 − U)^(1/α)` for canonical U.
pub fn paretovariate<R: Rng>(alpha: f64, rng: &mut R) -> f64 {
    let u = 1.0 - generate_canonical(rng);
    1.0 / u.powf(1.0 / alpha)
}

/// Von Mises variate on `[0, 2π)` with mean direction `mu` and
/// concentration `kappa`.
///
/// Uses the Best & Fisher (1979) rejection sampler. Concentrations at or
/// below 1e-6 degenerate to a uniform angle.
pub fn vonmisesvariate<R: Rng>(mu: f64, kappa: f64, rng: &mut R) -> f64 {
    use std::f64::consts::{PI, TAU};
    if kappa <= 1e-6 {
        return TAU * generate_canonical(rng);
    }
    let s = 0.5 / kappa;
    let r = s + (1.0 + s * s).sqrt();
    let z = loop {
        let u1 = generate_canonical(rng);
        let z = (PI * u1).cos();
        let d = z / (r + z);
        let u2 = generate_canonical(rng);
        if u2 < 1.0 - d * d || u2 <= (1.0 - d) * d.exp() {
            break z;
        }
    };
    let q = 1.0 / r;
    let f = (q + z) / (1.0 + q * z);
    let u3 = generate_canonical(rng);
    if u3 > 0.5 {
        (mu + f.acos()) % TAU
    } else {
        (mu - f.acos()) % TAU
    }
}

/// Triangular variate between `low` and `high` peaking at `mode`.
///
/// A zero-width range returns `low` immediately, for any `mode`.
pub fn triangular<R: Rng>(low: f64, high: f64, mode: f64, rng: &mut R) -> f64 {
    if high - low == 0.0 {
        return low;
    }
    let mut u = generate_canonical(rng);
    let mut c = (mode - low) / (high - low);
    let (mut low, mut high) = (low, high);
    if u > c {
        u = 1.0 - u;
        c = 1.0 - c;
        std::mem::swap(&mut low, &mut high);
    }
    low + (high - low) * (u * c).sqrt()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Hurricane;

    #[test]
    fn test_bernoulli_clamps_probability() {
        let mut rng = Hurricane::seeded(42);
        for _ in 0..1_000 {
            assert!(bernoulli(2.0, &mut rng));
            assert!(!bernoulli(-1.0, &mut rng));
        }
    }

    #[test]
    fn test_binomial_bounds_and_trial_floor() {
        let mut rng = Hurricane::seeded(43);
        for _ in 0..5_000 {
            let x = binomial(10, 0.5, &mut rng);
            assert!((0..=10).contains(&x), "binomial(10, 0.5) = {x}");
        }
        // Trials floored at 1: result is a single Bernoulli count.
        for _ in 0..1_000 {
            let x = binomial(-4, 0.5, &mut rng);
            assert!((0..=1).contains(&x));
        }
    }

    #[test]
    fn test_binomial_degenerate_probabilities() {
        let mut rng = Hurricane::seeded(44);
        for _ in 0..100 {
            assert_eq!(binomial(10, 0.0, &mut rng), 0);
            assert_eq!(binomial(10, 1.0, &mut rng), 10);
            assert_eq!(binomial(10, 7.5, &mut rng), 10);
        }
    }

    #[test]
    fn test_negative_binomial_nonnegative() {
        let mut rng = Hurricane::seeded(45);
        for _ in 0..5_000 {
            assert!(negative_binomial(3, 0.4, &mut rng) >= 0);
        }
        // Success on every trial leaves no room for failures.
        for _ in 0..100 {
            assert_eq!(negative_binomial(3, 1.0, &mut rng), 0);
        }
    }

    #[test]
    fn test_negative_binomial_mean_tracks_parameters() {
        // Mean of NB(trials, p) in failure-count form is trials·(1−p)/p;
        // for trials=4, p=0.5 that is 4.
        let mut rng = Hurricane::seeded(46);
        let n = 20_000;
        let total: i64 = (0..n).map(|_| negative_binomial(4, 0.5, &mut rng)).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 4.0).abs() < 0.2, "empirical mean {mean}");
    }

    #[test]
    fn test_geometric_nonnegative_and_degenerate() {
        let mut rng = Hurricane::seeded(47);
        for _ in 0..5_000 {
            assert!(geometric(0.3, &mut rng) >= 0);
        }
        for _ in 0..100 {
            assert_eq!(geometric(1.0, &mut rng), 0);
            assert_eq!(geometric(0.0, &mut rng), 0);
        }
    }

    #[test]
    fn test_poisson_nonnegative() {
        let mut rng = Hurricane::seeded(48);
        for _ in 0..5_000 {
            assert!(poisson(4.5, &mut rng) >= 0);
        }
        // Out-of-domain mean: defined fallback, not a panic.
        assert_eq!(poisson(-3.0, &mut rng), 0);
    }

    #[test]
    fn test_expovariate_nonnegative() {
        let mut rng = Hurricane::seeded(49);
        for _ in 0..5_000 {
            assert!(expovariate(2.0, &mut rng) >= 0.0);
        }
    }

    #[test]
    fn test_gammavariate_positive_support() {
        let mut rng = Hurricane::seeded(50);
        for _ in 0..5_000 {
            assert!(gammavariate(2.0, 3.0, &mut rng) >= 0.0);
        }
        assert_eq!(gammavariate(-1.0, 1.0, &mut rng), 0.0);
    }

    #[test]
    fn test_weibullvariate_nonnegative() {
        let mut rng = Hurricane::seeded(51);
        for _ in 0..5_000 {
            assert!(weibullvariate(1.5, 2.0, &mut rng) >= 0.0);
        }
    }

    #[test]
    fn test_normalvariate_empirical_mean() {
        let mut rng = Hurricane::seeded(52);
        let n = 20_000;
        let total: f64 = (0..n).map(|_| normalvariate(10.0, 2.0, &mut rng)).sum();
        let mean = total / n as f64;
        assert!((mean - 10.0).abs() < 0.1, "empirical mean {mean}");
    }

    #[test]
    fn test_normalvariate_rejected_deviation_falls_back() {
        let mut rng = Hurricane::seeded(53);
        assert_eq!(normalvariate(5.0, -1.0, &mut rng), 5.0);
    }

    #[test]
    fn test_lognormvariate_positive() {
        let mut rng = Hurricane::seeded(54);
        for _ in 0..5_000 {
            assert!(lognormvariate(0.0, 1.0, &mut rng) > 0.0);
        }
    }

    #[test]
    fn test_chi_squared_dof_floor() {
        let mut rng = Hurricane::seeded(55);
        for _ in 0..5_000 {
            assert!(chi_squared(3.0, &mut rng) >= 0.0);
        }
        assert_eq!(chi_squared(-2.0, &mut rng), 0.0);
    }

    #[test]
    fn test_fisher_f_positive() {
        let mut rng = Hurricane::seeded(56);
        for _ in 0..5_000 {
            assert!(fisher_f(4.0, 6.0, &mut rng) >= 0.0);
        }
        assert_eq!(fisher_f(-1.0, 6.0, &mut rng), 0.0);
    }

    #[test]
    fn test_student_t_finite() {
        let mut rng = Hurricane::seeded(57);
        for _ in 0..5_000 {
            assert!(student_t(5.0, &mut rng).is_finite());
        }
        assert_eq!(student_t(-1.0, &mut rng), 0.0);
    }

    #[test]
    fn test_betavariate_unit_interval() {
        let mut rng = Hurricane::seeded(58);
        for _ in 0..5_000 {
            let x = betavariate(2.0, 5.0, &mut rng);
            assert!((0.0..=1.0).contains(&x), "betavariate = {x}");
        }
    }

    #[test]
    fn test_betavariate_zero_guard() {
        // A rejected alpha degenerates the first gamma draw to exactly
        // zero; the guard must return 0.0, never NaN.
        let mut rng = Hurricane::seeded(59);
        let x = betavariate(-1.0, 2.0, &mut rng);
        assert_eq!(x, 0.0);
        assert!(!x.is_nan());
    }

    #[test]
    fn test_paretovariate_support() {
        let mut rng = Hurricane::seeded(60);
        for _ in 0..5_000 {
            assert!(paretovariate(3.0, &mut rng) >= 1.0);
        }
    }

    #[test]
    fn test_vonmisesvariate_degenerate_uniform() {
        let mut rng = Hurricane::seeded(61);
        for _ in 0..5_000 {
            let x = vonmisesvariate(1.0, 0.0, &mut rng);
            assert!((0.0..std::f64::consts::TAU).contains(&x));
        }
    }

    #[test]
    fn test_vonmisesvariate_concentrates_near_mu() {
        let mut rng = Hurricane::seeded(62);
        let mu = 1.0;
        let n = 10_000;
        let near = (0..n)
            .filter(|_| {
                let x = vonmisesvariate(mu, 8.0, &mut rng);
                let delta = (x - mu).rem_euclid(std::f64::consts::TAU);
                delta < 1.0 || delta > std::f64::consts::TAU - 1.0
            })
            .count();
        // kappa = 8 puts the bulk of the mass within one radian of mu.
        assert!(near as f64 / n as f64 > 0.9, "near fraction {}", near as f64 / n as f64);
    }

    #[test]
    fn test_triangular_bounds() {
        let mut rng = Hurricane::seeded(63);
        for _ in 0..5_000 {
            let x = triangular(0.0, 10.0, 2.5, &mut rng);
            assert!((0.0..=10.0).contains(&x), "triangular = {x}");
        }
    }

    #[test]
    fn test_triangular_zero_width() {
        let mut rng = Hurricane::seeded(64);
        assert_eq!(triangular(4.0, 4.0, 99.0, &mut rng), 4.0);
    }
}
