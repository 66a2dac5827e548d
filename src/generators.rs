//! Reusable generators over fixed value sequences.
//!
//! Three families, each wrapping caller data with a bias policy applied
//! on every draw:
//!
//! - [`TruffleShuffle`] — owns a mutable buffer; recency-biased
//!   perpetual shuffle.
//! - [`QuantumMonty`] — borrows a table; index bias selected from the
//!   [`crate::zero_cool`] family, by [`MontyMode`] or by name.
//! - [`CumulativeWeightedChoice`] — borrows a cumulative weight table
//!   and parallel values; weighted sampling via binary search.
//!
//! Construction validates the preconditions the draw paths rely on
//! (non-empty buffers, well-formed weight tables) and fails with a
//! [`GeneratorError`] instead of proceeding into out-of-bounds indexing.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::with_hurricane;
use crate::sample::{random_float, random_index};
use crate::zero_cool;

/// Error type for generator construction and named-mode dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The supplied value sequence was empty.
    EmptyValues,
    /// Weight and value tables differ in length.
    LengthMismatch { weights: usize, values: usize },
    /// The cumulative weight table is not strictly ascending.
    UnsortedWeights,
    /// A weight was NaN or infinite.
    NonFiniteWeight,
    /// The mode name does not match any known strategy.
    ModeNotFound(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyValues => write!(f, "value sequence must be non-empty"),
            GeneratorError::LengthMismatch { weights, values } => {
                write!(f, "weight/value length mismatch: {weights} weights, {values} values")
            }
            GeneratorError::UnsortedWeights => {
                write!(f, "cumulative weights must be strictly ascending")
            }
            GeneratorError::NonFiniteWeight => write!(f, "weights must be finite"),
            GeneratorError::ModeNotFound(name) => write!(f, "mode not found: {name:?}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

// ============================================================================
// Truffle Shuffle
// ============================================================================

/// Recency-biased perpetual shuffle over an owned buffer.
///
/// The buffer is shuffled uniformly once at construction. Each draw
/// removes the element at the draw end and reinserts it at a
/// poisson-front-biased offset from the opposite end, so recently drawn
/// values tend to sit far from the next draw point. Repeats stay
/// possible, just improbable over short runs.
///
/// The multiset of contents never changes; only the order does.
///
/// # Examples
/// ```
/// use tempest::TruffleShuffle;
///
/// let mut shoe = TruffleShuffle::new(vec!["a", "b", "c"]).unwrap();
/// let card = shoe.draw();
/// assert!(["a", "b", "c"].contains(&card));
/// assert_eq!(shoe.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TruffleShuffle<T> {
    data: VecDeque<T>,
}

impl<T> TruffleShuffle<T> {
    /// Builds a shuffle from the given values, using the per-thread
    /// engine for the initial shuffle.
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyValues`] if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = T>) -> Result<Self, GeneratorError> {
        with_hurricane(|rng| Self::new_with(values, rng))
    }

    /// Builds a shuffle from the given values using the supplied engine.
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyValues`] if `values` is empty.
    pub fn new_with<R: Rng>(
        values: impl IntoIterator<Item = T>,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        let mut data: VecDeque<T> = values.into_iter().collect();
        if data.is_empty() {
            return Err(GeneratorError::EmptyValues);
        }
        data.make_contiguous().shuffle(rng);
        Ok(Self { data })
    }

    /// Number of values in the buffer (constant for the object's life).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` after construction succeeds.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> TruffleShuffle<T> {
    /// Draws one value using the per-thread engine.
    pub fn draw(&mut self) -> T {
        with_hurricane(|rng| self.draw_with(rng))
    }

    /// Draws one value using the supplied engine.
    pub fn draw_with<R: Rng>(&mut self, rng: &mut R) -> T {
        let value = self
            .data
            .pop_back()
            .expect("buffer is non-empty by construction");
        let len = self.data.len() as i64;
        let slot = zero_cool::front_poisson(len, rng).max(0) as usize;
        self.data.insert(slot, value.clone());
        value
    }
}

// ============================================================================
// Quantum Monty
// ============================================================================

/// The named index-biasing strategies accepted by [`QuantumMonty`].
///
/// The string form of each variant is a stable wire format: callers pass
/// these exact names as configuration strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MontyMode {
    UniformFlat,
    FrontLinear,
    MiddleLinear,
    BackLinear,
    QuantumLinear,
    FrontGauss,
    MiddleGauss,
    BackGauss,
    QuantumGauss,
    FrontPoisson,
    MiddlePoisson,
    BackPoisson,
    QuantumPoisson,
    QuantumMonty,
}

impl MontyMode {
    /// Every mode, in wire-format order.
    pub const ALL: [MontyMode; 14] = [
        MontyMode::UniformFlat,
        MontyMode::FrontLinear,
        MontyMode::MiddleLinear,
        MontyMode::BackLinear,
        MontyMode::QuantumLinear,
        MontyMode::FrontGauss,
        MontyMode::MiddleGauss,
        MontyMode::BackGauss,
        MontyMode::QuantumGauss,
        MontyMode::FrontPoisson,
        MontyMode::MiddlePoisson,
        MontyMode::BackPoisson,
        MontyMode::QuantumPoisson,
        MontyMode::QuantumMonty,
    ];

    /// The wire-format name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            MontyMode::UniformFlat => "uniform_flat",
            MontyMode::FrontLinear => "front_linear",
            MontyMode::MiddleLinear => "middle_linear",
            MontyMode::BackLinear => "back_linear",
            MontyMode::QuantumLinear => "quantum_linear",
            MontyMode::FrontGauss => "front_gauss",
            MontyMode::MiddleGauss => "middle_gauss",
            MontyMode::BackGauss => "back_gauss",
            MontyMode::QuantumGauss => "quantum_gauss",
            MontyMode::FrontPoisson => "front_poisson",
            MontyMode::MiddlePoisson => "middle_poisson",
            MontyMode::BackPoisson => "back_poisson",
            MontyMode::QuantumPoisson => "quantum_poisson",
            MontyMode::QuantumMonty => "quantum_monty",
        }
    }

    /// Samples an index in `[0, size)` with this mode's bias.
    pub fn sample_index<R: Rng>(self, size: i64, rng: &mut R) -> i64 {
        match self {
            MontyMode::UniformFlat => random_index(size, rng),
            MontyMode::FrontLinear => zero_cool::front_linear(size, rng),
            MontyMode::MiddleLinear => zero_cool::middle_linear(size, rng),
            MontyMode::BackLinear => zero_cool::back_linear(size, rng),
            MontyMode::QuantumLinear => zero_cool::quantum_linear(size, rng),
            MontyMode::FrontGauss => zero_cool::front_gauss(size, rng),
            MontyMode::MiddleGauss => zero_cool::middle_gauss(size, rng),
            MontyMode::BackGauss => zero_cool::back_gauss(size, rng),
            MontyMode::QuantumGauss => zero_cool::quantum_gauss(size, rng),
            MontyMode::FrontPoisson => zero_cool::front_poisson(size, rng),
            MontyMode::MiddlePoisson => zero_cool::middle_poisson(size, rng),
            MontyMode::BackPoisson => zero_cool::back_poisson(size, rng),
            MontyMode::QuantumPoisson => zero_cool::quantum_poisson(size, rng),
            MontyMode::QuantumMonty => zero_cool::quantum_monty(size, rng),
        }
    }
}

impl fmt::Display for MontyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MontyMode {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MontyMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| GeneratorError::ModeNotFound(s.to_string()))
    }
}

/// Mode-selectable biased index generator over a borrowed value table.
///
/// # Examples
/// ```
/// use tempest::{MontyMode, QuantumMonty};
///
/// let table = ["a", "b", "c", "d", "e"];
/// let monty = QuantumMonty::new(&table).unwrap();
/// let value = monty.draw_mode(MontyMode::FrontLinear);
/// assert!(table.contains(value));
/// assert!(monty.draw_named("no_such_mode").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuantumMonty<'a, T> {
    table: &'a [T],
}

impl<'a, T> QuantumMonty<'a, T> {
    /// Wraps a non-empty table.
    ///
    /// # Errors
    /// Returns [`GeneratorError::EmptyValues`] if `table` is empty.
    pub fn new(table: &'a [T]) -> Result<Self, GeneratorError> {
        if table.is_empty() {
            return Err(GeneratorError::EmptyValues);
        }
        Ok(Self { table })
    }

    /// Table size.
    pub fn size(&self) -> i64 {
        self.table.len() as i64
    }

    /// Draws with the stacked shape-and-position dispatcher
    /// ([`zero_cool::quantum_monty`]) on the per-thread engine.
    pub fn draw(&self) -> &'a T {
        with_hurricane(|rng| self.draw_with(rng))
    }

    /// Draws with the stacked dispatcher on the supplied engine.
    pub fn draw_with<R: Rng>(&self, rng: &mut R) -> &'a T {
        self.draw_mode_with(MontyMode::QuantumMonty, rng)
    }

    /// Draws with a specific mode on the per-thread engine.
    pub fn draw_mode(&self, mode: MontyMode) -> &'a T {
        with_hurricane(|rng| self.draw_mode_with(mode, rng))
    }

    /// Draws with a specific mode on the supplied engine.
    pub fn draw_mode_with<R: Rng>(&self, mode: MontyMode, rng: &mut R) -> &'a T {
        &self.table[mode.sample_index(self.size(), rng) as usize]
    }

    /// Draws with a mode given by its wire-format name, on the
    /// per-thread engine.
    ///
    /// Unknown names are a hard [`GeneratorError::ModeNotFound`]. (An
    /// ancestral build of this interface silently fell back to the
    /// stacked dispatcher instead; that behavior is not reproduced.)
    pub fn draw_named(&self, name: &str) -> Result<&'a T, GeneratorError> {
        with_hurricane(|rng| self.draw_named_with(name, rng))
    }

    /// Draws with a mode given by its wire-format name, on the supplied
    /// engine.
    pub fn draw_named_with<R: Rng>(&self, name: &str, rng: &mut R) -> Result<&'a T, GeneratorError> {
        let mode = name.parse::<MontyMode>()?;
        Ok(self.draw_mode_with(mode, rng))
    }
}

// ============================================================================
// Cumulative Weighted Choice
// ============================================================================

/// Weighted sampling over parallel weight/value tables via binary search.
///
/// `weights[i]` is the cumulative weight up to and including `values[i]`;
/// the final entry is the total weight mass. Build the table from
/// relative weights with [`cumulative_from_relative`].
///
/// # Examples
/// ```
/// use tempest::{cumulative_from_relative, CumulativeWeightedChoice};
///
/// let weights = cumulative_from_relative(&[1.0, 2.0, 3.0]);
/// let values = ["rare", "uncommon", "common"];
/// let table = CumulativeWeightedChoice::new(&weights, &values).unwrap();
/// assert!(values.contains(table.draw()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CumulativeWeightedChoice<'a, T> {
    weights: &'a [f64],
    values: &'a [T],
}

impl<'a, T> CumulativeWeightedChoice<'a, T> {
    /// Wraps validated weight/value tables.
    ///
    /// # Errors
    /// - [`GeneratorError::EmptyValues`] if either table is empty.
    /// - [`GeneratorError::LengthMismatch`] if the tables differ in
    ///   length.
    /// - [`GeneratorError::NonFiniteWeight`] if any weight is NaN or
    ///   infinite.
    /// - [`GeneratorError::UnsortedWeights`] unless the weights are
    ///   strictly ascending.
    pub fn new(weights: &'a [f64], values: &'a [T]) -> Result<Self, GeneratorError> {
        if weights.is_empty() || values.is_empty() {
            return Err(GeneratorError::EmptyValues);
        }
        if weights.len() != values.len() {
            return Err(GeneratorError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if !weights.iter().all(|w| w.is_finite()) {
            return Err(GeneratorError::NonFiniteWeight);
        }
        if !weights.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(GeneratorError::UnsortedWeights);
        }
        Ok(Self { weights, values })
    }

    /// Number of selectable values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` after construction succeeds.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total weight mass (the final cumulative entry).
    pub fn total_weight(&self) -> f64 {
        *self.weights.last().expect("weights are non-empty")
    }

    /// Draws one value using the per-thread engine.
    pub fn draw(&self) -> &'a T {
        with_hurricane(|rng| self.draw_with(rng))
    }

    /// Draws one value using the supplied engine.
    ///
    /// Samples a raw weight uniformly in `[0, total)` and takes the
    /// leftmost entry whose cumulative weight reaches it (lower-bound
    /// binary search).
    pub fn draw_with<R: Rng>(&self, rng: &mut R) -> &'a T {
        let raw_weight = random_float(0.0, self.total_weight(), rng);
        let index = self.weights.partition_point(|&w| w < raw_weight);
        &self.values[index.min(self.values.len() - 1)]
    }
}

// ============================================================================
// Weight-table and slice helpers
// ============================================================================

/// Prefix-sums relative weights into a cumulative table.
///
/// # Examples
/// ```
/// use tempest::cumulative_from_relative;
/// assert_eq!(cumulative_from_relative(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// ```
pub fn cumulative_from_relative(weights: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    weights
        .iter()
        .map(|w| {
            total += w;
            total
        })
        .collect()
}

/// Adjacent-differences a cumulative table back into relative weights.
///
/// Inverse of [`cumulative_from_relative`]; the first entry is kept.
pub fn relative_from_cumulative(weights: &[f64]) -> Vec<f64> {
    let mut previous = 0.0;
    weights
        .iter()
        .map(|w| {
            let relative = w - previous;
            previous = *w;
            relative
        })
        .collect()
}

/// Uniformly selects one element, or `None` from an empty slice.
pub fn random_value<'a, T, R: Rng>(slice: &'a [T], rng: &mut R) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    Some(&slice[random_index(slice.len() as i64, rng) as usize])
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::Hurricane;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn truffle_shuffle_conserves_contents(
            seed in 0_u64..10_000,
            data in proptest::collection::vec(0_i32..100, 1..30),
            draws in 0_usize..50,
        ) {
            let mut rng = Hurricane::seeded(seed);
            let mut shoe = TruffleShuffle::new_with(data.clone(), &mut rng).unwrap();
            for _ in 0..draws {
                let _ = shoe.draw_with(&mut rng);
            }
            let mut contents: Vec<i32> = shoe.data.iter().copied().collect();
            contents.sort_unstable();
            let mut expected = data;
            expected.sort_unstable();
            prop_assert_eq!(contents, expected);
        }

        #[test]
        fn weighted_choice_index_always_valid(
            seed in 0_u64..10_000,
            relative in proptest::collection::vec(0.01_f64..100.0, 1..20),
        ) {
            let mut rng = Hurricane::seeded(seed);
            let weights = cumulative_from_relative(&relative);
            let values: Vec<usize> = (0..relative.len()).collect();
            let table = CumulativeWeightedChoice::new(&weights, &values).unwrap();
            let drawn = *table.draw_with(&mut rng);
            prop_assert!(drawn < values.len());
        }

        #[test]
        fn cumulative_tables_are_ascending(
            relative in proptest::collection::vec(0.01_f64..100.0, 1..20),
        ) {
            let cumulative = cumulative_from_relative(&relative);
            prop_assert!(cumulative.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
