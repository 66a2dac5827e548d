//! # tempest
//!
//! Random variates, dice mechanics, and biased-selection generators over
//! a hardware-seeded entropy engine.
//!
//! The crate is a pure computation library: no I/O, no configuration, no
//! persisted state beyond the engine's bit state. Data flows one way,
//! caller → dice / index-bias / generator layer → distribution library →
//! primitive samplers → engine.
//!
//! ## Modules
//!
//! - [`engine`] — the [`Hurricane`] entropy core and the per-thread
//!   default instance
//! - [`sample`] — primitive uniform samplers, clamps, and the
//!   analytic-continuation policy for non-positive inputs
//! - [`variates`] — named statistical distribution samplers
//! - [`dice`] — dice totals, ability scores, plus-or-minus spreads
//! - [`zero_cool`] — front/middle/back/quantum biased index generators
//! - [`generators`] — [`TruffleShuffle`], [`QuantumMonty`],
//!   [`CumulativeWeightedChoice`]
//! - [`global`] — the zero-configuration facade over all of the above
//!
//! ## Picking an entry point
//!
//! Call [`global`] functions for the zero-setup path, or pass your own
//! engine (any `rand::Rng`, usually a [`Hurricane`]) to the same
//! functions in their home modules when you need replayable draws.
//!
//! ```
//! use tempest::{Hurricane, QuantumMonty};
//!
//! // Zero configuration: the per-thread engine.
//! let score = tempest::global::ability_dice(4);
//! assert!((3..=18).contains(&score));
//!
//! // Explicit engine: reproducible draws.
//! let mut rng = Hurricane::seeded(7);
//! let loot = ["sword", "shield", "potion", "scroll"];
//! let monty = QuantumMonty::new(&loot).unwrap();
//! assert!(loot.contains(monty.draw_with(&mut rng)));
//! ```

pub mod dice;
pub mod engine;
pub mod generators;
pub mod global;
pub mod sample;
pub mod variates;
pub mod zero_cool;

pub use engine::Hurricane;
pub use generators::{
    cumulative_from_relative, random_value, relative_from_cumulative, CumulativeWeightedChoice,
    GeneratorError, MontyMode, QuantumMonty, TruffleShuffle,
};
