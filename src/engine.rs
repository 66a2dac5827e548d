//! The entropy core.
//!
//! One [`Hurricane`] engine supplies every sampler in this crate with
//! uniformly distributed bits. The engine wraps a high-quality PRNG
//! ([`StdRng`]) seeded once from the operating system's hardware entropy
//! source, and post-processes its output through a Bays–Durham shuffle
//! table to break up stride patterns in sequential draws.
//!
//! Reference: Bays & Durham (1976), "Improving a Poor Random Number
//! Generator", *ACM Transactions on Mathematical Software* 2(1).
//!
//! # Threading
//!
//! The zero-configuration API in [`crate::global`] draws from one engine
//! **per thread** (`thread_local!`), so there is no locking and no shared
//! mutable state between threads. Callers that want a single explicit
//! engine instead construct a [`Hurricane`] themselves and pass it to the
//! `rng`-parameter functions; sharing that instance across threads then
//! requires external synchronization (e.g. a `Mutex`).
//!
//! # Entropy failure
//!
//! If the OS entropy source is unavailable, engine construction panics.
//! This is a process-startup failure with no recovery path at this layer.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Number of slots in the Bays–Durham shuffle table.
const TABLE_SIZE: usize = 256;

/// Hardware-seeded pseudorandom bit engine.
///
/// Implements [`RngCore`], so it plugs directly into `rand` range methods
/// and `rand_distr` distribution objects.
///
/// # Examples
/// ```
/// use rand::RngCore;
/// use tempest::Hurricane;
///
/// let mut a = Hurricane::seeded(42);
/// let mut b = Hurricane::seeded(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
pub struct Hurricane {
    base: StdRng,
    table: [u64; TABLE_SIZE],
    last: u64,
}

impl Hurricane {
    /// Creates an engine seeded from the OS hardware entropy source.
    ///
    /// Seeding happens exactly once, here; the public API never reseeds.
    ///
    /// # Panics
    /// Panics if the OS entropy source is unavailable.
    pub fn new() -> Self {
        Self::from_base(StdRng::from_os_rng())
    }

    /// Creates a deterministic engine from a fixed seed.
    ///
    /// The sequence is reproducible for a given seed on the same `rand`
    /// version. Intended for tests and simulations that need replay; the
    /// zero-configuration API never uses this path.
    pub fn seeded(seed: u64) -> Self {
        Self::from_base(StdRng::seed_from_u64(seed))
    }

    fn from_base(mut base: StdRng) -> Self {
        let mut table = [0u64; TABLE_SIZE];
        for slot in table.iter_mut() {
            *slot = base.next_u64();
        }
        let last = base.next_u64();
        Self { base, table, last }
    }
}

impl Default for Hurricane {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Hurricane {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // Bays-Durham: the previous output selects which buffered value
        // to emit next, decorrelating consecutive draws from the base
        // generator's stride.
        let slot = (self.last >> 56) as usize;
        let out = self.table[slot];
        self.table[slot] = self.base.next_u64();
        self.last = out;
        out
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }
}

thread_local! {
    static HURRICANE: RefCell<Hurricane> = RefCell::new(Hurricane::new());
}

/// Runs `f` with exclusive access to the calling thread's engine.
///
/// The engine is created on first use and lives until the thread exits.
pub fn with_hurricane<T>(f: impl FnOnce(&mut Hurricane) -> T) -> T {
    HURRICANE.with(|cell| f(&mut cell.borrow_mut()))
}

// ============================================================================
// Tests
// ============================================================================
