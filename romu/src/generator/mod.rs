//! Romu generator family
//!
//! Every generator is the same shape: a fixed-size array of unsigned words
//! plus a closed-form, branch-free transform. [`Generator`] holds the state
//! and [`Variant`] supplies the transform, so each public type is a plain
//! alias such as `Quad = Generator<RomuQuad>`.
//!
//! # Ownership
//!
//! A generator is a single mutable sequence. `next()` takes `&mut self`;
//! threads that need randomness should each own an independently seeded
//! instance (or share one behind an external lock).

mod rng;
mod variants;
mod word;

pub use variants::{
    RomuDuo, RomuDuoJr, RomuMono32, RomuQuad, RomuQuad32, RomuTrio, RomuTrio32, MONO32_MUL,
    MONO32_SEED_MASK, MONO32_SEED_OFFSET, MUL32, MUL64,
};
pub use word::{Output, Word};

use crate::seed::{EntropySource, SeedExpander, SystemClock};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// 64-bit, four-word generator: the highest-quality variant
pub type Quad = Generator<RomuQuad>;
/// 64-bit, three-word generator
pub type Trio = Generator<RomuTrio>;
/// 64-bit, two-word generator
pub type Duo = Generator<RomuDuo>;
/// 64-bit, two-word generator with the cheapest step
pub type DuoJr = Generator<RomuDuoJr>;
/// 32-bit, four-word generator
pub type Quad32 = Generator<RomuQuad32>;
/// 32-bit, three-word generator
pub type Trio32 = Generator<RomuTrio32>;
/// 16-bit outputs over a single 32-bit word
pub type Mono32 = Generator<RomuMono32>;

/// Per-variant definition of a Romu generator.
///
/// Implementors are zero-sized markers. `step` must read every old word
/// before writing any new one and must return a word captured before the
/// update.
pub trait Variant {
    /// Word type of the state vector
    type Word: Word;

    /// Fixed-size state vector, e.g. `[u64; 4]`
    type State: Copy
        + Default
        + Eq
        + fmt::Debug
        + AsRef<[Self::Word]>
        + AsMut<[Self::Word]>
        + Serialize
        + DeserializeOwned
        + Send
        + Sync;

    /// Value returned by one call to `next()`
    type Output: Output;

    /// Byte seed accepted by `rand_core::SeedableRng::from_seed`
    type SeedBytes: Sized + Default + AsMut<[u8]>;

    /// Stable variant name, used in checkpoints and debug output
    const NAME: &'static str;

    /// Advance `state` by one step and return the pre-update output word.
    fn step(state: &mut Self::State) -> Self::Output;

    /// Build an initial state from one seed word.
    ///
    /// The default draws one word from the matching SplitMix expander for
    /// every state slot, in declared order.
    fn seed_state(seed: Self::Word) -> Self::State {
        let mut expander = <<Self::Word as Word>::Expander as SeedExpander>::with_seed(seed);
        let mut state = Self::State::default();
        for slot in state.as_mut() {
            *slot = expander.next();
        }
        state
    }

    /// Decode a `SeedableRng` byte seed into a state.
    ///
    /// The default reads the state words little-endian, in declared order.
    fn state_from_bytes(bytes: &[u8]) -> Self::State {
        let mut state = Self::State::default();
        let width = Self::Word::BYTES;
        for (slot, chunk) in state.as_mut().iter_mut().zip(bytes.chunks_exact(width)) {
            *slot = Self::Word::from_le_slice(chunk);
        }
        state
    }
}

/// A Romu generator: one state vector advanced by the variant's transform.
///
/// Construct with [`new`](Self::new) (clock-seeded), [`with_seed`](Self::with_seed)
/// or [`from_state`](Self::from_state), then call [`next`](Self::next).
///
/// Generators are `Clone` but not `Copy`: duplicating a stream must be
/// explicit.
///
/// ```compile_fail
/// use romu_random::Quad;
///
/// let rng = Quad::with_seed(7);
/// let moved = rng;
/// let _ = rng.state();
/// ```
///
/// # Example
/// ```
/// use romu_random::Quad;
///
/// let mut rng = Quad::from_state([1, 2, 3, 4]);
/// assert_eq!(rng.next(), 2);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Generator<V: Variant> {
    /// Full state vector (everything needed to replay the stream)
    state: V::State,

    #[serde(skip)]
    variant: PhantomData<V>,
}

impl<V: Variant> Generator<V> {
    /// Create a generator seeded from the system clock
    ///
    /// Best-effort only: two generators created within the same clock tick
    /// produce the same stream. Use [`with_seed`](Self::with_seed) when the
    /// stream must be reproducible.
    pub fn new() -> Self {
        Self::with_entropy(&mut SystemClock)
    }

    /// Create a generator seeded from an entropy source
    ///
    /// Equivalent to `with_seed` applied to the source's reading (folded to
    /// 32 bits for 32-bit variants).
    pub fn with_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let raw = source.entropy();
        let seed = V::Word::fold_u64(raw);
        debug!(variant = V::NAME, raw, "seeding generator from entropy source");
        Self::with_seed(seed)
    }

    /// Create a generator from a single seed word
    ///
    /// # Example
    /// ```
    /// use romu_random::Duo;
    ///
    /// let a = Duo::with_seed(12345);
    /// let b = Duo::with_seed(12345);
    /// assert_eq!(a.state(), b.state());
    /// ```
    pub fn with_seed(seed: V::Word) -> Self {
        Self::from_state(V::seed_state(seed))
    }

    /// Create a generator from an explicit state vector
    ///
    /// The words are used verbatim. The caller is responsible for state
    /// quality: a degenerate state (for example all zeros, a fixed point of
    /// every multiplicative variant) yields a degenerate stream.
    pub fn from_state(state: V::State) -> Self {
        Self {
            state,
            variant: PhantomData,
        }
    }

    /// Re-seed in place, exactly as `with_seed` would
    pub fn seed(&mut self, seed: V::Word) {
        self.state = V::seed_state(seed);
    }

    /// Copy of the current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use romu_random::Trio32;
    ///
    /// let mut rng = Trio32::with_seed(99);
    /// rng.next();
    /// let mut replay = Trio32::from_state(rng.state());
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn state(&self) -> V::State {
        self.state
    }

    /// Generate the next output and advance the state
    #[inline]
    pub fn next(&mut self) -> V::Output {
        V::step(&mut self.state)
    }

    /// Name of the variant (`"Quad"`, `"Mono32"`, ...)
    pub fn variant_name(&self) -> &'static str {
        V::NAME
    }
}

impl Generator<RomuDuo> {
    /// Generate the next output and advance the state (alias of `next`)
    #[inline]
    pub fn random(&mut self) -> u64 {
        self.next()
    }
}

impl<V: Variant> Default for Generator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Generator<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            variant: PhantomData,
        }
    }
}

impl<V: Variant> PartialEq for Generator<V> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<V: Variant> Eq for Generator<V> {}

impl<V: Variant> fmt::Debug for Generator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::NAME).field("state", &self.state).finish()
    }
}
