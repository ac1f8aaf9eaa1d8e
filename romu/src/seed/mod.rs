//! Seed expansion
//!
//! A generator's state is never filled directly from a user seed. The seed
//! goes through a SplitMix expander of the same word width so that nearby
//! seeds (42, 43, ...) still yield uncorrelated initial states.

mod entropy;
mod splitmix;

pub use entropy::{EntropySource, FixedEntropy, SystemClock};
pub use splitmix::{SplitMix32, SplitMix64};
pub(crate) use splitmix::fold_to_u32;

/// A small auxiliary PRNG that turns one seed word into a stream of
/// well-mixed words.
///
/// Expanders are consumed while a generator is seeded and are never kept by
/// the generator afterwards.
pub trait SeedExpander {
    /// Native word of the expander (`u32` or `u64`).
    type Word;

    /// Create an expander whose state is exactly `seed`.
    fn with_seed(seed: Self::Word) -> Self;

    /// Advance the state and return the next mixed word.
    fn next(&mut self) -> Self::Word;
}
