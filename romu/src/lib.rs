//! Romu Random - fast non-cryptographic pseudorandom number generators
//!
//! Small, state-minimal generators built from multiply-rotate steps, for
//! simulation, sampling and randomized algorithms.
//!
//! # Architecture
//!
//! - **seed**: SplitMix seed expanders and injectable entropy sources
//! - **generator**: the Romu generator family (Quad, Trio, Duo, DuoJr,
//!   Quad32, Trio32, Mono32) and its `rand_core` integration
//! - **checkpoint**: save/restore of a generator stream with integrity checks
//!
//! # Critical Invariants
//!
//! 1. Every output is a state word captured BEFORE the state advances
//! 2. All arithmetic wraps within the variant's word width
//! 3. Same seed (or same state) always produces the same stream
//!
//! These generators are NOT cryptographically secure.
//!
//! # Example
//! ```
//! use romu_random::Trio;
//!
//! let mut rng = Trio::with_seed(42);
//! let first = rng.next();
//!
//! let mut replay = Trio::with_seed(42);
//! assert_eq!(replay.next(), first);
//! ```

// Module declarations
pub mod checkpoint;
pub mod generator;
pub mod seed;

// Re-exports for convenience
pub use checkpoint::{Checkpoint, CheckpointError};
pub use generator::{
    Duo, DuoJr, Generator, Mono32, Output, Quad, Quad32, Trio, Trio32, Variant, Word,
};
pub use seed::{EntropySource, FixedEntropy, SeedExpander, SplitMix32, SplitMix64, SystemClock};

// rand_core traits implemented by every generator
pub use rand_core::{RngCore, SeedableRng};
