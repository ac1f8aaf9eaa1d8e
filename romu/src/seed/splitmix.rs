//! SplitMix seed expanders
//!
//! SplitMix64 is the standard Steele/Lea/Flood mixer. SplitMix32 is its
//! 32-bit analogue: an LCG step followed by two xor-shift-multiply rounds.
//!
//! # Determinism
//!
//! Same seed → same sequence of words. Seeded generator construction relies
//! on this being bit-exact across runs and implementations.

use super::{EntropySource, SeedExpander, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::debug;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX64_A: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX64_B: u64 = 0x94d0_49bb_1331_11eb;

const LCG32_MUL: u32 = 1_664_525;
const LCG32_ADD: u32 = 314_159_265;
const MIX32_A: u32 = 0x5ce4_e5b9;
const MIX32_B: u32 = 0x1331_c1eb;

/// 64-bit seed expander
///
/// # Example
/// ```
/// use romu_random::SplitMix64;
///
/// let mut expander = SplitMix64::with_seed(0);
/// assert_eq!(expander.next(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    /// Internal state (any value is valid, including zero)
    state: u64,
}

impl SplitMix64 {
    /// Create an expander seeded from the system clock
    pub fn new() -> Self {
        Self::with_entropy(&mut SystemClock)
    }

    /// Create an expander with an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create an expander from an entropy source
    pub fn with_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let seed = source.entropy();
        debug!(seed, "seeding SplitMix64 from entropy source");
        Self::with_seed(seed)
    }

    /// Generate the next mixed 64-bit word
    #[inline]
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX64_A);
        z = (z ^ (z >> 27)).wrapping_mul(MIX64_B);
        z ^ (z >> 31)
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedExpander for SplitMix64 {
    type Word = u64;

    fn with_seed(seed: u64) -> Self {
        SplitMix64::with_seed(seed)
    }

    fn next(&mut self) -> u64 {
        SplitMix64::next(self)
    }
}

/// 32-bit seed expander
///
/// # Example
/// ```
/// use romu_random::SplitMix32;
///
/// let mut a = SplitMix32::with_seed(42);
/// let mut b = SplitMix32::with_seed(42);
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix32 {
    state: u32,
}

impl SplitMix32 {
    /// Create an expander seeded from the system clock
    pub fn new() -> Self {
        Self::with_entropy(&mut SystemClock)
    }

    /// Create an expander with an explicit seed
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create an expander from an entropy source
    ///
    /// The 64-bit reading is folded (`hi ^ lo`) so that both halves of a
    /// clock reading contribute to the seed.
    pub fn with_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let raw = source.entropy();
        let seed = fold_to_u32(raw);
        debug!(raw, seed, "seeding SplitMix32 from entropy source");
        Self::with_seed(seed)
    }

    /// Generate the next mixed 32-bit word
    #[inline]
    pub fn next(&mut self) -> u32 {
        self.state = LCG32_MUL.wrapping_mul(self.state.wrapping_add(LCG32_ADD));
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(MIX32_A);
        z = (z ^ (z >> 13)).wrapping_mul(MIX32_B);
        z ^ (z >> 15)
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SplitMix32 {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedExpander for SplitMix32 {
    type Word = u32;

    fn with_seed(seed: u32) -> Self {
        SplitMix32::with_seed(seed)
    }

    fn next(&mut self) -> u32 {
        SplitMix32::next(self)
    }
}

/// Fold a 64-bit value into 32 bits
#[inline]
pub(crate) fn fold_to_u32(value: u64) -> u32 {
    (value ^ (value >> 32)) as u32
}
