//! Word and output types of the generator family

use crate::seed::{SeedExpander, SplitMix32, SplitMix64};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Unsigned state word (`u32` or `u64`) with its matching seed expander.
pub trait Word:
    Copy + Default + Eq + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// SplitMix expander of the same width
    type Expander: SeedExpander<Word = Self>;

    /// Widen to `u64`
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, or `None` if the value does not fit
    fn try_from_u64(value: u64) -> Option<Self>;

    /// Fold a 64-bit seed into this width
    fn fold_u64(value: u64) -> Self;

    /// Decode from exactly `BYTES` little-endian bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;

    type Expander = SplitMix64;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }

    fn try_from_u64(value: u64) -> Option<Self> {
        Some(value)
    }

    fn fold_u64(value: u64) -> Self {
        value
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    }
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;

    type Expander = SplitMix32;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }

    fn try_from_u64(value: u64) -> Option<Self> {
        u32::try_from(value).ok()
    }

    fn fold_u64(value: u64) -> Self {
        crate::seed::fold_to_u32(value)
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        u32::from_le_bytes(buf)
    }
}

/// Value produced by one generator step.
pub trait Output: Copy + Eq + fmt::Debug {
    /// Width in bits
    const BITS: u32;

    /// Widen to `u64`
    fn to_u64(self) -> u64;
}

impl Output for u64 {
    const BITS: u32 = 64;

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }
}

impl Output for u32 {
    const BITS: u32 = 32;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}

impl Output for u16 {
    const BITS: u32 = 16;

    #[inline]
    fn to_u64(self) -> u64 {
        u64::from(self)
    }
}
