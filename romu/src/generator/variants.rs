//! Per-variant transforms
//!
//! Each `step` destructures the old state into temporaries, builds the new
//! state purely from those temporaries and returns the designated old word.
//! Constants and rotation amounts are load-bearing: changing any of them
//! produces a different (and likely worse) stream.

use super::{Variant, Word};

/// Multiplier shared by every 64-bit variant (also Trio32, reduced mod 2^32)
pub const MUL64: u64 = 15_241_094_284_759_029_579;

/// Quad32 multiplier
pub const MUL32: u32 = 3_323_815_723;

/// Mono32 multiplier
pub const MONO32_MUL: u32 = 3_611_795_771;

/// Mono32 seed mask; keeps the multiplicative step on a full-period orbit
pub const MONO32_SEED_MASK: u32 = 0x1fff_ffff;

/// Mono32 seed offset, added after masking
pub const MONO32_SEED_OFFSET: u32 = 1_156_979_152;

// ============================================================================
// 64-bit variants
// ============================================================================

/// Four 64-bit words `w, x, y, z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuQuad;

impl Variant for RomuQuad {
    type Word = u64;
    type State = [u64; 4];
    type Output = u64;
    type SeedBytes = [u8; 32];

    const NAME: &'static str = "Quad";

    #[inline]
    fn step(state: &mut [u64; 4]) -> u64 {
        let [w, x, y, z] = *state;
        *state = [
            MUL64.wrapping_mul(z),
            z.wrapping_add(w.rotate_left(52)),
            y.wrapping_sub(x),
            y.wrapping_add(w).rotate_left(19),
        ];
        x
    }
}

/// Three 64-bit words `x, y, z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuTrio;

impl Variant for RomuTrio {
    type Word = u64;
    type State = [u64; 3];
    type Output = u64;
    type SeedBytes = [u8; 24];

    const NAME: &'static str = "Trio";

    #[inline]
    fn step(state: &mut [u64; 3]) -> u64 {
        let [x, y, z] = *state;
        *state = [
            MUL64.wrapping_mul(z),
            y.wrapping_sub(x).rotate_left(12),
            z.wrapping_sub(y).rotate_left(44),
        ];
        x
    }
}

/// Two 64-bit words `x, y`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuDuo;

impl Variant for RomuDuo {
    type Word = u64;
    type State = [u64; 2];
    type Output = u64;
    type SeedBytes = [u8; 16];

    const NAME: &'static str = "Duo";

    #[inline]
    fn step(state: &mut [u64; 2]) -> u64 {
        let [x, y] = *state;
        *state = [
            MUL64.wrapping_mul(y),
            y.rotate_left(36)
                .wrapping_add(y.rotate_left(15))
                .wrapping_sub(x),
        ];
        x
    }
}

/// Two 64-bit words `x, y`; one rotation per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuDuoJr;

impl Variant for RomuDuoJr {
    type Word = u64;
    type State = [u64; 2];
    type Output = u64;
    type SeedBytes = [u8; 16];

    const NAME: &'static str = "DuoJr";

    #[inline]
    fn step(state: &mut [u64; 2]) -> u64 {
        let [x, y] = *state;
        *state = [MUL64.wrapping_mul(y), y.wrapping_sub(x).rotate_left(27)];
        x
    }
}

// ============================================================================
// 32-bit variants
// ============================================================================

/// Four 32-bit words `w, x, y, z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuQuad32;

impl Variant for RomuQuad32 {
    type Word = u32;
    type State = [u32; 4];
    type Output = u32;
    type SeedBytes = [u8; 16];

    const NAME: &'static str = "Quad32";

    #[inline]
    fn step(state: &mut [u32; 4]) -> u32 {
        let [w, x, y, z] = *state;
        *state = [
            MUL32.wrapping_mul(z),
            z.wrapping_add(w.rotate_left(26)),
            y.wrapping_sub(x),
            y.wrapping_add(w).rotate_left(9),
        ];
        x
    }
}

/// Three 32-bit words `x, y, z`
///
/// Uses the 64-bit multiplier truncated to 32 bits, and the Trio rotation
/// amounts taken modulo 32 (so the 44-bit rotation is a 12-bit one).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuTrio32;

impl Variant for RomuTrio32 {
    type Word = u32;
    type State = [u32; 3];
    type Output = u32;
    type SeedBytes = [u8; 12];

    const NAME: &'static str = "Trio32";

    #[inline]
    fn step(state: &mut [u32; 3]) -> u32 {
        let [x, y, z] = *state;
        *state = [
            (MUL64 as u32).wrapping_mul(z),
            y.wrapping_sub(x).rotate_left(12),
            z.wrapping_sub(y).rotate_left(44),
        ];
        x
    }
}

// ============================================================================
// Single-word variant
// ============================================================================

/// One 32-bit word; outputs its top 16 bits
///
/// Seeding never stores a raw seed: it is masked and offset so the
/// multiplicative step stays on its long orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RomuMono32;

impl Variant for RomuMono32 {
    type Word = u32;
    type State = [u32; 1];
    type Output = u16;
    type SeedBytes = [u8; 4];

    const NAME: &'static str = "Mono32";

    #[inline]
    fn step(state: &mut [u32; 1]) -> u16 {
        let [s] = *state;
        *state = [MONO32_MUL.wrapping_mul(s).rotate_left(12)];
        (s >> 16) as u16
    }

    fn seed_state(seed: u32) -> [u32; 1] {
        [(seed & MONO32_SEED_MASK) + MONO32_SEED_OFFSET]
    }

    fn state_from_bytes(bytes: &[u8]) -> [u32; 1] {
        Self::seed_state(<u32 as Word>::from_le_slice(bytes))
    }
}
