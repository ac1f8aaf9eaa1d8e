//! `rand_core` integration
//!
//! Lets any Romu generator drive the `rand` ecosystem (distributions,
//! shuffling, ...). Narrow outputs are concatenated with the first output in
//! the low bits, matching `rand_core::impls::next_u64_via_u32`.

use super::{Generator, Output, Variant, Word};
use rand_core::{impls, RngCore, SeedableRng};

impl<V: Variant> Generator<V> {
    /// Concatenate successive outputs until `width` bits are filled
    #[inline]
    fn gather(&mut self, width: u32) -> u64 {
        let mut acc = 0u64;
        let mut filled = 0;
        while filled < width {
            acc |= self.next().to_u64() << filled;
            filled += V::Output::BITS;
        }
        acc
    }
}

impl<V: Variant> RngCore for Generator<V> {
    /// High half of a 64-bit output; one 32-bit output; or two 16-bit outputs
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let bits = V::Output::BITS;
        if bits >= 32 {
            (self.next().to_u64() >> (bits - 32)) as u32
        } else {
            self.gather(32) as u32
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.gather(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<V: Variant> SeedableRng for Generator<V> {
    type Seed = V::SeedBytes;

    /// Little-endian state words (Mono32: a seed word, masked as usual)
    fn from_seed(mut seed: Self::Seed) -> Self {
        Self::from_state(V::state_from_bytes(seed.as_mut()))
    }

    /// Same as `with_seed`; 32-bit variants fold the seed to 32 bits
    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(V::Word::fold_u64(state))
    }
}
