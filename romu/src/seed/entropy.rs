//! Entropy sources for default (unseeded) construction
//!
//! Time-based seeding is best-effort: it is not cryptographically meaningful
//! and two constructions within the same clock tick get the same seed. Tests
//! substitute [`FixedEntropy`] to make default construction deterministic.

use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Reading used when the system clock reports a time before the Unix epoch.
const CLOCK_FALLBACK: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of a single 64-bit seed value.
pub trait EntropySource {
    /// Produce a seed value.
    fn entropy(&mut self) -> u64;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn entropy(&mut self) -> u64 {
        (**self).entropy()
    }
}

/// Wall-clock entropy: nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl EntropySource for SystemClock {
    fn entropy(&mut self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(err) => {
                warn!(error = %err, "system clock is before the Unix epoch, using fallback seed");
                CLOCK_FALLBACK
            }
        }
    }
}

/// Entropy source that always returns the same value.
///
/// # Example
/// ```
/// use romu_random::{FixedEntropy, Quad};
///
/// let a = Quad::with_entropy(&mut FixedEntropy(7));
/// let b = Quad::with_seed(7);
/// assert_eq!(a.state(), b.state());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn entropy(&mut self) -> u64 {
        self.0
    }
}
