//! Checkpoint - Save/Restore Generator State
//!
//! A generator's stream is fully determined by its state vector, so a
//! checkpoint is just the variant name, the state words and a SHA-256 digest
//! over both. Restoring yields a generator that continues the stream exactly
//! where the checkpointed one left off.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator produces the same outputs as the
//!   original from the checkpoint onwards
//! - **Variant matching**: a checkpoint can only be restored into the variant
//!   that produced it
//! - **Integrity**: any edit to the name or words is detected via the digest

use crate::generator::{Generator, Variant, Word};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint is for variant {found}, expected {expected}")]
    VariantMismatch { expected: String, found: String },

    #[error("Checkpoint has {found} state word(s), expected {expected}")]
    WordCount { expected: usize, found: usize },

    #[error("State word {index} ({value:#x}) does not fit in {bits} bits")]
    WordOutOfRange { index: usize, value: u64, bits: u32 },

    #[error("Checkpoint digest mismatch: computed {computed}, stored {stored}")]
    DigestMismatch { computed: String, stored: String },

    #[error("Checkpoint serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Checkpoint Structure
// ============================================================================

/// Serializable snapshot of one generator
///
/// # Example
/// ```
/// use romu_random::{Checkpoint, Quad};
///
/// let mut rng = Quad::with_seed(12345);
/// rng.next();
///
/// let json = rng.checkpoint().to_json().unwrap();
/// let restored = Quad::restore(&Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored, rng);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Variant name (`"Quad"`, `"Trio32"`, ...)
    pub variant: String,

    /// State words in declared order, widened to u64
    pub words: Vec<u64>,

    /// Lowercase hex SHA-256 of the length-prefixed variant name and words
    pub digest: String,
}

impl Checkpoint {
    /// Build a checkpoint, computing its digest
    pub fn new(variant: impl Into<String>, words: Vec<u64>) -> Self {
        let variant = variant.into();
        let digest = compute_digest(&variant, &words);
        Self {
            variant,
            words,
            digest,
        }
    }

    /// Whether the stored digest matches the contents
    pub fn is_intact(&self) -> bool {
        compute_digest(&self.variant, &self.words) == self.digest
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON (the digest is checked on restore, not here)
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// SHA-256 over the variant name (length-prefixed) followed by each word's
/// little-endian bytes
pub fn compute_digest(variant: &str, words: &[u64]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((variant.len() as u64).to_le_bytes());
    hasher.update(variant.as_bytes());
    for word in words {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Generator Save/Restore
// ============================================================================

impl<V: Variant> Generator<V> {
    /// Snapshot the current state
    pub fn checkpoint(&self) -> Checkpoint {
        let words = self.state().as_ref().iter().map(|w| w.to_u64()).collect();
        Checkpoint::new(V::NAME, words)
    }

    /// Rebuild a generator from a checkpoint
    ///
    /// # Errors
    /// Rejects checkpoints from another variant, with the wrong number of
    /// words, with a failing digest, or with words too wide for the variant.
    pub fn restore(checkpoint: &Checkpoint) -> Result<Self, CheckpointError> {
        Self::restore_words(checkpoint).map_err(|err| {
            debug!(variant = V::NAME, error = %err, "checkpoint rejected");
            err
        })
    }

    fn restore_words(checkpoint: &Checkpoint) -> Result<Self, CheckpointError> {
        if checkpoint.variant != V::NAME {
            return Err(CheckpointError::VariantMismatch {
                expected: V::NAME.to_string(),
                found: checkpoint.variant.clone(),
            });
        }

        let mut state = V::State::default();
        let slots = state.as_mut();
        if checkpoint.words.len() != slots.len() {
            return Err(CheckpointError::WordCount {
                expected: slots.len(),
                found: checkpoint.words.len(),
            });
        }

        let computed = compute_digest(&checkpoint.variant, &checkpoint.words);
        if computed != checkpoint.digest {
            return Err(CheckpointError::DigestMismatch {
                computed,
                stored: checkpoint.digest.clone(),
            });
        }

        for (index, (slot, &value)) in slots.iter_mut().zip(&checkpoint.words).enumerate() {
            *slot = V::Word::try_from_u64(value).ok_or(CheckpointError::WordOutOfRange {
                index,
                value,
                bits: V::Word::BITS,
            })?;
        }

        Ok(Self::from_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Mono32, Quad, Trio32};

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = compute_digest("Quad", &[1, 2, 3, 4]);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_depends_on_variant() {
        assert_ne!(
            compute_digest("Duo", &[1, 2]),
            compute_digest("DuoJr", &[1, 2])
        );
    }

    #[test]
    fn test_digest_separates_name_from_words() {
        // Without a length prefix these two inputs hash the same byte stream
        let word = u64::from_le_bytes(*b"AAAAAAAA");
        assert_ne!(compute_digest("AAAAAAAA", &[]), compute_digest("", &[word]));
    }

    #[test]
    fn test_digest_layout() {
        let mut hasher = Sha256::new();
        hasher.update(4u64.to_le_bytes());
        hasher.update(b"Quad");
        for word in [1u64, 2, 3, 4] {
            hasher.update(word.to_le_bytes());
        }
        assert_eq!(
            compute_digest("Quad", &[1, 2, 3, 4]),
            format!("{:x}", hasher.finalize())
        );
    }

    #[test]
    fn test_checkpoint_words_are_widened() {
        let rng = Trio32::from_state([1, 2, u32::MAX]);
        let checkpoint = rng.checkpoint();
        assert_eq!(checkpoint.variant, "Trio32");
        assert_eq!(checkpoint.words, vec![1, 2, u64::from(u32::MAX)]);
        assert!(checkpoint.is_intact());
    }

    #[test]
    fn test_restore_rejects_wide_word() {
        let checkpoint = Checkpoint::new("Mono32", vec![1 << 40]);
        let err = Mono32::restore(&checkpoint).unwrap_err();
        assert!(matches!(
            err,
            CheckpointError::WordOutOfRange { index: 0, bits: 32, .. }
        ));
    }

    #[test]
    fn test_restore_rejects_other_variant() {
        let checkpoint = Trio32::with_seed(1).checkpoint();
        let err = Quad::restore(&checkpoint).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Checkpoint is for variant Trio32, expected Quad"
        );
    }
}
