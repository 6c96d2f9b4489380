//! Group key ownership and rotation.
//!
//! Exactly one group key is active at a time (possibly empty, meaning "no
//! key"). Rotation replaces it with a fresh tagged value and never touches
//! messages sealed under earlier keys; those simply stop opening.

use crate::env::RandomSource;

/// Prefix tagging keys produced by [`KeyManager::rotate`].
///
/// Distinguishes rotated keys from manually entered ones, both for the
/// redacted preview and for tests.
pub const ROTATED_PREFIX: &str = "rotated-";

/// Sentinel returned by [`KeyManager::preview`] when no key is set.
pub const EMPTY_KEY_PREVIEW: &str = "(empty)";

/// Alphabet for rotation suffixes (base36, matching manual key style)
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of suffix characters in a rotated key
const SUFFIX_LEN: usize = 6;

/// Number of key characters exposed by the redacted preview
const PREVIEW_LEN: usize = 4;

/// Owns the single mutable group key.
#[derive(Debug, Clone, Default)]
pub struct KeyManager {
    current: String,
}

impl KeyManager {
    /// Create a manager with no key set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with an initial key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { current: key.into() }
    }

    /// Current key, in full.
    ///
    /// For sealing and opening only; presentation layers render
    /// [`preview`](Self::preview) instead.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether a usable key is set (non-empty after trimming).
    pub fn has_key(&self) -> bool {
        !self.current.trim().is_empty()
    }

    /// Replace the current key unconditionally.
    ///
    /// An empty string is allowed and means "no key": sends are gated off
    /// until a key is set again.
    pub fn set_key(&mut self, new_key: impl Into<String>) {
        self.current = new_key.into();
    }

    /// Rotate to a fresh key and return it.
    ///
    /// The new key is `rotated-` followed by six base36 characters drawn
    /// from the randomness seam. Previously sealed messages are not
    /// re-encrypted; they keep their original ciphertext and stop opening
    /// under the new key.
    pub fn rotate<R: RandomSource>(&mut self, rng: &mut R) -> String {
        let mut value = rng.random_u64();
        let mut suffix = String::with_capacity(SUFFIX_LEN);
        for _ in 0..SUFFIX_LEN {
            let index = (value % SUFFIX_ALPHABET.len() as u64) as usize;
            suffix.push(SUFFIX_ALPHABET[index] as char);
            value /= SUFFIX_ALPHABET.len() as u64;
        }

        self.current = format!("{ROTATED_PREFIX}{suffix}");
        self.current.clone()
    }

    /// Redacted preview of the current key.
    ///
    /// First four characters followed by `***`, or [`EMPTY_KEY_PREVIEW`]
    /// when the key is the empty string. The full key is never exposed
    /// through this path.
    pub fn preview(&self) -> String {
        if self.current.is_empty() {
            return EMPTY_KEY_PREVIEW.to_string();
        }

        let prefix: String = self.current.chars().take(PREVIEW_LEN).collect();
        format!("{prefix}***")
    }
}

/// Redact an arbitrary key string the same way [`KeyManager::preview`]
/// does.
///
/// Used for per-message key-at-send previews so stored key snapshots are
/// never rendered in full either.
pub(crate) fn redact_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY_KEY_PREVIEW.to_string();
    }

    let prefix: String = key.chars().take(PREVIEW_LEN).collect();
    format!("{prefix}***")
}
