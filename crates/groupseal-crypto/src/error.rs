//! Error types for sealing and opening.

use thiserror::Error;

/// Errors that can occur when opening a sealed message.
///
/// These are the diagnostic view exposed by [`crate::try_open`]. The
/// simulation surface ([`crate::open`]) collapses all of them into an
/// empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The passphrase is empty after trimming; there is no key to open
    /// with.
    #[error("empty passphrase")]
    EmptyKey,

    /// The ciphertext string is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    InvalidEncoding(String),

    /// The decoded payload is too short to contain a nonce and an
    /// authentication tag.
    #[error("ciphertext truncated: {len} bytes, need at least {min}")]
    Truncated {
        /// Decoded payload length
        len: usize,
        /// Minimum payload length (nonce + tag)
        min: usize,
    },

    /// The authentication tag did not verify: wrong key or tampered
    /// ciphertext.
    #[error("authentication failed: wrong key or tampered ciphertext")]
    AuthenticationFailed,

    /// Decryption succeeded but the plaintext is not valid UTF-8.
    ///
    /// Cannot happen for ciphertexts produced by [`crate::seal`], which
    /// only seals strings.
    #[error("decrypted payload is not valid UTF-8")]
    InvalidPlaintext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_human_readable_messages() {
        assert_eq!(CipherError::EmptyKey.to_string(), "empty passphrase");

        assert_eq!(
            CipherError::Truncated { len: 10, min: 40 }.to_string(),
            "ciphertext truncated: 10 bytes, need at least 40"
        );

        assert!(CipherError::AuthenticationFailed.to_string().contains("wrong key"));
    }
}
