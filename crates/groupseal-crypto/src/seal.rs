//! Message sealing using `XChaCha20-Poly1305`
//!
//! All functions are pure - random nonce bytes must be provided by the
//! caller. This enables deterministic testing and keeps the crate free of
//! ambient entropy.
//!
//! Sealed wire shape: `base64(nonce || ciphertext+tag)`.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroizing;

use crate::{derivation::derive_group_key, error::CipherError};

/// Size of the `XChaCha20` nonce prefix (24 bytes)
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// Seal a plaintext under the shared group passphrase.
///
/// Returns the armored ciphertext string. Repeated calls with the same
/// plaintext and passphrase produce different ciphertexts whenever the
/// caller supplies fresh nonces; callers must only rely on
/// [`open`]/[`try_open`] recovering the plaintext.
///
/// # Security
///
/// - Caller MUST provide a fresh random nonce per seal in production
/// - Authenticated encryption prevents undetected tampering
pub fn seal(plaintext: &str, passphrase: &str, nonce: [u8; NONCE_SIZE]) -> String {
    let key = Zeroizing::new(derive_group_key(passphrase));
    let cipher = XChaCha20Poly1305::new((&*key).into());

    let Ok(ciphertext) = cipher.encrypt(XNonce::from_slice(&nonce), plaintext.as_bytes()) else {
        unreachable!("XChaCha20-Poly1305 encryption cannot fail with valid inputs");
    };

    let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);

    STANDARD.encode(payload)
}

/// Open an armored ciphertext, reporting typed failures.
///
/// # Errors
///
/// - [`CipherError::EmptyKey`]: passphrase is empty after trimming
/// - [`CipherError::InvalidEncoding`]: armor is not valid base64
/// - [`CipherError::Truncated`]: payload shorter than nonce + tag
/// - [`CipherError::AuthenticationFailed`]: wrong passphrase or tampered
///   ciphertext
/// - [`CipherError::InvalidPlaintext`]: decrypted bytes are not UTF-8
pub fn try_open(armored: &str, passphrase: &str) -> Result<String, CipherError> {
    if passphrase.trim().is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let payload =
        STANDARD.decode(armored).map_err(|e| CipherError::InvalidEncoding(e.to_string()))?;

    if payload.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CipherError::Truncated { len: payload.len(), min: NONCE_SIZE + TAG_SIZE });
    }

    let (nonce, ciphertext) = payload.split_at(NONCE_SIZE);

    let key = Zeroizing::new(derive_group_key(passphrase));
    let cipher = XChaCha20Poly1305::new((&*key).into());

    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce), ciphertext)
        .map_err(|_| CipherError::AuthenticationFailed)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidPlaintext)
}

/// Open an armored ciphertext, collapsing every failure into `""`.
///
/// This is the simulation's read path: an empty result means either
/// "could not decrypt" (wrong or rotated key, malformed armor, empty
/// passphrase) or "the plaintext was empty", and callers cannot tell the
/// two apart through this function. Use [`try_open`] for diagnostics.
pub fn open(armored: &str, passphrase: &str) -> String {
    try_open(armored, passphrase).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONCE: [u8; NONCE_SIZE] = [0xAB; NONCE_SIZE];

    #[test]
    fn seal_open_roundtrip() {
        let sealed = seal("Hello, World!", "group-secret-123", NONCE);
        let opened = open(&sealed, "group-secret-123");

        assert_eq!(opened, "Hello, World!");
    }

    #[test]
    fn seal_open_empty_plaintext() {
        let sealed = seal("", "group-secret-123", NONCE);

        // Indistinguishable from failure through open(); try_open resolves it
        assert_eq!(open(&sealed, "group-secret-123"), "");
        assert_eq!(try_open(&sealed, "group-secret-123"), Ok(String::new()));
    }

    #[test]
    fn seal_open_large_plaintext() {
        let plaintext = "x".repeat(64 * 1024);
        let sealed = seal(&plaintext, "group-secret-123", NONCE);

        assert_eq!(open(&sealed, "group-secret-123"), plaintext);
    }

    #[test]
    fn seal_open_unicode_plaintext() {
        let sealed = seal("héllo wörld 🔑", "group-secret-123", NONCE);

        assert_eq!(open(&sealed, "group-secret-123"), "héllo wörld 🔑");
    }

    #[test]
    fn wrong_key_fails_open() {
        let sealed = seal("secret message", "group-secret-123", NONCE);

        assert_eq!(open(&sealed, "rotated-a1b2c3"), "");
        assert_eq!(try_open(&sealed, "rotated-a1b2c3"), Err(CipherError::AuthenticationFailed));
    }

    #[test]
    fn empty_key_fails_open() {
        let sealed = seal("secret message", "group-secret-123", NONCE);

        assert_eq!(try_open(&sealed, ""), Err(CipherError::EmptyKey));
        assert_eq!(try_open(&sealed, "   "), Err(CipherError::EmptyKey));
        assert_eq!(open(&sealed, ""), "");
    }

    #[test]
    fn garbage_armor_fails_open() {
        assert!(matches!(
            try_open("not base64 at all!", "group-secret-123"),
            Err(CipherError::InvalidEncoding(_))
        ));
        assert_eq!(open("not base64 at all!", "group-secret-123"), "");
    }

    #[test]
    fn truncated_payload_fails_open() {
        // Valid base64, but far too short to hold nonce + tag
        let short = STANDARD.encode([0u8; 10]);

        assert_eq!(
            try_open(&short, "group-secret-123"),
            Err(CipherError::Truncated { len: 10, min: NONCE_SIZE + TAG_SIZE })
        );
    }

    #[test]
    fn tampered_ciphertext_fails_open() {
        let sealed = seal("original message", "group-secret-123", NONCE);

        let mut payload = STANDARD.decode(&sealed).unwrap();
        let last = payload.len() - 1;
        payload[last] ^= 0xFF;
        let tampered = STANDARD.encode(payload);

        assert_eq!(
            try_open(&tampered, "group-secret-123"),
            Err(CipherError::AuthenticationFailed)
        );
    }

    #[test]
    fn different_nonces_produce_different_ciphertexts() {
        let sealed1 = seal("same message", "group-secret-123", [0x00; NONCE_SIZE]);
        let sealed2 = seal("same message", "group-secret-123", [0xFF; NONCE_SIZE]);

        assert_ne!(sealed1, sealed2);
        // Both still open to the same plaintext
        assert_eq!(open(&sealed1, "group-secret-123"), "same message");
        assert_eq!(open(&sealed2, "group-secret-123"), "same message");
    }

    #[test]
    fn armor_shape_is_nonce_plus_ciphertext_plus_tag() {
        let plaintext = "test message";
        let sealed = seal(plaintext, "group-secret-123", NONCE);

        let payload = STANDARD.decode(&sealed).unwrap();
        assert_eq!(payload.len(), NONCE_SIZE + plaintext.len() + TAG_SIZE);
        assert_eq!(&payload[..NONCE_SIZE], &NONCE);
    }
}
