//! Passphrase-to-key derivation using HKDF

use hkdf::Hkdf;
use sha2::Sha256;

/// Label used for group key derivation
const GROUP_KEY_LABEL: &[u8] = b"groupsealKeyV1";

/// Derive a 32-byte AEAD key from the shared group passphrase.
///
/// The passphrase is used verbatim: `"key"` and `"key "` derive different
/// keys. Whitespace policy belongs to the caller, which gates on trimmed
/// input before sealing.
///
/// # Security
///
/// - Different passphrases produce different keys (up to HKDF collision)
/// - Deterministic: same passphrase always produces the same key
/// - This is derivation, not stretching; there is no salt or work factor
///   because the simulation has no at-rest secrets to protect
pub fn derive_group_key(passphrase: &str) -> [u8; 32] {
    let hkdf = Hkdf::<Sha256>::new(None, passphrase.as_bytes());

    let mut key = [0u8; 32];
    let Ok(()) = hkdf.expand(GROUP_KEY_LABEL, &mut key) else {
        unreachable!("32 bytes is a valid HKDF-SHA256 output length");
    };

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_produces_32_byte_key() {
        let key = derive_group_key("group-secret-123");
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn derive_is_deterministic() {
        let key1 = derive_group_key("group-secret-123");
        let key2 = derive_group_key("group-secret-123");

        assert_eq!(key1, key2, "same passphrase must produce same key");
    }

    #[test]
    fn different_passphrases_produce_different_keys() {
        let key_a = derive_group_key("group-secret-123");
        let key_b = derive_group_key("rotated-a1b2c3");

        assert_ne!(key_a, key_b, "different passphrases must produce different keys");
    }

    #[test]
    fn whitespace_is_significant() {
        let key_a = derive_group_key("key");
        let key_b = derive_group_key("key ");

        assert_ne!(key_a, key_b);
    }

    #[test]
    fn works_with_empty_passphrase() {
        // Derivation itself accepts empty input; the open path rejects it
        let key = derive_group_key("");
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn works_with_long_passphrase() {
        let long = "x".repeat(4096);
        let key = derive_group_key(&long);
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn works_with_unicode_passphrase() {
        let key_a = derive_group_key("clé-du-groupe");
        let key_b = derive_group_key("cle-du-groupe");

        assert_ne!(key_a, key_b);
    }
}
