//! Groupseal Cryptographic Primitives
//!
//! Symmetric sealing for the groupseal simulation. Pure functions with
//! deterministic outputs. Callers provide random nonce bytes for
//! deterministic testing.
//!
//! # Key Lifecycle
//!
//! Every participant shares a single group passphrase. A 32-byte AEAD key
//! is derived from it on each seal/open call and discarded immediately:
//!
//! ```text
//! Group Passphrase (string)
//!        │
//!        ▼
//! HKDF → 32-byte AEAD key (zeroized after use)
//!        │
//!        ▼
//! XChaCha20-Poly1305 → nonce || ciphertext+tag
//!        │
//!        ▼
//! Base64 armor → ciphertext string
//! ```
//!
//! # Failure Signaling
//!
//! [`try_open`] reports typed [`CipherError`]s. [`open`] collapses every
//! failure mode into an empty string: callers see `""` both for "could not
//! decrypt" and for "plaintext was empty", and the two are not
//! distinguishable through that path. That conflation is the simulation's
//! contract, not an accident; code that needs diagnostics uses
//! [`try_open`] instead.
//!
//! # Security
//!
//! - XChaCha20-Poly1305 AEAD authenticates ciphertexts, so a wrong
//!   passphrase is rejected rather than producing garbage plaintext
//! - Nonces are caller-provided 24-byte values and must be fresh per seal
//! - Derived keys are zeroized after each operation
//! - This is still a simulation: the passphrase itself lives in process
//!   memory as a plain string and there is no key exchange

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod derivation;
mod error;
mod seal;

pub use derivation::derive_group_key;
pub use error::CipherError;
pub use seal::{NONCE_SIZE, TAG_SIZE, open, seal, try_open};
