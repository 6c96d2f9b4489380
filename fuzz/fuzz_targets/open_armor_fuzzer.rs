//! Fuzz target for opening armored ciphertexts
//!
//! Feeds arbitrary strings through `try_open` and `open` to find:
//! - Panics in base64 decoding or payload splitting
//! - Slice out-of-bounds on short payloads
//! - Non-UTF-8 handling after decryption
//!
//! The open path must NEVER panic: every malformed input maps to a typed
//! error in `try_open` and to the empty-string sentinel in `open`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use groupseal_crypto::{open, try_open};

#[derive(Debug, Arbitrary)]
struct OpenScenario<'a> {
    /// Candidate armored ciphertext (arbitrary, usually malformed)
    armored: &'a str,
    /// Candidate passphrase
    passphrase: &'a str,
}

fuzz_target!(|scenario: OpenScenario<'_>| {
    let result = try_open(scenario.armored, scenario.passphrase);
    let sentinel = open(scenario.armored, scenario.passphrase);

    // The conflating wrapper must agree with the typed path
    match result {
        Ok(plaintext) => assert_eq!(sentinel, plaintext),
        Err(_) => assert_eq!(sentinel, ""),
    }
});
