//! Randomness seam for deterministic testing.
//!
//! Decouples rotation and nonce generation from ambient entropy. Tests use
//! [`StepRandom`] to assert properties like "a rotated key differs from
//! the old key" without depending on true randomness; production uses
//! [`OsRandom`].

use rand::RngCore;

/// Abstract source of random bytes.
///
/// The only system resource this simulation touches. Implementations MUST
/// produce bytes that do not repeat across successive calls within a
/// session; cryptographic strength is required in production
/// ([`OsRandom`]) but not in tests.
pub trait RandomSource {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&mut self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    ///
    /// Convenience for key-rotation suffixes and other small values.
    fn random_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}

/// Operating-system entropy via `rand::rngs::OsRng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn random_bytes(&mut self, buffer: &mut [u8]) {
        rand::rngs::OsRng.fill_bytes(buffer);
    }
}

/// Deterministic counter-based source for tests.
///
/// Emits a strictly increasing byte stream, so successive draws never
/// collide and every test run sees the same sequence.
#[derive(Debug, Clone, Default)]
pub struct StepRandom {
    counter: u64,
}

impl StepRandom {
    /// Create a source starting from the given counter value.
    pub fn new(start: u64) -> Self {
        Self { counter: start }
    }
}

impl RandomSource for StepRandom {
    fn random_bytes(&mut self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_mut(8) {
            self.counter = self.counter.wrapping_add(1);
            let bytes = self.counter.to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
