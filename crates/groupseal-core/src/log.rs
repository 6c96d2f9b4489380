//! Append-only message log.
//!
//! Each record snapshots the key used at send time alongside the
//! ciphertext. Reads never cache decryption: [`MessageLog::view_with_current_key`]
//! re-opens the stored ciphertext under whatever key is passed in, so key
//! rotations that happen after a send are visible on the next read.

use groupseal_crypto::{NONCE_SIZE, open, seal};

use crate::{env::RandomSource, error::SendError, key_manager::redact_key};

/// A sealed chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Monotonic sequence number, unique within the log
    id: u64,
    /// Name of the sender at creation time (not re-validated later)
    sender: String,
    /// Original text, retained for the simulation's side-by-side display
    plaintext: String,
    /// Armored ciphertext sealed under the key active at creation time
    ciphertext: String,
    /// Result of re-opening the ciphertext immediately after sealing
    decrypted_at_send: String,
    /// Snapshot of the key string used to seal; never a live reference
    key_at_send: String,
}

impl Message {
    /// Monotonic, unique message id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Sender name recorded at creation time.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Original plaintext.
    ///
    /// Retained only so the simulation can show stored and recomputed
    /// decryption side by side; a production design would not keep this.
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    /// Armored ciphertext.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// What the ciphertext opened to at send time, under the key it was
    /// sealed with. Stored independently of the plaintext rather than
    /// aliased from it.
    pub fn decrypted_at_send(&self) -> &str {
        &self.decrypted_at_send
    }

    /// Full key used at send time. For sealing comparisons only;
    /// presentation layers render [`key_preview`](Self::key_preview).
    pub fn key_at_send(&self) -> &str {
        &self.key_at_send
    }

    /// Redacted form of the key used at send time (prefix + mask), in the
    /// same format as `KeyManager::preview`.
    pub fn key_preview(&self) -> String {
        redact_key(&self.key_at_send)
    }
}

/// Decryption of a stored message under the currently active key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptView {
    /// Recovered plaintext, or `""` when decryption failed
    pub text: String,
    /// True exactly when `text` is empty
    pub failed: bool,
}

/// Append-only, newest-first log of sealed messages.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seal and store a new message.
    ///
    /// Fails fast on empty (trimmed) sender, key, or plaintext; callers
    /// normally gate on these before invoking, and nothing is stored when
    /// the gate is violated. The plaintext is trimmed before sealing. The
    /// new message is prepended, keeping the log newest-first.
    ///
    /// # Errors
    ///
    /// - [`SendError::NoActiveSender`]: sender is empty after trimming
    /// - [`SendError::NoKey`]: key is empty after trimming
    /// - [`SendError::EmptyMessage`]: plaintext is empty after trimming
    pub fn send<R: RandomSource>(
        &mut self,
        sender: &str,
        plaintext: &str,
        key: &str,
        rng: &mut R,
    ) -> Result<&Message, SendError> {
        let sender = sender.trim();
        if sender.is_empty() {
            return Err(SendError::NoActiveSender);
        }
        if key.trim().is_empty() {
            return Err(SendError::NoKey);
        }
        let plaintext = plaintext.trim();
        if plaintext.is_empty() {
            return Err(SendError::EmptyMessage);
        }

        let mut nonce = [0u8; NONCE_SIZE];
        rng.random_bytes(&mut nonce);

        let ciphertext = seal(plaintext, key, nonce);
        // Recomputed rather than aliased from the plaintext, so the stored
        // at-send observation stays honest even if seal/open ever disagree
        let decrypted_at_send = open(&ciphertext, key);

        self.next_id += 1;
        let message = Message {
            id: self.next_id,
            sender: sender.to_string(),
            plaintext: plaintext.to_string(),
            ciphertext,
            decrypted_at_send,
            key_at_send: key.to_string(),
        };

        self.messages.insert(0, message);
        Ok(&self.messages[0])
    }

    /// Stored messages, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Re-open a stored message under the given key.
    ///
    /// Recomputed on every call, never cached, so the result always
    /// reflects the key passed in. `failed` is true exactly when the
    /// recovered text is empty; an empty plaintext and a failed
    /// decryption are indistinguishable here by design.
    pub fn view_with_current_key(&self, message: &Message, current_key: &str) -> DecryptView {
        let text = open(&message.ciphertext, current_key);
        let failed = text.is_empty();
        DecryptView { text, failed }
    }
}
