//! Chat session context object.
//!
//! [`ChatSession`] owns the participant directory, the key manager, the
//! message log, and the randomness seam, and routes every mutation through
//! its methods. It is a pure state container in the sense that it performs
//! no I/O; a presentation layer drives it and renders what it exposes.

use crate::{
    directory::ParticipantDirectory,
    env::{OsRandom, RandomSource},
    error::SendError,
    key_manager::KeyManager,
    log::{DecryptView, Message, MessageLog},
};

/// Participants preloaded by [`ChatSession::seeded`]
const SEED_PARTICIPANTS: [&str; 3] = ["Aman", "Rahul", "Priya"];

/// Group key preloaded by [`ChatSession::seeded`]
const SEED_KEY: &str = "group-secret-123";

/// Owned context for one simulated group chat.
///
/// Single logical actor: all operations are synchronous and mutate through
/// `&mut self`, which serializes them by construction.
#[derive(Debug, Clone)]
pub struct ChatSession<R = OsRandom> {
    directory: ParticipantDirectory,
    keys: KeyManager,
    log: MessageLog,
    rng: R,
}

impl ChatSession<OsRandom> {
    /// Create an empty session backed by OS entropy.
    pub fn with_os_rng() -> Self {
        Self::new(OsRandom)
    }
}

impl Default for ChatSession<OsRandom> {
    fn default() -> Self {
        Self::with_os_rng()
    }
}

impl<R: RandomSource> ChatSession<R> {
    /// Create an empty session: no participants, no key, no messages.
    pub fn new(rng: R) -> Self {
        Self {
            directory: ParticipantDirectory::new(),
            keys: KeyManager::new(),
            log: MessageLog::new(),
            rng,
        }
    }

    /// Create a session preloaded with the demo group: participants Aman,
    /// Rahul, and Priya (Aman active) sharing the key `group-secret-123`.
    pub fn seeded(rng: R) -> Self {
        let mut session = Self::new(rng);
        for name in SEED_PARTICIPANTS {
            session.add_participant(name);
        }
        session.set_active(SEED_PARTICIPANTS[0]);
        session.keys.set_key(SEED_KEY);
        session
    }

    /// Add a participant; the new member becomes the active sender.
    ///
    /// Returns `false` (no mutation) for empty or duplicate names, per
    /// [`ParticipantDirectory::add`].
    pub fn add_participant(&mut self, name: &str) -> bool {
        let added = self.directory.add(name);
        if added {
            tracing::debug!(participant = name.trim(), "participant added");
        }
        added
    }

    /// Make an existing participant the active sender.
    ///
    /// Returns `false` and changes nothing when the name is unknown.
    pub fn set_active(&mut self, name: &str) -> bool {
        self.directory.set_active(name)
    }

    /// Replace the group key unconditionally. An empty string means "no
    /// key" and gates sends off.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.keys.set_key(key);
        tracing::debug!(key = %self.keys.preview(), "group key replaced");
    }

    /// Rotate to a fresh group key and return it.
    ///
    /// Stored messages keep the ciphertext and key snapshot they were
    /// sealed with; after rotation they fail to open under the current
    /// key, which is the effect the simulation demonstrates.
    pub fn rotate_key(&mut self) -> String {
        let new_key = self.keys.rotate(&mut self.rng);
        tracing::info!(key = %self.keys.preview(), "group key rotated");
        new_key
    }

    /// Redacted preview of the current key.
    pub fn key_preview(&self) -> String {
        self.keys.preview()
    }

    /// Whether a usable (non-empty) group key is set.
    pub fn has_key(&self) -> bool {
        self.keys.has_key()
    }

    /// Full current key, for sealing comparisons in tests and demos.
    /// Presentation layers render [`key_preview`](Self::key_preview).
    pub fn current_key(&self) -> &str {
        self.keys.current()
    }

    /// The send gate: an active sender, a usable key, and a non-empty
    /// (trimmed) draft.
    pub fn can_send(&self, draft: &str) -> bool {
        self.directory.active().is_some() && self.keys.has_key() && !draft.trim().is_empty()
    }

    /// Seal the draft as the active participant and append it to the log.
    ///
    /// # Errors
    ///
    /// - [`SendError::NoActiveSender`]: directory is empty
    /// - [`SendError::NoKey`]: key is empty after trimming
    /// - [`SendError::EmptyMessage`]: draft is empty after trimming
    pub fn send(&mut self, draft: &str) -> Result<&Message, SendError> {
        let Some(sender) = self.directory.active() else {
            return Err(SendError::NoActiveSender);
        };

        let message = self.log.send(sender, draft, self.keys.current(), &mut self.rng)?;
        tracing::debug!(id = message.id(), sender = %message.sender(), "message sealed");
        Ok(message)
    }

    /// Stored messages, newest first.
    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    /// Re-open a stored message under the currently active key.
    ///
    /// Recomputed on every call; after a rotation the same message that
    /// once opened cleanly reports `failed`.
    pub fn view(&self, message: &Message) -> DecryptView {
        self.log.view_with_current_key(message, self.keys.current())
    }

    /// Participant directory, read-only.
    pub fn directory(&self) -> &ParticipantDirectory {
        &self.directory
    }
}
