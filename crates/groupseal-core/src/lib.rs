//! Groupseal Core
//!
//! State and orchestration for a shared-secret group chat simulation:
//! everyone holds the same group passphrase, messages are sealed at send
//! time, and every read re-opens the stored ciphertext under whatever key
//! is active right now. Rotating the key therefore breaks decryption of
//! older messages, which is the effect the simulation exists to show.
//!
//! # Architecture
//!
//! ```text
//! ChatSession (owned context, single actor)
//!   ├─ ParticipantDirectory (who can send, who is active)
//!   ├─ KeyManager (the one mutable group key)
//!   ├─ MessageLog (append-only sealed records)
//!   └─ RandomSource (injectable entropy for nonces and rotation)
//! ```
//!
//! All mutation goes through [`ChatSession`] methods; there is no global
//! state. Operations are synchronous and take `&mut self`, so the borrow
//! checker enforces the single-writer discipline the shared state needs.
//!
//! Messages retain their plaintext next to the ciphertext. That is the
//! point of the simulation (decrypt success and failure are shown side by
//! side); a production design would store only the ciphertext.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod directory;
mod env;
mod error;
mod key_manager;
mod log;
mod session;

pub use directory::ParticipantDirectory;
pub use env::{OsRandom, RandomSource, StepRandom};
pub use error::SendError;
pub use key_manager::{EMPTY_KEY_PREVIEW, KeyManager, ROTATED_PREFIX};
pub use log::{DecryptView, Message, MessageLog};
pub use session::ChatSession;
