//! Error types for the groupseal core.
//!
//! Validation failures at the send boundary are the only error channel in
//! the simulation. Decryption failure is deliberately NOT an error: reads
//! report it through the empty-string sentinel in
//! [`crate::DecryptView`], mirroring the system being simulated.

use thiserror::Error;

/// Errors rejecting a send before anything is sealed or stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// No participant is active to send as.
    #[error("no active sender")]
    NoActiveSender,

    /// The group key is empty; nothing can be sealed.
    #[error("no group key set")]
    NoKey,

    /// The message is empty after trimming.
    #[error("empty message")]
    EmptyMessage,
}
