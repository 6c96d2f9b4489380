//! Workspace meta package.
//!
//! Carries workspace-level dev tooling (git hooks); all real code lives in
//! the `crates/` members.
