//! # Storage Layer
//!
//! Everything inkpad persists goes through one seam: the
//! [`backend::KeyValueStore`] trait, a durable mapping from string keys to
//! string values. The domain stores in this module layer record semantics on
//! top of it.
//!
//! ## Key layout
//!
//! | Key | Value | Owner |
//! |-----|-------|-------|
//! | `users` | JSON array of user records | [`user_store::CredentialStore`] |
//! | `current_user` | plain username string, removed on logout | [`user_store::CredentialStore`] |
//! | `user_<username>_notes` | JSON array of note records | [`note_store::NoteRepository`] |
//! | `user_preferences_<username>` | JSON object `{"sortOption": …}` | [`pref_store::PreferenceStore`] |
//!
//! Each key has exactly one owning store; per-user keys embed the username,
//! so one user's data is never reachable through another user's keys.
//!
//! ## Whole-collection rewrite
//!
//! Collections (`users`, each user's notes) are persisted as a single value.
//! Every mutation loads the full collection, edits it in memory, and writes
//! the whole thing back. There is no partial-write mode and no merge: two
//! overlapping writes to the same key are last-write-wins. The host
//! application serializes calls, so the stores do no internal locking.
//!
//! ## Failure contract
//!
//! Backends return [`crate::error::Result`]; the domain stores catch every
//! backend failure, log it via `tracing`, and convert it to the boolean or
//! default-value contract their public operations document. No store
//! operation panics or leaks an error type to the caller.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`] — production backend, one file per key with
//!   atomic writes.
//! - [`mem_backend::MemBackend`] — in-memory backend for tests, with write
//!   failure injection.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;
pub mod pref_store;
pub mod user_store;
