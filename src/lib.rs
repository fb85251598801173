//! # Inkpad Architecture
//!
//! Inkpad is the **account and persistence core** of a personal
//! note-taking app: users register, log in, and manage a private
//! collection of notes, each optionally paired with an image. Screens,
//! navigation and rendering belong to the host UI — this crate owns the
//! invariants underneath them: unique usernames, correct authentication,
//! per-user data isolation, and stable note identity across edits.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Host UI (external)                                      │
//! │  - screens, navigation, dialogs                          │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Facade & workflows (api, auth, editor, query)           │
//! │  - login/logout/sign-up, session observers               │
//! │  - draft validation, id/timestamp duties, image ordering │
//! │  - search and sort for display                           │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Domain stores (store/user_store, note_store, pref_store)│
//! │  - whole-collection rewrite per key                      │
//! │  - total functions: failures log + flatten to booleans   │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Key/value backend (store/backend trait)                 │
//! │  - FsBackend (production), MemBackend (testing)          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`assets::AssetStore`] sits beside the key/value path: images are plain
//! files in a dedicated directory, referenced from notes by path.
//!
//! ## Failure contract
//!
//! Inside the crate, fallible code returns [`error::Result`] and
//! propagates with `?`. At the public store surface every failure is
//! logged (`tracing`) and flattened to the documented boolean, `None`, or
//! default value — callers never see an error type and collections are
//! never observable in a half-written state.
//!
//! ## Concurrency
//!
//! One logical flow at a time, as the host serializes UI-triggered calls.
//! Stores take `&self` and do no locking; overlapping writes to the same
//! key are last-write-wins over the whole collection.
//!
//! ## Module Overview
//!
//! - [`api`]: facade bundling the stores over one backend
//! - [`auth`]: session manager, sign-up rules, session observers
//! - [`editor`]: note editing workflow
//! - [`query`]: search filter and sort orders
//! - [`store`]: key/value backends and the domain stores
//! - [`assets`]: image asset import and cleanup
//! - [`model`]: core data types (`User`, `Note`, preferences)
//! - [`password`]: Argon2id hashing
//! - [`config`]: data-directory configuration
//! - [`error`]: error types

pub mod api;
pub mod assets;
pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod password;
pub mod query;
pub mod store;
