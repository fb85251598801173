//! # Domain Model
//!
//! Core data structures for inkpad: [`User`], [`Note`], [`SortOption`], and
//! [`UserPreferences`].
//!
//! ## Wire format
//!
//! Every persisted record uses camelCase field names and epoch-millisecond
//! timestamps, matching the key/value layout documented in [`crate::store`]:
//!
//! ```json
//! {"id":"…","title":"Groceries","body":"milk","imageUri":null,
//!  "createdAt":1714060800000,"updatedAt":1714060800000}
//! ```
//!
//! ## Identity rules
//!
//! - `User.username` is the unique, case-sensitive account identifier and is
//!   immutable once created. Uniqueness is enforced by
//!   [`crate::store::user_store::CredentialStore`].
//! - `Note.id` is an opaque string, assigned once at creation and never
//!   reused within a user's collection. The repository accepts any id the
//!   caller hands it; the editing workflow ([`crate::editor`]) generates
//!   fresh UUIDs for new notes.
//! - `Note.created_at` is set once; `Note.updated_at` is restamped on every
//!   save. Both duties lie with the caller — the repository persists notes
//!   as given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current time truncated to the millisecond resolution the wire format
/// stores, so a timestamp read back compares equal to the one written.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// A registered account. The password is stored only as a hash
/// (see [`crate::password`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password_hash: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// A single note, owned by exactly one user.
///
/// `image_uri`, when present, points at a file inside the asset directory
/// managed by [`crate::assets::AssetStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// List ordering applied by the presentation layer (see [`crate::query`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl Default for SortOption {
    fn default() -> Self {
        Self::Newest
    }
}

/// Per-user settings, persisted under `user_preferences_<username>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub sort_option: SortOption,
}
