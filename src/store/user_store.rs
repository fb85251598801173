//! # Credential Store
//!
//! Owns the user registry (the `users` key) and the session pointer
//! (`current_user`). Registration and verification follow the total-function
//! contract: every failure mode — duplicate username, unknown user, wrong
//! password, storage I/O error, malformed persisted data — flattens to a
//! boolean at the public edge, with the cause logged first.
//!
//! The registry is one JSON array rewritten in full on every change; there
//! is no per-user sub-key.

use super::backend::KeyValueStore;
use crate::error::Result;
use crate::model::{now_millis, User};
use crate::password;
use tracing::warn;

const USERS_KEY: &str = "users";
const CURRENT_USER_KEY: &str = "current_user";

pub struct CredentialStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Register a new account.
    ///
    /// Returns `false` if the username is already taken (exact string
    /// match) or if persisting the registry fails. Never idempotent: a
    /// second call with the same username always returns `false`.
    pub fn register_user(&self, username: &str, password: &str) -> bool {
        match self.try_register(username, password) {
            Ok(registered) => registered,
            Err(e) => {
                warn!("Failed to register user '{}': {}", username, e);
                false
            }
        }
    }

    fn try_register(&self, username: &str, password: &str) -> Result<bool> {
        let mut users = self.load_users()?;
        if users.iter().any(|u| u.username == username) {
            return Ok(false);
        }

        let password_hash = password::hash_password(password)?;
        users.push(User {
            username: username.to_string(),
            password_hash,
            created_at: now_millis(),
        });
        self.store_users(&users)?;
        Ok(true)
    }

    /// Check a username/password pair against the registry.
    ///
    /// Unknown usernames, mismatched passwords, unreadable registries and
    /// malformed stored hashes all come back as `false`.
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        match self.try_verify(username, password) {
            Ok(valid) => valid,
            Err(e) => {
                warn!("Failed to verify credentials for '{}': {}", username, e);
                false
            }
        }
    }

    fn try_verify(&self, username: &str, password: &str) -> Result<bool> {
        let users = self.load_users()?;
        let Some(user) = users.iter().find(|u| u.username == username) else {
            return Ok(false);
        };
        password::verify_password(password, &user.password_hash)
    }

    /// Persist (`Some`) or clear (`None`) the session pointer.
    pub fn set_session(&self, username: Option<&str>) {
        let outcome = match username {
            Some(name) => self.kv.set(CURRENT_USER_KEY, name),
            None => self.kv.remove(CURRENT_USER_KEY),
        };
        if let Err(e) = outcome {
            warn!("Failed to persist session pointer: {}", e);
        }
    }

    /// Read the session pointer. `None` means logged out.
    pub fn get_session(&self) -> Option<String> {
        match self.kv.get(CURRENT_USER_KEY) {
            Ok(session) => session,
            Err(e) => {
                warn!("Failed to read session pointer: {}", e);
                None
            }
        }
    }

    fn load_users(&self) -> Result<Vec<User>> {
        match self.kv.get(USERS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store_users(&self, users: &[User]) -> Result<()> {
        self.kv.set(USERS_KEY, &serde_json::to_string(users)?)
    }
}
