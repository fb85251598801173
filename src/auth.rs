//! # Session/Auth Façade
//!
//! [`SessionManager`] composes the [`CredentialStore`] primitives into the
//! operations the UI actually calls: `login`, `logout`, `sign_up`,
//! `is_logged_in`, `current_user`. The session pointer is persisted, so a
//! logged-in user stays logged in across restarts; reading it at startup is
//! how the host decides its initial route.
//!
//! Interested observers can [`subscribe`](SessionManager::subscribe) to
//! session changes. Listeners run synchronously, in registration order, on
//! every successful login, successful sign-up, and logout, and receive the
//! new authenticated state. The fan-out carries no ordering guarantee
//! relative to whatever navigation the host performs afterwards.
//!
//! Sign-up also carries the account-creation rules the registry itself does
//! not enforce: usernames are trimmed and must be at least 3 characters,
//! passwords at least 4.

use crate::store::backend::KeyValueStore;
use crate::store::user_store::CredentialStore;
use thiserror::Error;

/// Handle returned by [`SessionManager::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

/// Why a sign-up attempt was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpError {
    #[error("username is required")]
    UsernameRequired,

    #[error("username must be at least 3 characters")]
    UsernameTooShort,

    #[error("password is required")]
    PasswordRequired,

    #[error("password must be at least 4 characters")]
    PasswordTooShort,

    #[error("username is already taken")]
    UsernameTaken,
}

/// Coarse password quality rating shown during sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Rate a password by length: under 4 is weak, under 8 medium, 8 and up
/// strong. Empty input has no rating.
pub fn password_strength(password: &str) -> Option<PasswordStrength> {
    match password.chars().count() {
        0 => None,
        1..=3 => Some(PasswordStrength::Weak),
        4..=7 => Some(PasswordStrength::Medium),
        _ => Some(PasswordStrength::Strong),
    }
}

/// Check the sign-up form rules. The trimmed username is what gets
/// registered.
pub fn validate_sign_up(username: &str, password: &str) -> Result<(), SignUpError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(SignUpError::UsernameRequired);
    }
    if username.chars().count() < 3 {
        return Err(SignUpError::UsernameTooShort);
    }
    if password.trim().is_empty() {
        return Err(SignUpError::PasswordRequired);
    }
    if password.chars().count() < 4 {
        return Err(SignUpError::PasswordTooShort);
    }
    Ok(())
}

pub struct SessionManager<S: KeyValueStore> {
    credentials: CredentialStore<S>,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(bool)>)>,
    next_subscription: SubscriptionId,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(credentials: CredentialStore<S>) -> Self {
        Self {
            credentials,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Verify credentials and, on success, persist the session and notify
    /// listeners. A failed login leaves the previous session untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if !self.credentials.verify_credentials(username, password) {
            return false;
        }
        self.credentials.set_session(Some(username));
        self.notify(true);
        true
    }

    /// Clear the session and notify listeners.
    pub fn logout(&mut self) {
        self.credentials.set_session(None);
        self.notify(false);
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn current_user(&self) -> Option<String> {
        self.credentials.get_session()
    }

    /// Validate the form rules, create the account, and log the new user
    /// straight in.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<(), SignUpError> {
        validate_sign_up(username, password)?;

        let username = username.trim();
        if !self.credentials.register_user(username, password) {
            return Err(SignUpError::UsernameTaken);
        }
        self.credentials.set_session(Some(username));
        self.notify(true);
        Ok(())
    }

    /// Register a listener for session changes. Listeners are invoked in
    /// registration order with the new authenticated state.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove the listener registered under `id`. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Direct access to the underlying credential store.
    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    fn notify(&mut self, authenticated: bool) {
        for (_, listener) in &mut self.listeners {
            listener(authenticated);
        }
    }
}
