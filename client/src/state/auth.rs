//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is signed in". Views read it through a
//! `RwSignal<AuthState>` context (see `util::auth`); only [`AuthState::login`]
//! and [`AuthState::logout`] mutate it. The durable shadow copy lives in a
//! [`SessionStore`] under the `token` and `user` slots.
//!
//! INVARIANTS
//! ==========
//! - Token and user are set and cleared together: both live in one
//!   `Option<Session>`.
//! - `loading` is true only before [`AuthState::initialize`] has run.
//! - Anything unreadable in storage means "no session" (fail closed).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};
use crate::util::storage::{SessionStore, TOKEN_KEY, USER_KEY};

/// Errors from session transitions.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// `login` was called without a usable credential.
    #[error("session token is empty")]
    EmptyToken,

    /// The session signal was disposed before the transition ran.
    #[error("session context is no longer available")]
    Disposed,

    /// The user record could not be serialized for storage.
    #[error("failed to serialize user record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An authenticated identity plus its credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Authentication state tracking the current session and bootstrap status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    session: Option<Session>,
    loading: bool,
}

impl AuthState {
    /// State before storage has been read.
    pub fn bootstrapping() -> Self {
        Self { session: None, loading: true }
    }

    /// Restore the session persisted in `store`.
    ///
    /// A missing slot, blank token, or user record that fails the strict
    /// schema yields a signed-out state; leftovers of a partial or corrupt
    /// pair are removed so storage agrees with memory.
    pub fn initialize(store: &impl SessionStore) -> Self {
        let token = store.read(TOKEN_KEY).filter(|t| !t.trim().is_empty());
        let raw_user = store.read(USER_KEY);

        let session = match (token, raw_user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(e) => {
                    leptos::logging::warn!("discarding stored session: unreadable user record ({e})");
                    None
                }
            },
            (None, None) => None,
            _ => {
                leptos::logging::warn!("discarding stored session: token/user slots out of sync");
                None
            }
        };

        if session.is_none() {
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
        }

        Self { session, loading: false }
    }

    /// Start a session with credentials already issued by the auth service.
    ///
    /// Persists both slots, then replaces the in-memory session. Makes no
    /// network call.
    ///
    /// # Errors
    ///
    /// [`AuthError::EmptyToken`] for a blank token; state and store are left
    /// untouched.
    pub fn login(&mut self, store: &impl SessionStore, token: impl Into<String>, user: User) -> Result<(), AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }
        let raw_user = serde_json::to_string(&user)?;

        store.write(TOKEN_KEY, &token);
        store.write(USER_KEY, &raw_user);

        self.session = Some(Session { token, user });
        self.loading = false;
        Ok(())
    }

    /// End the session locally. Server-side invalidation is the caller's job.
    pub fn logout(&mut self, store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.session = None;
        self.loading = false;
    }

    /// True until [`AuthState::initialize`] (or a login) has run.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Put a settled state back into bootstrap.
    #[cfg(test)]
    pub(crate) fn mark_loading(&mut self) {
        self.loading = true;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.session.is_some()
    }

    /// True iff bootstrap is done and the session belongs to an admin.
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user().is_some_and(|u| u.role == Role::Admin)
    }
}
