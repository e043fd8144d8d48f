//! Leptos bindings for the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root provides one `RwSignal<AuthState>`; components read it with
//! [`use_auth`] and change it only through [`login`] and [`logout`], each a
//! single signal update so readers never observe a token without its user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::{AuthError, AuthState};
use crate::util::storage::BrowserStorage;

/// Create the session context and schedule the browser-side bootstrap.
///
/// The signal starts in the loading state. The effect only runs in the
/// browser after hydration, where it restores the session from
/// `localStorage` exactly once.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::bootstrapping());
    provide_context(auth);

    Effect::new(move || {
        let restored = AuthState::initialize(&BrowserStorage);
        leptos::logging::log!("session restored: authenticated={}", restored.is_authenticated());
        auth.set(restored);
    });

    auth
}

/// Session context provided by the app root.
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Start a session in one state transition.
///
/// # Errors
///
/// See [`AuthState::login`].
pub fn login(auth: RwSignal<AuthState>, token: String, user: User) -> Result<(), AuthError> {
    auth.try_update(|state| state.login(&BrowserStorage, token, user))
        .unwrap_or(Err(AuthError::Disposed))
}

/// Clear the session in one state transition.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(|state| state.logout(&BrowserStorage));
}
