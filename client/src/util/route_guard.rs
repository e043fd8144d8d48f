//! Access decision for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure function of [`AuthState`] so every protected route applies the same
//! rules; `components::protected_route` turns the outcome into markup and
//! navigation.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::auth::AuthState;

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Application home.
pub const HOME_PATH: &str = "/";

/// Who may see a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Any signed-in user.
    #[default]
    Authenticated,
    /// Signed-in users with the admin role.
    AdminOnly,
}

/// What the guard does for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session bootstrap still running: show a placeholder, do not redirect.
    Pending,
    /// Show the guarded content unchanged.
    Render,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Decide access for `state` under `access`.
pub fn evaluate(state: &AuthState, access: Access) -> GuardOutcome {
    if state.loading() {
        return GuardOutcome::Pending;
    }
    if !state.is_authenticated() {
        return GuardOutcome::Redirect(LOGIN_PATH);
    }
    if access == Access::AdminOnly && !state.is_admin() {
        return GuardOutcome::Redirect(HOME_PATH);
    }
    GuardOutcome::Render
}
