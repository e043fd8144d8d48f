use super::*;
use crate::net::types::{Role, User};
use crate::util::storage::MemoryStorage;

fn state_with(role: Role) -> AuthState {
    let mut state = AuthState::default();
    let user = User { id: Some("7".to_owned()), username: "ana".to_owned(), role };
    state.login(&MemoryStorage::default(), "tok", user).unwrap();
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn pending_while_loading_for_any_access() {
    let state = AuthState::bootstrapping();
    assert_eq!(evaluate(&state, Access::Authenticated), GuardOutcome::Pending);
    assert_eq!(evaluate(&state, Access::AdminOnly), GuardOutcome::Pending);
}

#[test]
fn pending_even_with_session_while_loading() {
    let mut state = state_with(Role::Admin);
    state.mark_loading();
    assert_eq!(evaluate(&state, Access::AdminOnly), GuardOutcome::Pending);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn unauthenticated_redirects_to_login() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, Access::Authenticated), GuardOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn unauthenticated_admin_route_redirects_to_login() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, Access::AdminOnly), GuardOutcome::Redirect("/login"));
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn user_role_on_admin_route_redirects_home() {
    assert_eq!(evaluate(&state_with(Role::User), Access::AdminOnly), GuardOutcome::Redirect("/"));
}

#[test]
fn admin_role_on_admin_route_renders() {
    assert_eq!(evaluate(&state_with(Role::Admin), Access::AdminOnly), GuardOutcome::Render);
}

#[test]
fn any_role_on_authenticated_route_renders() {
    assert_eq!(evaluate(&state_with(Role::User), Access::Authenticated), GuardOutcome::Render);
    assert_eq!(evaluate(&state_with(Role::Admin), Access::Authenticated), GuardOutcome::Render);
}

#[test]
fn logout_revokes_access() {
    let mut state = state_with(Role::Admin);
    state.logout(&MemoryStorage::default());
    assert_eq!(evaluate(&state, Access::AdminOnly), GuardOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn access_defaults_to_authenticated() {
    assert_eq!(Access::default(), Access::Authenticated);
}
