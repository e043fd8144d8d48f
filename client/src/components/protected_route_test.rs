use std::sync::Arc;

use leptos::tachys::view::RenderHtml;

use super::*;
use crate::net::types::{Role, User};
use crate::state::auth::AuthState;
use crate::util::storage::MemoryStorage;

fn secret_children() -> ChildrenFn {
    Arc::new(|| view! { <p class="secret">"members only"</p> }.into_any())
}

fn render(state: &AuthState, access: Access) -> String {
    let owner = Owner::new();
    owner.set();
    let outcome = Signal::stored(evaluate(state, access));
    guarded_content(outcome, secret_children()).to_html()
}

fn signed_in(role: Role) -> AuthState {
    let store = MemoryStorage::default();
    let mut state = AuthState::initialize(&store);
    state
        .login(&store, "tok", User { id: None, username: "alice".to_owned(), role })
        .unwrap();
    state
}

#[test]
fn bootstrapping_renders_placeholder_only() {
    let html = render(&AuthState::bootstrapping(), Access::Authenticated);
    assert!(html.contains("route-pending"), "{html}");
    assert!(!html.contains("members only"), "{html}");
}

#[test]
fn signed_out_renders_nothing() {
    let html = render(&AuthState::default(), Access::Authenticated);
    assert!(!html.contains("members only"), "{html}");
    assert!(!html.contains("route-pending"), "{html}");
}

#[test]
fn non_admin_on_admin_route_renders_nothing() {
    let html = render(&signed_in(Role::User), Access::AdminOnly);
    assert!(!html.contains("members only"), "{html}");
}

#[test]
fn signed_in_renders_children() {
    let html = render(&signed_in(Role::User), Access::Authenticated);
    assert!(html.contains("members only"), "{html}");
    assert!(!html.contains("route-pending"), "{html}");
}

#[test]
fn admin_renders_admin_children() {
    let html = render(&signed_in(Role::Admin), Access::AdminOnly);
    assert!(html.contains("members only"), "{html}");
}
