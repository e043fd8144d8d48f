//! Top navigation bar with session-aware links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible on every route. Guests see login/register links; signed-in users
//! see products and orders, admins additionally the dashboard link.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::use_auth;
use crate::util::navigation::use_redirect;
use crate::util::route_guard::LOGIN_PATH;

/// Application navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let redirect = use_redirect();

    let signed_in = move || auth.with(crate::state::auth::AuthState::is_authenticated);
    let is_admin = move || auth.with(crate::state::auth::AuthState::is_admin);
    let username = move || auth.with(|a| a.user().map(|u| u.username.clone()).unwrap_or_default());

    // Remote invalidation is best effort; the local session is always cleared.
    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let client = auth.with_untracked(crate::net::api::ApiClient::for_session);
            leptos::task::spawn_local(async move {
                if let Some(token) = client.token() {
                    if let Err(e) = client.logout(token).await {
                        leptos::logging::warn!("logout mutation failed: {e}");
                    }
                }
                crate::util::auth::logout(auth);
                redirect.set(Some(LOGIN_PATH));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            crate::util::auth::logout(auth);
            redirect.set(Some(LOGIN_PATH));
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <A href="/">"Pedidos"</A>
            </div>
            <ul class="navbar-menu">
                <Show when=move || !auth.with(|a| a.loading())>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <li>
                                    <A href="/login">"Sign In"</A>
                                </li>
                                <li>
                                    <A href="/register">"Register"</A>
                                </li>
                            }
                        }
                    >
                        <li>
                            <A href="/products">"Products"</A>
                        </li>
                        <li>
                            <A href="/orders">"My Orders"</A>
                        </li>
                        <Show when=is_admin>
                            <li>
                                <A href="/admin">"Admin"</A>
                            </li>
                        </Show>
                        <li class="navbar-user">
                            <span>"Hello, " {username}</span>
                            <button class="btn-logout" on:click=move |_| on_logout.run(())>
                                "Sign Out"
                            </button>
                        </li>
                    </Show>
                </Show>
            </ul>
        </nav>
    }
}
