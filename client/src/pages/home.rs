//! Landing page: greeting for signed-in users, entry links for guests.

use leptos::prelude::*;

use crate::util::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let identity = move || auth.with(|a| a.user().map(|u| (u.username.clone(), u.role.as_str())));

    view! {
        <div class="home-page">
            <div class="hero">
                <h1>"Welcome to Pedidos"</h1>
                <p>"Order management over GraphQL"</p>
                <Show
                    when=move || !auth.with(|a| a.loading())
                    fallback=|| view! { <div class="loading-spinner"></div> }
                >
                    {move || match identity() {
                        Some((name, role)) => view! {
                            <div class="user-info">
                                <p>"Hello, " <strong>{name}</strong> "!"</p>
                                <p>"Your role: " <strong>{role}</strong></p>
                                <div class="quick-links">
                                    <a href="/products" class="btn-primary">"Browse Products"</a>
                                    <a href="/orders" class="btn-secondary">"My Orders"</a>
                                </div>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="guest-info">
                                <p>"Please sign in or register to continue"</p>
                                <div class="quick-links">
                                    <a href="/login" class="btn-primary">"Sign In"</a>
                                    <a href="/register" class="btn-secondary">"Register"</a>
                                </div>
                            </div>
                        }
                        .into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}
