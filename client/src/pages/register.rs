//! Registration page for regular users, plus admin registration when the
//! current session belongs to an admin.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::use_auth;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Validated form values ready for the `register` / `registerAdmin` mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) struct Registration {
    pub username: String,
    pub password: String,
    /// Present only for admin registrations.
    pub admin_token: Option<String>,
}

pub(crate) fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
    as_admin: bool,
    admin_token: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    let admin_token = if as_admin {
        let token = admin_token.trim();
        if token.is_empty() {
            return Err("Admin token is required");
        }
        Some(token.to_owned())
    } else {
        None
    };
    Ok(Registration { username: username.to_owned(), password: password.to_owned(), admin_token })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    #[cfg(feature = "hydrate")]
    let redirect = crate::util::navigation::use_redirect();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let admin_token = RwSignal::new(String::new());
    let as_admin = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let current_is_admin = move || auth.with(crate::state::auth::AuthState::is_admin);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let request = match validate_registration(
            &username.get(),
            &password.get(),
            &confirm_password.get(),
            as_admin.get() && current_is_admin(),
            &admin_token.get(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = auth.with_untracked(crate::net::api::ApiClient::for_session);
            leptos::task::spawn_local(async move {
                let result = match &request.admin_token {
                    Some(token) => client.register_admin(&request.username, &request.password, token).await,
                    None => client.register(&request.username, &request.password).await,
                };
                busy.set(false);
                match result {
                    Ok(_) => {
                        success.set("Registration successful! You can now sign in.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        redirect.set(Some(crate::util::route_guard::LOGIN_PATH));
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <h2>"Register"</h2>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <div class="success-message">{move || success.get()}</div>
                </Show>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            placeholder="Choose a username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirmPassword">"Confirm Password"</label>
                        <input
                            id="confirmPassword"
                            type="password"
                            required
                            placeholder="Repeat your password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=current_is_admin>
                        <div class="form-group checkbox-group">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || as_admin.get()
                                    on:change=move |ev| as_admin.set(event_target_checked(&ev))
                                />
                                "Register as administrator"
                            </label>
                        </div>
                    </Show>
                    <Show when=move || as_admin.get() && current_is_admin()>
                        <div class="form-group">
                            <label for="adminToken">"Admin Token"</label>
                            <input
                                id="adminToken"
                                type="text"
                                placeholder="Enter the admin token"
                                prop:value=move || admin_token.get()
                                on:input=move |ev| admin_token.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !as_admin.get() && !current_is_admin()>
                    <p class="auth-link">
                        "Already have an account? "
                        <A href="/login">"Sign In"</A>
                    </p>
                </Show>
            </div>
        </div>
    }
}
