//! Route wrapper that renders its children only for permitted sessions.

#[cfg(all(test, feature = "ssr"))]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::use_auth;
use crate::util::route_guard::{Access, GuardOutcome, evaluate};

/// Guarded view.
///
/// While the session is bootstrapping a neutral placeholder is shown and no
/// redirect happens. Redirects replace the history entry so "back" does not
/// return to the blocked view.
#[component]
pub fn ProtectedRoute(#[prop(optional)] access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let outcome = Memo::new(move |_| evaluate(&auth.get(), access));

    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    guarded_content(outcome.into(), children)
}

/// Markup for the current outcome. A redirect renders nothing, so the
/// children never mount for a refused session.
pub(crate) fn guarded_content(outcome: Signal<GuardOutcome>, children: ChildrenFn) -> impl IntoView {
    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Pending => view! {
            <div class="route-pending">
                <div class="loading-spinner"></div>
            </div>
        }
        .into_any(),
        GuardOutcome::Redirect(_) => ().into_any(),
    }
}
