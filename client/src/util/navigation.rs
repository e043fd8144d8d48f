//! Deferred client-side navigation.
//!
//! Router navigation closures are not `Send`, so views and callbacks do not
//! capture them. They write the target path into a signal instead and an
//! effect owned by the component performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Signal that navigates to the path written into it.
pub fn use_redirect() -> RwSignal<Option<&'static str>> {
    let target = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(path, NavigateOptions::default());
        }
    });
    target
}
