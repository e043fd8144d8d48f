//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin::AdminDashboardPage, home::HomePage, login::LoginPage, orders::OrdersPage, products::ProductsPage,
    register::RegisterPage,
};
use crate::util::route_guard::{Access, HOME_PATH};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session starts in the loading state on both server and client so the
/// hydrated markup matches; the browser then restores it from storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    crate::util::auth::provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/pedidos.css"/>
        <Title text="Pedidos"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("products")
                            view=|| view! { <ProtectedRoute><ProductsPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("orders")
                            view=|| view! { <ProtectedRoute><OrdersPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| {
                                view! {
                                    <ProtectedRoute access=Access::AdminOnly>
                                        <AdminDashboardPage/>
                                    </ProtectedRoute>
                                }
                            }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
