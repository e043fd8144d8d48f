//! # pedidos-client
//!
//! Leptos + WASM frontend for the Pedidos order-management system.
//!
//! This crate contains pages, components, the client session state, and a
//! thin GraphQL client. All business rules (credentials, stock, order
//! totals) live behind the remote GraphQL API; this crate only renders,
//! validates forms, and keeps the browser session in sync with
//! `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
