//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, route guarding, order
//! fragments) while reading session state from Leptos context.

pub mod navbar;
pub mod order_summary;
pub mod protected_route;
