//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `order_draft`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod order_draft;
