//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared
//! rendering details to `components`.

pub mod admin;
pub mod home;
pub mod login;
pub mod orders;
pub mod products;
pub mod register;
