//! Networking modules for the GraphQL API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `graphql` handles the HTTP envelope, `documents` holds the operation
//! text, `api` exposes typed operations, and `types` defines the schema DTOs.

pub mod api;
pub mod documents;
pub mod graphql;
pub mod types;
