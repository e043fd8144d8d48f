//! GraphQL DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the upstream GraphQL schema (camelCase on the wire).
//! Enumerations are closed: an unknown role or order status fails
//! deserialization instead of producing a half-valid record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Authorization level of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Wire identifier (`"USER"` / `"ADMIN"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as held by the session and persisted under `user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Server-side identifier. The `login` mutation does not return one,
    /// so sessions created by this client carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    /// Login name.
    pub username: String,
    /// Authorization level.
    pub role: Role,
}

/// Result of the `login` mutation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl AuthPayload {
    /// Split into the `(token, user)` pair expected by the session controller.
    pub fn into_session_parts(self) -> (String, User) {
        let user = User { id: None, username: self.username, role: self.role };
        (self.token, user)
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Input for `createProduct` / `updateProduct`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Product reference embedded in order items.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

// =============================================================================
// ORDERS
// =============================================================================

/// Lifecycle status of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [Self::Pending, Self::Confirmed, Self::Shipped, Self::Delivered, Self::Cancelled];

    /// Wire identifier (`"PENDING"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// CSS modifier class used for status badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Confirmed => "status-confirmed",
            Self::Shipped => "status-shipped",
            Self::Delivered => "status-delivered",
            Self::Cancelled => "status-cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner summary attached to orders in admin queries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
}

/// One line of an order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub quantity: u32,
    /// Unit price captured when the order was placed.
    pub price: f64,
    #[serde(default)]
    pub product: Option<ProductRef>,
}

/// An order as returned by `myOrders`, `allOrders`, and `order`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub total: f64,
    pub status: OrderStatus,
    /// Creation timestamp as sent by the server (RFC 3339 or epoch millis).
    #[serde(rename = "createdAt", deserialize_with = "deserialize_id")]
    pub created_at: String,
    #[serde(default)]
    pub user: Option<OrderUser>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Input for `createOrder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderInput {
    pub items: Vec<OrderItemInput>,
}

/// One requested product line in [`OrderInput`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderItemInput {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: u32,
}

// =============================================================================
// ID HELPERS
// =============================================================================

/// GraphQL `ID` values arrive as strings or integers depending on the
/// resolver; normalize both to `String`.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value)
        .map(Some)
        .ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
