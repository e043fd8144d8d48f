//! Typed GraphQL operations for auth, products, and orders.
//!
//! Each method wraps one document from [`super::documents`] and unwraps the
//! operation's root field. The session token is attached as a bearer
//! credential; the upstream service decides what it authorizes.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::documents;
use super::graphql::{ApiError, execute};
use super::types::{AuthPayload, Order, OrderInput, OrderStatus, Product, ProductInput};
use crate::state::auth::AuthState;

/// Handle for issuing operations on behalf of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    token: Option<String>,
}

/// Result of `updateOrderStatus`, which only echoes id and status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderStatusChange {
    #[serde(deserialize_with = "super::types::deserialize_id")]
    pub id: String,
    pub status: OrderStatus,
}

impl ApiClient {
    /// Client without credentials (login, registration).
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Client carrying the session token of `state`, if any.
    pub fn for_session(state: &AuthState) -> Self {
        Self { token: state.token().map(str::to_owned) }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn run<V: Serialize, T: DeserializeOwned>(&self, document: &str, variables: &V) -> Result<T, ApiError> {
        execute(document, variables, self.token()).await
    }

    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    /// `login(username, password)`.
    ///
    /// # Errors
    ///
    /// Returns the upstream error message for bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let data: LoginData = self.run(documents::LOGIN, &Credentials { username, password }).await?;
        Ok(data.login)
    }

    /// `register(username, password)`; returns the server's confirmation text.
    ///
    /// # Errors
    ///
    /// Returns the upstream error message (e.g. duplicate username).
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let data: RegisterData = self.run(documents::REGISTER, &Credentials { username, password }).await?;
        Ok(data.register)
    }

    /// `registerAdmin(username, password, adminToken)`.
    ///
    /// # Errors
    ///
    /// Returns the upstream error message (e.g. invalid admin token).
    pub async fn register_admin(&self, username: &str, password: &str, admin_token: &str) -> Result<String, ApiError> {
        let variables = AdminCredentials { username, password, admin_token };
        let data: RegisterAdminData = self.run(documents::REGISTER_ADMIN, &variables).await?;
        Ok(data.register_admin)
    }

    /// `logout(token)`: asks the server to invalidate `token`.
    ///
    /// # Errors
    ///
    /// Returns transport or upstream errors; callers clear the local session regardless.
    pub async fn logout(&self, token: &str) -> Result<bool, ApiError> {
        let data: LogoutData = self.run(documents::LOGOUT, &TokenVariables { token }).await?;
        Ok(data.logout)
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// List every product.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let data: ProductsData = self.run(documents::PRODUCTS, &NoVariables {}).await?;
        Ok(data.products)
    }

    /// Fetch one product, `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn product(&self, id: &str) -> Result<Option<Product>, ApiError> {
        let data: ProductData = self.run(documents::PRODUCT, &IdVariables { id }).await?;
        Ok(data.product)
    }

    /// Create a product (admin).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let data: CreateProductData = self.run(documents::CREATE_PRODUCT, &InputVariables { input }).await?;
        Ok(data.create_product)
    }

    /// Replace a product's fields (admin).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_product(&self, id: &str, input: &ProductInput) -> Result<Product, ApiError> {
        let variables = IdInputVariables { id, input };
        let data: UpdateProductData = self.run(documents::UPDATE_PRODUCT, &variables).await?;
        Ok(data.update_product)
    }

    /// Delete a product (admin).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete_product(&self, id: &str) -> Result<bool, ApiError> {
        let data: DeleteProductData = self.run(documents::DELETE_PRODUCT, &IdVariables { id }).await?;
        Ok(data.delete_product)
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Orders placed by the signed-in user.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        let data: MyOrdersData = self.run(documents::MY_ORDERS, &NoVariables {}).await?;
        Ok(data.my_orders)
    }

    /// Every order in the system (admin).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn all_orders(&self) -> Result<Vec<Order>, ApiError> {
        let data: AllOrdersData = self.run(documents::ALL_ORDERS, &NoVariables {}).await?;
        Ok(data.all_orders)
    }

    /// Fetch one order, `None` when it does not exist or is not visible.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn order(&self, id: &str) -> Result<Option<Order>, ApiError> {
        let data: OrderData = self.run(documents::ORDER, &IdVariables { id }).await?;
        Ok(data.order)
    }

    /// Place an order. The server computes prices and the total.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create_order(&self, input: &OrderInput) -> Result<Order, ApiError> {
        let data: CreateOrderData = self.run(documents::CREATE_ORDER, &InputVariables { input }).await?;
        Ok(data.create_order)
    }

    /// Move an order to `status` (admin).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<OrderStatusChange, ApiError> {
        let variables = StatusVariables { id, status };
        let data: UpdateOrderStatusData = self.run(documents::UPDATE_ORDER_STATUS, &variables).await?;
        Ok(data.update_order_status)
    }
}

// =============================================================================
// VARIABLES
// =============================================================================

#[derive(Serialize)]
struct NoVariables {}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AdminCredentials<'a> {
    username: &'a str,
    password: &'a str,
    #[serde(rename = "adminToken")]
    admin_token: &'a str,
}

#[derive(Serialize)]
struct TokenVariables<'a> {
    token: &'a str,
}

#[derive(Serialize)]
struct IdVariables<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct InputVariables<'a, I> {
    input: &'a I,
}

#[derive(Serialize)]
struct IdInputVariables<'a, I> {
    id: &'a str,
    input: &'a I,
}

#[derive(Serialize)]
struct StatusVariables<'a> {
    id: &'a str,
    status: OrderStatus,
}

// =============================================================================
// RESPONSE ROOTS
// =============================================================================

#[derive(Deserialize)]
struct LoginData {
    login: AuthPayload,
}

#[derive(Deserialize)]
struct RegisterData {
    register: String,
}

#[derive(Deserialize)]
struct RegisterAdminData {
    #[serde(rename = "registerAdmin")]
    register_admin: String,
}

#[derive(Deserialize)]
struct LogoutData {
    logout: bool,
}

#[derive(Deserialize)]
struct ProductsData {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductData {
    product: Option<Product>,
}

#[derive(Deserialize)]
struct CreateProductData {
    #[serde(rename = "createProduct")]
    create_product: Product,
}

#[derive(Deserialize)]
struct UpdateProductData {
    #[serde(rename = "updateProduct")]
    update_product: Product,
}

#[derive(Deserialize)]
struct DeleteProductData {
    #[serde(rename = "deleteProduct")]
    delete_product: bool,
}

#[derive(Deserialize)]
struct MyOrdersData {
    #[serde(rename = "myOrders")]
    my_orders: Vec<Order>,
}

#[derive(Deserialize)]
struct AllOrdersData {
    #[serde(rename = "allOrders")]
    all_orders: Vec<Order>,
}

#[derive(Deserialize)]
struct OrderData {
    order: Option<Order>,
}

#[derive(Deserialize)]
struct CreateOrderData {
    #[serde(rename = "createOrder")]
    create_order: Order,
}

#[derive(Deserialize)]
struct UpdateOrderStatusData {
    #[serde(rename = "updateOrderStatus")]
    update_order_status: OrderStatusChange,
}
