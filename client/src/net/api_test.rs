use super::*;
use crate::net::graphql::decode_response;
use crate::net::types::{OrderItemInput, Role, User};
use crate::util::storage::MemoryStorage;

fn signed_in_state(token: &str) -> AuthState {
    let mut state = AuthState::default();
    let user = User { id: None, username: "ana".to_owned(), role: Role::User };
    state.login(&MemoryStorage::default(), token, user).unwrap();
    state
}

// =============================================================
// ApiClient construction
// =============================================================

#[test]
fn anonymous_client_has_no_token() {
    assert_eq!(ApiClient::anonymous().token(), None);
}

#[test]
fn session_client_carries_session_token() {
    let client = ApiClient::for_session(&signed_in_state("jwt-1"));
    assert_eq!(client.token(), Some("jwt-1"));
}

#[test]
fn session_client_for_signed_out_state_is_anonymous() {
    assert_eq!(ApiClient::for_session(&AuthState::default()), ApiClient::anonymous());
}

// =============================================================
// Variables
// =============================================================

#[test]
fn admin_credentials_use_camel_case_admin_token() {
    let vars = AdminCredentials { username: "root", password: "secret1", admin_token: "t0k" };
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({ "username": "root", "password": "secret1", "adminToken": "t0k" })
    );
}

#[test]
fn status_variables_serialize_wire_status() {
    let vars = StatusVariables { id: "9", status: OrderStatus::Delivered };
    assert_eq!(serde_json::to_value(&vars).unwrap(), serde_json::json!({ "id": "9", "status": "DELIVERED" }));
}

#[test]
fn create_order_variables_nest_input() {
    let input = OrderInput { items: vec![OrderItemInput { product_id: "4".to_owned(), quantity: 2 }] };
    let vars = InputVariables { input: &input };
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({ "input": { "items": [{ "productId": "4", "quantity": 2 }] } })
    );
}

#[test]
fn product_input_keeps_null_description() {
    let input = ProductInput { name: "Mug".to_owned(), description: None, price: 4.5 };
    let vars = IdInputVariables { id: "1", input: &input };
    assert_eq!(
        serde_json::to_value(&vars).unwrap(),
        serde_json::json!({ "id": "1", "input": { "name": "Mug", "description": null, "price": 4.5 } })
    );
}

// =============================================================
// Response roots
// =============================================================

#[test]
fn login_root_decodes_payload() {
    let body = r#"{"data":{"login":{"token":"jwt","username":"ana","role":"ADMIN"}}}"#;
    let data: LoginData = decode_response(body).unwrap();
    assert_eq!(data.login.role, Role::Admin);
    assert_eq!(data.login.token, "jwt");
}

#[test]
fn login_root_surfaces_bad_credentials() {
    let body = r#"{"data":null,"errors":[{"message":"Credenciales inválidas"}]}"#;
    assert_eq!(
        decode_response::<LoginData>(body).err(),
        Some(ApiError::GraphQl("Credenciales inválidas".to_owned()))
    );
}

#[test]
fn products_root_decodes_list() {
    let body = r#"{"data":{"products":[
        {"id":"1","name":"Mug","description":null,"price":4.5},
        {"id":2,"name":"Tee","description":"Cotton","price":12}
    ]}}"#;
    let data: ProductsData = decode_response(body).unwrap();
    assert_eq!(data.products.len(), 2);
    assert_eq!(data.products[1].id, "2");
    assert_eq!(data.products[1].description.as_deref(), Some("Cotton"));
}

#[test]
fn product_root_accepts_null_product() {
    let data: ProductData = decode_response(r#"{"data":{"product":null}}"#).unwrap();
    assert!(data.product.is_none());
}

#[test]
fn create_order_root_decodes_without_items() {
    let body = r#"{"data":{"createOrder":{"id":"11","total":9.0,"status":"PENDING","createdAt":"2024-02-03T04:05:06Z"}}}"#;
    let data: CreateOrderData = decode_response(body).unwrap();
    assert_eq!(data.create_order.id, "11");
    assert!(data.create_order.items.is_empty());
}

#[test]
fn update_order_status_root_decodes_change() {
    let body = r#"{"data":{"updateOrderStatus":{"id":5,"status":"CANCELLED"}}}"#;
    let data: UpdateOrderStatusData = decode_response(body).unwrap();
    assert_eq!(
        data.update_order_status,
        OrderStatusChange { id: "5".to_owned(), status: OrderStatus::Cancelled }
    );
}

#[test]
fn all_orders_root_rejects_unknown_status() {
    let body = r#"{"data":{"allOrders":[{"id":"1","total":1,"status":"LOST","createdAt":"x"}]}}"#;
    assert!(matches!(decode_response::<AllOrdersData>(body), Err(ApiError::Parse(_))));
}

#[test]
fn register_admin_root_decodes_message() {
    let body = r#"{"data":{"registerAdmin":"Administrador registrado"}}"#;
    let data: RegisterAdminData = decode_response(body).unwrap();
    assert_eq!(data.register_admin, "Administrador registrado");
}
