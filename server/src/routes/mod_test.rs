use super::*;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use crate::config::HostConfig;

fn test_state() -> AppState {
    AppState::new(HostConfig {
        port: 0,
        graphql_upstream: "http://127.0.0.1:9".into(),
        upstream_timeout: Duration::from_secs(1),
    })
    .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = api_routes(test_state())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn graphql_route_rejects_get() {
    let response = api_routes(test_state())
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let response = api_routes(test_state())
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/graphql")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}

#[tokio::test]
async fn redirect_home_targets_root() {
    let response = axum::response::IntoResponse::into_response(redirect_home().await);
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}
