use super::*;

use std::time::Duration;

use axum::Router;
use axum::routing::post;

use crate::config::HostConfig;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn state_for(upstream: &str) -> AppState {
    let config = HostConfig {
        port: 0,
        graphql_upstream: upstream.to_owned(),
        upstream_timeout: Duration::from_secs(5),
    };
    AppState::new(config).unwrap()
}

/// Fake upstream that echoes the request body and the bearer header.
async fn spawn_upstream(status: StatusCode) -> String {
    let app = Router::new().route(
        "/graphql",
        post(move |headers: HeaderMap, body: Bytes| async move {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_owned();
            let query: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
            (status, Json(serde_json::json!({ "data": { "auth": auth, "echo": query } })))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

// =============================================================================
// forwarded_headers
// =============================================================================

#[test]
fn forwarded_headers_keeps_auth_and_content_type() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json; charset=utf-8");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn forwarded_headers_defaults_content_type() {
    let out = forwarded_headers(&HeaderMap::new());
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert!(out.get(header::AUTHORIZATION).is_none());
}

// =============================================================================
// ProxyError
// =============================================================================

#[tokio::test]
async fn proxy_error_renders_graphql_error_document() {
    let response = ProxyError::Upstream("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["message"], "upstream request failed: connection refused");
}

#[tokio::test]
async fn proxy_timeout_maps_to_gateway_timeout() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

// =============================================================================
// proxy
// =============================================================================

#[tokio::test]
async fn proxy_forwards_body_and_bearer_token() {
    let upstream = spawn_upstream(StatusCode::OK).await;
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok-1"));
    let body = Bytes::from_static(br#"{"query":"{ products { id } }"}"#);

    let response = proxy(State(state_for(&upstream)), headers, body).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    let json = body_json(response).await;
    assert_eq!(json["data"]["auth"], "Bearer tok-1");
    assert_eq!(json["data"]["echo"]["query"], "{ products { id } }");
}

#[tokio::test]
async fn proxy_relays_upstream_status() {
    let upstream = spawn_upstream(StatusCode::BAD_REQUEST).await;
    let response = proxy(State(state_for(&upstream)), HeaderMap::new(), Bytes::from_static(b"{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["data"]["auth"], "");
}

#[tokio::test]
async fn proxy_unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = proxy(State(state_for(&format!("http://{addr}"))), HeaderMap::new(), Bytes::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ProxyError::Upstream(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}
