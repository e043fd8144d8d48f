//! `POST /graphql` reverse proxy to the upstream order API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client always talks to its own origin. This handler forwards
//! the request body and the `Authorization` header upstream unchanged and
//! relays the upstream status and body back. Transport failures become a
//! GraphQL-shaped error document so the client surfaces them like any other
//! API error.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers copied from the browser request to the upstream request.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "errors": [{ "message": self.to_string() }] });
        (self.status(), Json(body)).into_response()
    }
}

/// Subset of `headers` that is forwarded upstream.
pub(crate) fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    if !out.contains_key(header::CONTENT_TYPE) {
        out.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    out
}

pub async fn proxy(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let url = state.config.graphql_url();
    let upstream = state
        .http
        .post(&url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, %url, "graphql upstream request failed"))?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let bytes = upstream.bytes().await?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), "graphql upstream returned non-success status");
    }

    Ok((status, [(header::CONTENT_TYPE, content_type)], Body::from(bytes)).into_response())
}
