//! Minimal GraphQL-over-HTTP transport.
//!
//! Client-side (hydrate): real `POST /graphql` calls via `gloo-net`.
//! Server-side (SSR): `execute` returns [`ApiError::Unavailable`] since
//! data is only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`ApiError`]; views show its `Display`
//! text. GraphQL `errors` entries win over the HTTP status so server-side
//! validation messages reach the user verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Same-origin endpoint; the host server proxies it upstream.
pub const GRAPHQL_ENDPOINT: &str = "/graphql";

/// Errors surfaced by GraphQL operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, serialization).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status without a GraphQL error body.
    #[error("server responded with status {0}")]
    Status(u16),

    /// One or more GraphQL `errors` entries, messages joined with `; `.
    #[error("{0}")]
    GraphQl(String),

    /// The response body was not a valid GraphQL envelope for the operation.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The envelope had neither `errors` nor `data`.
    #[error("response contained no data")]
    MissingData,

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// JSON body of a GraphQL request.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct GraphQlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Decode a GraphQL response body into the operation's `data` type.
///
/// # Errors
///
/// Returns [`ApiError::GraphQl`] when the body carries `errors`,
/// [`ApiError::MissingData`] when `data` is null or absent, and
/// [`ApiError::Parse`] for anything that is not a GraphQL envelope.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: GraphQlResponse<T> = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::GraphQl(message));
    }
    envelope.data.ok_or(ApiError::MissingData)
}

/// `Authorization` header value for a session token, if any.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Map a decoded body plus HTTP status to the final result.
///
/// A body that is not a GraphQL envelope on a failed status reports the
/// status instead of the parse error.
#[cfg(any(test, feature = "hydrate"))]
fn settle<T>(status: u16, decoded: Result<T, ApiError>) -> Result<T, ApiError> {
    match decoded {
        Err(ApiError::Parse(_)) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        other => other,
    }
}

/// Run one GraphQL operation against [`GRAPHQL_ENDPOINT`].
///
/// # Errors
///
/// See [`ApiError`].
pub async fn execute<V, T>(document: &str, variables: &V, token: Option<&str>) -> Result<T, ApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let payload = GraphQlRequest { query: document, variables };
        let mut builder = gloo_net::http::Request::post(GRAPHQL_ENDPOINT);
        if let Some(value) = bearer_header(token) {
            builder = builder.header("Authorization", &value);
        }
        let resp = builder
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let result = settle(status, decode_response(&body));
        if let Err(e) = &result {
            leptos::logging::warn!("graphql request failed: status={status} error={e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (document, variables, token);
        Err(ApiError::Unavailable)
    }
}
