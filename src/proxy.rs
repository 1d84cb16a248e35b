//! Local development proxy
//!
//! Forwards requests under the fixed API prefixes to a backend process,
//! unmodified apart from the origin: the Host header is dropped so the
//! outgoing request carries the backend's own origin. There is no
//! protocol translation; bodies and statuses pass through both ways.

use crate::config::{API_PREFIX, OPENAPI_PREFIX};
use crate::error::AppError;
use anyhow::anyhow;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use futures_util::TryStreamExt;

/// Shared state for the proxy handler
#[derive(Debug, Clone)]
pub struct ProxyState {
    /// Shared HTTP client used for upstream calls (connection pooling)
    pub http: reqwest::Client,
    /// Backend origin requests are forwarded to
    pub target: String,
}

impl ProxyState {
    /// Create proxy state targeting the given backend origin
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            target: target.into(),
        }
    }
}

// Hop-by-hop headers are connection-scoped and must not be relayed.
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP_HEADERS
        .iter()
        .any(|header| name.eq_ignore_ascii_case(header))
}

fn skip_request_header(name: &str) -> bool {
    // Host is dropped so the upstream client re-derives the backend
    // origin; content-length is recomputed for the forwarded body.
    name.eq_ignore_ascii_case("host")
        || name.eq_ignore_ascii_case("content-length")
        || is_hop_by_hop(name)
}

/// Whether a request path falls under a proxied prefix
pub fn is_proxied_path(path: &str) -> bool {
    path.starts_with(API_PREFIX) || path.starts_with(OPENAPI_PREFIX)
}

/// Build a router that forwards all proxied paths to the backend
pub fn router(state: ProxyState) -> Router {
    Router::new().fallback(forward).with_state(state)
}

/// Forward one request to the backend and relay the response
pub async fn forward(
    State(state): State<ProxyState>,
    request: Request,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    let path = parts.uri.path().to_string();
    if !is_proxied_path(&path) {
        return Err(AppError::RouteNotFound(path));
    }

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or(path);
    let url = format!("{}{}", state.target, path_and_query);

    let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())
        .map_err(|e| AppError::Internal(anyhow!("invalid request method: {}", e)))?;

    let mut headers = reqwest::header::HeaderMap::new();
    for (name, value) in parts.headers.iter() {
        if skip_request_header(name.as_str()) {
            continue;
        }
        let header_name = reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes());
        let header_value = reqwest::header::HeaderValue::from_bytes(value.as_bytes());
        if let (Ok(header_name), Ok(header_value)) = (header_name, header_value) {
            headers.append(header_name, header_value);
        }
    }

    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::Internal(anyhow!("failed to read request body: {}", e)))?;

    tracing::debug!(method = %method, url = %url, "forwarding request");

    let upstream = state
        .http
        .request(method, &url)
        .headers(headers)
        .body(body_bytes)
        .send()
        .await?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| AppError::InvalidUpstream(format!("invalid status code: {}", e)))?;

    let mut builder = Response::builder().status(status);
    for (name, value) in upstream.headers().iter() {
        if is_hop_by_hop(name.as_str()) {
            continue;
        }
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    let stream = upstream
        .bytes_stream()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
    builder
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InvalidUpstream(e.to_string()))
}
