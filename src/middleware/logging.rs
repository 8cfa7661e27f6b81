//! Request logging middleware
//!
//! Logs every request and response with its duration and status, under a
//! span carrying a trace ID that is echoed back in the response headers.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for trace ID
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Header name for request ID (alias for trace ID)
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation ID
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    /// Generate a new trace ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Take the trace ID from `x-trace-id`, then `x-request-id`, else generate one
    pub fn from_request(request: &Request) -> Self {
        [TRACE_ID_HEADER, REQUEST_ID_HEADER]
            .iter()
            .find_map(|name| {
                request
                    .headers()
                    .get(*name)
                    .and_then(|v| v.to_str().ok())
                    .filter(|v| !v.is_empty())
            })
            .map(|v| Self(v.to_string()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware to log HTTP requests and responses
///
/// The query string is not logged; it carries user prompts.
pub async fn log_request(mut request: Request, next: Next) -> Response<Body> {
    let start = Instant::now();

    let trace_id = TraceId::from_request(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    request.extensions_mut().insert(trace_id.clone());

    let span = tracing::info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %method,
        path = %path,
    );

    let mut response = async move {
        tracing::info!("Incoming request");
        let response = next.run(request).await;
        log_response(&method, &path, &response, start);
        response
    }
    .instrument(span)
    .await;

    if let Ok(header_value) = HeaderValue::from_str(trace_id.as_str()) {
        response
            .headers_mut()
            .insert(TRACE_ID_HEADER, header_value.clone());
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, header_value);
    }

    response
}

fn log_response(method: &Method, path: &str, response: &Response<Body>, start: Instant) {
    let status = response.status();
    let status_code = status.as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = %duration_ms,
            "Server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = %duration_ms,
            "Client error"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status_code,
            duration_ms = %duration_ms,
            "Request completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_id_generation() {
        let trace_id = TraceId::new();
        // UUID v4 format: xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx
        assert_eq!(trace_id.as_str().len(), 36);
    }

    #[test]
    fn test_trace_id_prefers_trace_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "req-1")
            .header(TRACE_ID_HEADER, "trace-1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(TraceId::from_request(&request), TraceId("trace-1".to_string()));
    }

    #[test]
    fn test_trace_id_falls_back_to_request_id() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "req-1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(TraceId::from_request(&request).as_str(), "req-1");
    }
}
