//! Assertions on the `{message, status}` response envelope.
//!
//! Kept independent of backend types so the contract is checked as a
//! client sees it.

use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct EnvelopeLike {
    message: Value,
    status: String,
}

fn parse(body: &[u8]) -> EnvelopeLike {
    let text = std::str::from_utf8(body).expect("response body should be valid UTF-8");
    serde_json::from_str(text)
        .unwrap_or_else(|e| panic!("body is not a response envelope ({e}): {text}"))
}

fn assert_json_content_type(headers: &HeaderMap) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );
}

/// Assert a success envelope and return its `message`.
pub fn assert_ok_parts(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Value {
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {body:?}");
    assert_json_content_type(headers);
    let envelope = parse(body);
    assert_eq!(envelope.status, "OK");
    envelope.message
}

/// Assert an error envelope with the given status and exact message.
///
/// Error responses always carry a non-empty `x-trace-id` header.
pub fn assert_error_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);
    assert_json_content_type(headers);

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let envelope = parse(body);
    assert_eq!(envelope.status, "Error");
    assert_eq!(envelope.message, Value::String(expected_message.to_string()));
}

/// Assert an error envelope held in an `HttpResponse`.
pub async fn assert_error_response(
    resp: actix_web::HttpResponse,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::body::to_bytes(resp.into_body())
        .await
        .unwrap_or_else(|_| panic!("failed to read response body"));
    assert_error_parts(status, &headers, &body, expected_status, expected_message);
}
