//! Tests for the response module

use super::*;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Classifier Tests
// ============================================================================

#[test_case(json!({"json": {}, "headers": {}}), true ; "envelope with body and headers")]
#[test_case(json!({"json": "not-a-function"}), true ; "non callable json member")]
#[test_case(json!({"json": null}), true ; "null json member is still defined")]
#[test_case(json!({}), false ; "empty object")]
#[test_case(json!({"data": {}, "headers": {}}), false ; "object without json member")]
#[test_case(json!([{"json": 1}]), false ; "array payload")]
#[test_case(json!(null), false ; "null")]
#[test_case(json!("json"), false ; "string")]
#[test_case(json!(42), false ; "number")]
fn test_is_response_envelope(value: serde_json::Value, expected: bool) {
    assert_eq!(is_response_envelope(&value), expected);
}

// ============================================================================
// TransportOutput Tests
// ============================================================================

#[test]
fn test_payload_passthrough() {
    let output = TransportOutput::from(json!([{"id": 1}, {"id": 2}]));
    assert!(!output.is_envelope());

    let (body, headers) = output.into_parts();
    assert_eq!(body, json!([{"id": 1}, {"id": 2}]));
    assert!(headers.is_none());
}

#[test]
fn test_envelope_from_value() {
    let output = TransportOutput::from(json!({
        "json": [{"id": 1}],
        "status": 200,
        "headers": {"X-WP-Total": "50", "X-WP-TotalPages": 5, "bad header": "x", "nested": {}}
    }));
    assert!(output.is_envelope());

    let (body, headers) = output.into_parts();
    let headers = headers.unwrap();
    assert_eq!(body, json!([{"id": 1}]));
    assert_eq!(headers.get("x-wp-total").unwrap(), "50");
    assert_eq!(headers.get("x-wp-totalpages").unwrap(), "5");
    assert_eq!(headers.len(), 2);
}

#[test]
fn test_envelope_without_headers() {
    let (body, headers) = TransportOutput::from(json!({"json": {"id": 3}})).into_parts();
    assert_eq!(body["id"], 3);
    assert!(headers.unwrap().is_empty());
}

#[test]
fn test_envelope_status() {
    let TransportOutput::Envelope(envelope) =
        TransportOutput::from(json!({"json": null, "status": 404}))
    else {
        panic!("Expected Envelope");
    };
    assert_eq!(envelope.status, 404);
    assert!(envelope.body.is_null());
}

#[test]
fn test_response_envelope_builder() {
    let envelope = ResponseEnvelope::new(json!({"ok": true}))
        .with_status(201)
        .with_header("X-WP-Total", "3")
        .with_header("bad header", "ignored");

    assert_eq!(envelope.status, 201);
    assert_eq!(envelope.headers.len(), 1);
    assert_eq!(envelope.headers.get("X-WP-TOTAL").unwrap(), "3");
    assert_eq!(envelope.body["ok"], true);

    let output: TransportOutput = envelope.into();
    assert!(output.is_envelope());
}

#[test]
fn test_header_map_from_non_object() {
    assert!(header_map_from_json(&json!(["x-wp-total"])).is_empty());
    assert!(header_map_from_json(&json!(null)).is_empty());
}

// ============================================================================
// Status Tests
// ============================================================================

#[test_case(200, true ; "ok")]
#[test_case(204, true ; "no content")]
#[test_case(301, false ; "redirect")]
#[test_case(404, false ; "not found")]
#[test_case(500, false ; "server error")]
fn test_envelope_is_success(status: u16, expected: bool) {
    let envelope = ResponseEnvelope::new(json!([])).with_status(status);
    assert_eq!(envelope.is_success(), expected);
}

#[test]
fn test_default_envelope_is_success() {
    let envelope = ResponseEnvelope::default();
    assert_eq!(envelope.status, 200);
    assert!(envelope.body.is_null());
}

#[test]
fn test_into_payload_rejects_error_status() {
    let output = TransportOutput::from(json!({
        "json": {"code": "rest_post_invalid_id", "message": "Invalid post ID."},
        "status": 404
    }));

    let err = output.into_payload().unwrap_err();
    assert!(err.is_not_found());
    match err {
        crate::error::Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("rest_post_invalid_id"));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn test_into_payload_passes_success_and_raw_payloads() {
    let output = TransportOutput::from(json!({
        "json": [1, 2],
        "headers": {"x-wp-total": "2"}
    }));
    let (body, headers) = output.into_payload().unwrap();
    assert_eq!(body, json!([1, 2]));
    assert_eq!(headers.unwrap().get("x-wp-total").unwrap(), "2");

    // A raw payload carries no status, even one shaped like an error
    let (body, headers) = TransportOutput::from(json!({"code": "x", "status": 404}))
        .into_payload()
        .unwrap();
    assert_eq!(body["code"], "x");
    assert!(headers.is_none());
}
