//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_of(error: &Error) -> Error {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialises")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error =
        Error::internal("database password is hunter2").with_trace_id(expected_trace_id.clone());

    let response = ResponseError::error_response(&error);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some(expected_trace_id.as_str()));

    let body = body_of(&error).await;
    assert_eq!(body.message(), "Internal server error");
    assert_eq!(body.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn unavailable_errors_are_redacted() {
    let body = body_of(&Error::service_unavailable("pool exhausted: 10/10")).await;
    assert_eq!(body.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(body.message(), "Service unavailable");
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message() {
    let error = Error::invalid_request("bad");

    let body = body_of(&error).await;
    assert_eq!(body, error);
}

#[rstest]
#[actix_web::test]
async fn envelope_has_only_code_message_and_trace_id(expected_trace_id: String) {
    let error = Error::invalid_request("bad").with_trace_id(expected_trace_id.clone());
    let response = ResponseError::error_response(&error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");

    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "bad", "traceId": expected_trace_id })
    );
}

#[rstest]
#[actix_web::test]
async fn missing_trace_id_omits_header() {
    let response = ResponseError::error_response(&Error::not_found("missing"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
