//! Tests for ApiClient::request.
//!
//! This module verifies how responses are classified over a real HTTP round trip:
//! success bodies, no-content statuses, error message extraction, bearer token
//! injection and transport failures.

use std::rc::Rc;

use footbase::client::{
    api::{ApiClient, HttpMethod, RequestOptions, ReqwestTransport},
    config::ClientConfig,
    error::ApiError,
    session::Session,
};
use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests that a 2xx body is returned unchanged.
///
/// Expected: Ok(Some(body))
#[tokio::test]
async fn returns_success_body() -> Result<(), TestError> {
    let body = json!({ "id": 1, "etiketler": ["a", "b"] });
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/ping", 200, body.clone())
        .build()
        .await?;
    let client = test.client();

    let result = client
        .request(&client.url("/ping"), RequestOptions::default())
        .await;

    assert_eq!(result.unwrap(), Some(body));
    test.assert_mocks().await;

    Ok(())
}

/// Tests that 204 and 205 responses are no-content.
///
/// Expected: Ok(None) for both statuses
#[tokio::test]
async fn no_content_statuses() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_empty_endpoint("DELETE", "/items/1", 204)
        .with_empty_endpoint("PUT", "/items/2", 205)
        .build()
        .await?;
    let client = test.client();

    let deleted = client
        .request(&client.url("/items/1"), RequestOptions::new(HttpMethod::Delete))
        .await;
    let reset = client
        .request(&client.url("/items/2"), RequestOptions::new(HttpMethod::Put))
        .await;

    assert_eq!(deleted.unwrap(), None);
    assert_eq!(reset.unwrap(), None);
    test.assert_mocks().await;

    Ok(())
}

/// Tests that the `hata` field becomes the error message.
///
/// Expected: Err(ApiError::Http) with message "X" and the parsed body
#[tokio::test]
async fn error_message_from_hata() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/matches", 400, json!({ "hata": "X" }))
        .build()
        .await?;
    let client = test.client();

    let result = client
        .request(
            &client.url("/matches"),
            RequestOptions::new(HttpMethod::Post).body("{}"),
        )
        .await;

    match result {
        Err(ApiError::Http(err)) => {
            assert_eq!(err.message, "X");
            assert_eq!(err.status, 400);
            assert_eq!(err.body, Some(json!({ "hata": "X" })));
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }

    Ok(())
}

/// Tests the `message` and `error` fallbacks.
///
/// Expected: messages "Y" and "Z"
#[tokio::test]
async fn error_message_fallback_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/a", 409, json!({ "message": "Y" }))
        .with_json_endpoint("GET", "/b", 422, json!({ "hata": "", "error": "Z" }))
        .build()
        .await?;
    let client = test.client();

    let first = client
        .request(&client.url("/a"), RequestOptions::default())
        .await
        .unwrap_err();
    let second = client
        .request(&client.url("/b"), RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(first.to_string(), "Y");
    assert_eq!(second.to_string(), "Z");

    Ok(())
}

/// Tests that non-JSON error bodies fall back to the status text.
///
/// Expected: message equal to the reason phrase and no parsed body
#[tokio::test]
async fn error_message_from_status_text() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_text_endpoint("GET", "/teams", 500, "stack trace")
        .build()
        .await?;
    let client = test.client();

    let result = client
        .request(&client.url("/teams"), RequestOptions::default())
        .await;

    match result {
        Err(ApiError::Http(err)) => {
            assert_eq!(err.message, "Internal Server Error");
            assert_eq!(err.status_text, "Internal Server Error");
            assert_eq!(err.body, None);
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }

    Ok(())
}

/// Tests that a 401 response is flagged as unauthorized.
///
/// Expected: is_unauthorized() is true and the session is left untouched
#[tokio::test]
async fn unauthorized_is_flagged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/users/me", 401, json!({ "error": "Unauthorized" }))
        .build()
        .await?;
    let session = session_with("expired", Some("USER"));
    let client = test.client_with_session(session.clone());

    let err = client
        .request(&client.url("/users/me"), RequestOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(session.token(), Some("expired".to_string()));

    Ok(())
}

/// Tests that the stored token is sent as a bearer header.
///
/// Expected: mock matching `Authorization: Bearer abc` is hit once
#[tokio::test]
async fn sends_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("GET", "/feed", 200, MockBody::Json(json!([]))).with_bearer(Some("abc")),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with("abc", None));

    let result = client
        .request(&client.url("/feed"), RequestOptions::default())
        .await;

    assert_eq!(result.unwrap(), Some(json!([])));
    test.assert_mocks().await;

    Ok(())
}

/// Tests that no authorization header is sent without a session.
///
/// Expected: mock requiring a missing `Authorization` header is hit once
#[tokio::test]
async fn omits_bearer_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("GET", "/players", 200, MockBody::Json(json!([]))).with_bearer(None),
        )
        .build()
        .await?;
    let client = test.client();

    let result = client
        .request(&client.url("/players"), RequestOptions::default())
        .await;

    assert!(result.is_ok());
    test.assert_mocks().await;

    Ok(())
}

/// Tests that an unreachable backend is a transport error.
///
/// Expected: Err(ApiError::Transport) with no status
#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let config = ClientConfig::new("http://127.0.0.1:1/api").unwrap();
    let client = ApiClient::new(config, Rc::new(ReqwestTransport::new()), Session::in_memory());

    let result = client
        .request(&client.url("/matches"), RequestOptions::default())
        .await;

    match result {
        Err(err @ ApiError::Transport(_)) => assert_eq!(err.status(), None),
        other => panic!("expected transport error, got {:?}", other),
    }
}
