//! Tests for AuthService login and registration.
//!
//! This module verifies that successful flows persist the token and user into the
//! session, and that failures pass the API error through without touching it.

use footbase::{
    client::{
        error::{ApiError, Error},
        session::{AuthService, Session},
    },
    model::user::{RegisterRequest, Role},
};
use footbase_test_utils::prelude::*;

use crate::TestSetupExt;

/// Tests that a successful login persists token and role.
///
/// Expected: token "abc" stored and role read back as EDITOR
#[tokio::test]
async fn login_persists_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_success("abc", "EDITOR")
        .build()
        .await?;
    let session = Session::in_memory();
    let auth = AuthService::new(test.client_with_session(session.clone()));

    let response = auth.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert!(response.is_ok());
    assert_eq!(response.unwrap()["token"], "abc");
    assert_eq!(session.token(), Some("abc".to_string()));
    assert_eq!(session.role(), Some(Role::Editor));
    assert!(session.is_editor());
    test.assert_mocks().await;

    Ok(())
}

/// Tests that registration persists the returned session.
///
/// Expected: token stored and role USER
#[tokio::test]
async fn register_persists_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_register_success(TEST_TOKEN, "USER")
        .build()
        .await?;
    let session = Session::in_memory();
    let auth = AuthService::new(test.client_with_session(session.clone()));
    let payload =
        RegisterRequest::from_form("tester", TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD).unwrap();

    let result = auth.register(&payload).await;

    assert!(result.is_ok());
    assert_eq!(session.token(), Some(TEST_TOKEN.to_string()));
    assert_eq!(session.role(), Some(Role::User));
    test.assert_mocks().await;

    Ok(())
}

/// Tests that a rejected login leaves the session empty.
///
/// Expected: Err(Error::Api) carrying the backend's `hata` message
#[tokio::test]
async fn login_failure_keeps_session_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_failure(401, "E-posta veya şifre hatalı")
        .build()
        .await?;
    let session = Session::in_memory();
    let auth = AuthService::new(test.client_with_session(session.clone()));

    let result = auth.login(TEST_EMAIL, "wrong").await;

    match result {
        Err(Error::Api(ApiError::Http(err))) => {
            assert_eq!(err.status, 401);
            assert_eq!(err.message, "E-posta veya şifre hatalı");
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());

    Ok(())
}

/// Tests that logout through the service clears the persisted session.
///
/// Expected: no token and no user after logout
#[tokio::test]
async fn logout_after_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_success("abc", "ADMIN")
        .build()
        .await?;
    let session = Session::in_memory();
    let auth = AuthService::new(test.client_with_session(session.clone()));

    auth.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();
    auth.logout().unwrap();

    assert!(session.token().is_none());
    assert!(session.role().is_none());

    Ok(())
}
