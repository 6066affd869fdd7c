//! Tests for the notifications API.
//!
//! This module verifies the unread counter used by the navbar bell and the
//! authenticated notification listing.

use footbase::model::notification::unread;
use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests reading the unread counter.
///
/// Expected: Ok(3)
#[tokio::test]
async fn reads_unread_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_unread_count(3).build().await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.notifications().unread_count().await;

    assert_eq!(result.unwrap(), 3);
    test.assert_mocks().await;

    Ok(())
}

/// Tests listing every notification with the bearer token attached.
///
/// Expected: Ok with two notifications, one unread
#[tokio::test]
async fn lists_all_notifications() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new(
                "GET",
                "/notifications",
                200,
                MockBody::Json(json!([
                    notification::notification(1, "Maç onaylandı", false),
                    notification::notification(2, "Yeni yorum", true),
                ])),
            )
            .with_bearer(Some(TEST_TOKEN)),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.notifications().all().await;

    assert!(result.is_ok());
    let list = result.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(unread(&list), 1);
    assert_eq!(list[0].hedef_url.as_deref(), Some("/app/matches/1"));
    test.assert_mocks().await;

    Ok(())
}

/// Tests marking every notification read.
///
/// Expected: Ok with the backend's response
#[tokio::test]
async fn marks_all_read() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("PUT", "/notifications/read-all", 200, json!({ "guncellenen": 2 }))
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.notifications().mark_all_as_read().await;

    assert_eq!(result.unwrap()["guncellenen"], 2);
    test.assert_mocks().await;

    Ok(())
}

/// Tests fetching the most recent notifications with a limit.
///
/// Expected: GET `/notifications/recent?limit=10`
#[tokio::test]
async fn lists_recent_with_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/notifications/recent?limit=10",
            200,
            json!([notification::notification(5, "Gol!", false)]),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.notifications().recent(10).await;

    assert_eq!(result.unwrap().len(), 1);
    test.assert_mocks().await;

    Ok(())
}

/// Tests marking one notification read and deleting another.
///
/// Expected: PUT `/notifications/5/read`, then DELETE `/notifications/6`
#[tokio::test]
async fn marks_read_and_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("PUT", "/notifications/5/read", 200, json!({ "id": 5, "okundu": true }))
        .with_empty_endpoint("DELETE", "/notifications/6", 204)
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let read = client.notifications().mark_as_read(5).await;
    let deleted = client.notifications().delete(6).await;

    assert_eq!(read.unwrap()["okundu"], true);
    assert!(deleted.unwrap().is_null());
    test.assert_mocks().await;

    Ok(())
}
