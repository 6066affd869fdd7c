//! Tests for the admin API.

use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests approving and rejecting pending matches.
///
/// Expected: POST to `/admin/matches/{id}/approve` and `/admin/matches/{id}/reject`
#[tokio::test]
async fn approves_and_rejects_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new(
                "POST",
                "/admin/matches/3/approve",
                200,
                MockBody::Json(json!({ "id": 3, "onayDurumu": "YAYINDA" })),
            )
            .with_bearer(Some(TEST_TOKEN)),
        )
        .with_json_endpoint(
            "POST",
            "/admin/matches/4/reject",
            200,
            json!({ "id": 4, "onayDurumu": "REDDEDILDI" }),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("ADMIN")));

    let approved = client.admin().approve_match(3).await;
    let rejected = client.admin().reject_match(4).await;

    assert_eq!(approved.unwrap()["onayDurumu"], "YAYINDA");
    assert_eq!(rejected.unwrap()["onayDurumu"], "REDDEDILDI");
    test.assert_mocks().await;

    Ok(())
}

/// Tests updating a match.
///
/// Expected: PUT to `/admin/matches/3` carrying the given data unchanged
#[tokio::test]
async fn updates_match() -> Result<(), TestError> {
    let data = json!({ "tarih": "2025-06-01", "saat": "20:00" });
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("PUT", "/admin/matches/3", 200, MockBody::Json(json!({ "id": 3 })))
                .with_request_body(data.clone()),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("ADMIN")));

    let result = client.admin().update_match(3, &data).await;

    assert_eq!(result.unwrap()["id"], 3);
    test.assert_mocks().await;

    Ok(())
}

/// Tests listing pending matches.
///
/// Expected: GET `/admin/matches/pending` decoded into summaries
#[tokio::test]
async fn lists_pending_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/admin/matches/pending",
            200,
            json!([matches::match_summary(3, "Göztepe", "Samsunspor", "PLANLI")]),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("ADMIN")));

    let result = client.admin().pending_matches().await;

    let list = result.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].home_name(), "Göztepe");
    test.assert_mocks().await;

    Ok(())
}
