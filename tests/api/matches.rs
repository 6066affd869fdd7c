//! Tests for the matches API.

use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests listing matches without filters.
///
/// Expected: Ok with both matches decoded and team names resolved
#[tokio::test]
async fn lists_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/matches",
            200,
            json!([
                matches::match_summary(1, "Galatasaray", "Fenerbahçe", "PLANLI"),
                matches::match_summary(2, "Beşiktaş", "Trabzonspor", "BITTI"),
            ]),
        )
        .build()
        .await?;
    let client = test.client();

    let result = client.matches().list(&[]).await;

    assert!(result.is_ok());
    let list = result.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].home_name(), "Galatasaray");
    assert_eq!(list[1].away_name(), "Trabzonspor");
    test.assert_mocks().await;

    Ok(())
}

/// Tests that a no-content list response decodes as an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn no_content_list_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_empty_endpoint("GET", "/matches", 204)
        .build()
        .await?;
    let client = test.client();

    let result = client.matches().list(&[]).await;

    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests submitting a score prediction.
///
/// Expected: POST to `/matches/1/predictions` with camelCase scores
#[tokio::test]
async fn predicts_score() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("POST", "/matches/1/predictions", 201, MockBody::Json(json!({ "id": 8 })))
                .with_bearer(Some(TEST_TOKEN))
                .with_request_body(json!({ "homeScore": 2, "awayScore": 0 })),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.matches().predict(1, 2, 0).await;

    assert_eq!(result.unwrap()["id"], 8);
    test.assert_mocks().await;

    Ok(())
}

/// Tests the comment lifecycle of a match.
///
/// Expected: POST and PUT carry `{message}`, DELETE and like hit the comment paths
#[tokio::test]
async fn manages_comments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("POST", "/matches/1/comments", 201, MockBody::Json(json!({ "id": 30 })))
                .with_request_body(json!({ "message": "Güzel maç" })),
        )
        .with_endpoint(
            MockEndpoint::new("PUT", "/matches/comments/30", 200, MockBody::Json(json!({ "id": 30 })))
                .with_request_body(json!({ "message": "Çok güzel maç" })),
        )
        .with_json_endpoint("POST", "/matches/comments/30/like", 200, json!({ "begeniSayisi": 1 }))
        .with_empty_endpoint("DELETE", "/matches/comments/30", 204)
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));
    let matches = client.matches();

    let added = matches.add_comment(1, "Güzel maç").await;
    let updated = matches.update_comment(30, "Çok güzel maç").await;
    let liked = matches.like_comment(30).await;
    let deleted = matches.delete_comment(30).await;

    assert_eq!(added.unwrap()["id"], 30);
    assert!(updated.is_ok());
    assert_eq!(liked.unwrap()["begeniSayisi"], 1);
    assert!(deleted.unwrap().is_null());
    test.assert_mocks().await;

    Ok(())
}

/// Tests that list filters are sent as an encoded query string.
///
/// Expected: GET `/matches?durum=BITTI&takim=Be%C5%9Fikta%C5%9F`
#[tokio::test]
async fn lists_with_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/matches?durum=BITTI&takim=Be%C5%9Fikta%C5%9F",
            200,
            json!([matches::match_summary(2, "Beşiktaş", "Trabzonspor", "BITTI")]),
        )
        .build()
        .await?;
    let client = test.client();

    let result = client
        .matches()
        .list(&[("durum", "BITTI"), ("takim", "Beşiktaş")])
        .await;

    assert_eq!(result.unwrap().len(), 1);
    test.assert_mocks().await;

    Ok(())
}
