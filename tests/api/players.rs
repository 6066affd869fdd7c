//! Tests for the players API.

use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests rating a player with a score and comment.
///
/// Expected: POST to `/players/9/ratings` with `{score, comment}` and the bearer token
#[tokio::test]
async fn rates_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("POST", "/players/9/ratings", 201, MockBody::Json(json!({ "id": 1 })))
                .with_bearer(Some(TEST_TOKEN))
                .with_request_body(json!({ "score": 8, "comment": "İyi maç" })),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.players().rate(9, 8, "İyi maç").await;

    assert_eq!(result.unwrap()["id"], 1);
    test.assert_mocks().await;

    Ok(())
}

/// Tests commenting on a player.
///
/// Expected: POST to `/players/9/comments` with `{comment}`
#[tokio::test]
async fn comments_on_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new("POST", "/players/9/comments", 201, MockBody::Json(json!({ "id": 4 })))
                .with_request_body(json!({ "comment": "Harika gol" })),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("USER")));

    let result = client.players().add_comment(9, "Harika gol").await;

    assert!(result.is_ok());
    test.assert_mocks().await;

    Ok(())
}
