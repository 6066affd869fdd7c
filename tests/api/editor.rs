//! Tests for the editor API.
//!
//! This module verifies the verbs, paths and payloads of match submission and
//! the direct match controls used on the editor pages.

use footbase::model::matches::{MatchForm, ScoreUpdate};
use footbase_test_utils::prelude::*;
use serde_json::json;

use crate::{util::session_with, TestSetupExt};

/// Tests submitting a validated match form.
///
/// Expected: POST to `/editor/matches` with nested team ids and a null referee
#[tokio::test]
async fn creates_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new(
                "POST",
                "/editor/matches",
                201,
                MockBody::Json(matches::match_summary(5, "Galatasaray", "Fenerbahçe", "PLANLI")),
            )
            .with_bearer(Some(TEST_TOKEN))
            .with_request_body(json!({
                "evSahibiTakim": { "id": 10 },
                "deplasmanTakim": { "id": 11 },
                "tarih": "2025-05-17",
                "saat": "19:00",
                "hakem": null,
            })),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("EDITOR")));
    let form = MatchForm {
        home_team_id: Some(10),
        away_team_id: Some(11),
        tarih: " 2025-05-17 ".to_string(),
        saat: "19:00".to_string(),
        ..MatchForm::default()
    };

    let new_match = form.validate().unwrap();
    let result = client.editor().create_match(&new_match).await;

    assert_eq!(result.unwrap()["id"], 5);
    test.assert_mocks().await;

    Ok(())
}

/// Tests overwriting a score directly.
///
/// Expected: PUT to `/editor/matches/5/score` with both scores
#[tokio::test]
async fn updates_score() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_endpoint(
            MockEndpoint::new(
                "PUT",
                "/editor/matches/5/score",
                200,
                MockBody::Json(json!({ "evSahibiSkor": 2, "deplasmanSkor": 1 })),
            )
            .with_request_body(json!({ "evSahibiSkor": 2, "deplasmanSkor": 1 })),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("EDITOR")));
    let score = ScoreUpdate {
        ev_sahibi_skor: 2,
        deplasman_skor: 1,
    };

    let result = client.editor().update_score(5, &score).await;

    assert_eq!(result.unwrap()["evSahibiSkor"], 2);
    test.assert_mocks().await;

    Ok(())
}

/// Tests starting and finishing a match.
///
/// Expected: POST to `/editor/matches/5/start` and `/editor/matches/5/finish`, an
/// empty finish response decoding as null
#[tokio::test]
async fn starts_and_finishes_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/editor/matches/5/start", 200, json!({ "durum": "OYNANIYOR" }))
        .with_empty_endpoint("POST", "/editor/matches/5/finish", 204)
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("EDITOR")));

    let started = client.editor().start_match(5).await;
    let finished = client.editor().finish_match(5).await;

    assert_eq!(started.unwrap()["durum"], "OYNANIYOR");
    assert!(finished.unwrap().is_null());
    test.assert_mocks().await;

    Ok(())
}
