//! Tests for the score command API shared by admins and editors.
//!
//! This module verifies that each scope is routed to its own backend paths.

use footbase::{
    client::api::CommandScope,
    model::matches::{FinishCommand, ScoreCommand},
};
use footbase_test_utils::prelude::*;

use crate::{util::session_with, TestSetupExt};

/// Tests that admin commands use the admin paths.
///
/// Expected: score, finish, undo and history hit `/admin/matches/...`
#[tokio::test]
async fn admin_scope_paths() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/admin/matches/score", 200, matches::command_result("SKOR_GUNCELLE"))
        .with_json_endpoint("POST", "/admin/matches/finish", 200, matches::command_result("MAC_BITIR"))
        .with_json_endpoint("POST", "/admin/matches/undo", 200, matches::command_result("GERI_AL"))
        .with_json_endpoint(
            "GET",
            "/admin/matches/history",
            200,
            matches::command_history(&["Skor 1-0", "Maç bitti"]),
        )
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("ADMIN")));
    let commands = client.score_commands(CommandScope::Admin);

    let score = commands.update_score(&ScoreCommand::new(1, 1, 0)).await;
    let finish = commands.finish_match(&FinishCommand::new(1, 1, 0)).await;
    let undo = commands.undo_last().await;
    let history = commands.history().await;

    assert_eq!(score.unwrap().islem_tipi.as_deref(), Some("SKOR_GUNCELLE"));
    assert!(finish.unwrap().basarili);
    assert!(undo.is_ok());
    assert_eq!(history.unwrap().len(), 2);
    test.assert_mocks().await;

    Ok(())
}

/// Tests that editor commands use the editor paths.
///
/// Expected: score, undo and history hit `/editor/matches/...`
#[tokio::test]
async fn editor_scope_paths() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/editor/matches/score-command",
            200,
            matches::command_result("SKOR_GUNCELLE"),
        )
        .with_json_endpoint("POST", "/editor/matches/undo", 200, matches::command_result("GERI_AL"))
        .with_json_endpoint("GET", "/editor/matches/history", 200, matches::command_history(&[]))
        .build()
        .await?;
    let client = test.client_with_session(session_with(TEST_TOKEN, Some("EDITOR")));
    let commands = client.score_commands(CommandScope::Editor);

    let score = commands.update_score(&ScoreCommand::new(4, 2, 2)).await;
    let undo = commands.undo_last().await;
    let history = commands.history().await;

    assert!(score.is_ok());
    assert_eq!(undo.unwrap().islem_tipi.as_deref(), Some("GERI_AL"));
    assert!(history.unwrap().is_empty());
    test.assert_mocks().await;

    Ok(())
}
