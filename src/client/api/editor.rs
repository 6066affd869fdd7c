use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::editor, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::matches::{
        CommandHistory, CommandResult, FinishCommand, MatchEvent, MatchSummary, NewMatch,
        ScoreCommand, ScoreUpdate,
    },
};

pub struct EditorApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn editor(&self) -> EditorApi<'_> {
        EditorApi { client: self }
    }
}

impl EditorApi<'_> {
    /// Submit a match for admin approval.
    pub async fn create_match(&self, new_match: &NewMatch) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, editor::MATCHES, Some(new_match))
            .await
    }

    /// Matches submitted by the logged-in editor.
    pub async fn my_matches(&self) -> Result<Vec<MatchSummary>, ApiError> {
        let list: Option<Vec<MatchSummary>> = self.client.get_json(editor::MY_MATCHES).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn update_score(&self, id: i64, score: &ScoreUpdate) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Put, &editor::score(id), Some(score))
            .await
    }

    pub async fn add_match_event(&self, id: i64, event: &MatchEvent) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, &editor::events(id), Some(event))
            .await
    }

    pub async fn start_match(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &editor::start(id))
            .await
    }

    pub async fn finish_match(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &editor::finish(id))
            .await
    }

    /// Reversible score update.
    pub async fn update_score_command(&self, command: &ScoreCommand) -> Result<CommandResult, ApiError> {
        self.client
            .send_json(HttpMethod::Post, editor::SCORE_COMMAND, Some(command))
            .await
    }

    /// Reversible match finish.
    pub async fn finish_match_command(&self, command: &FinishCommand) -> Result<CommandResult, ApiError> {
        self.client
            .send_json(HttpMethod::Post, editor::FINISH_COMMAND, Some(command))
            .await
    }

    /// Undo the last score or finish command.
    pub async fn undo_last_command(&self) -> Result<CommandResult, ApiError> {
        self.client.send_empty(HttpMethod::Post, editor::UNDO).await
    }

    pub async fn command_history(&self) -> Result<CommandHistory, ApiError> {
        let history: Option<CommandHistory> = self.client.get_json(editor::HISTORY).await?;
        Ok(history.unwrap_or_default())
    }
}
