use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::admin, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::matches::{CommandHistory, CommandResult, FinishCommand, MatchSummary, ScoreCommand},
};

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }
}

impl AdminApi<'_> {
    /// Matches waiting for approval.
    pub async fn pending_matches(&self) -> Result<Vec<MatchSummary>, ApiError> {
        let list: Option<Vec<MatchSummary>> = self.client.get_json(admin::PENDING_MATCHES).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn approve_match(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &admin::approve(id))
            .await
    }

    pub async fn reject_match(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &admin::reject(id))
            .await
    }

    pub async fn create_match(&self, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, admin::MATCHES, Some(data))
            .await
    }

    pub async fn update_match(&self, id: i64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Put, &admin::match_(id), Some(data))
            .await
    }

    /// Reversible score update.
    pub async fn update_score(&self, command: &ScoreCommand) -> Result<CommandResult, ApiError> {
        self.client
            .send_json(HttpMethod::Post, admin::SCORE, Some(command))
            .await
    }

    /// Reversible match finish.
    pub async fn finish_match(&self, command: &FinishCommand) -> Result<CommandResult, ApiError> {
        self.client
            .send_json(HttpMethod::Post, admin::FINISH, Some(command))
            .await
    }

    /// Undo the last score or finish command.
    pub async fn undo_last_command(&self) -> Result<CommandResult, ApiError> {
        self.client.send_empty(HttpMethod::Post, admin::UNDO).await
    }

    pub async fn command_history(&self) -> Result<CommandHistory, ApiError> {
        let history: Option<CommandHistory> = self.client.get_json(admin::HISTORY).await?;
        Ok(history.unwrap_or_default())
    }

    pub async fn create_team(&self, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, admin::TEAMS, Some(data))
            .await
    }

    pub async fn update_team(&self, id: i64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Put, &admin::team(id), Some(data))
            .await
    }

    pub async fn create_player(&self, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, admin::PLAYERS, Some(data))
            .await
    }

    pub async fn update_player(&self, id: i64, data: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Put, &admin::player(id), Some(data))
            .await
    }
}
