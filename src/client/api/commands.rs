//! Reversible score commands, shared by the admin and editor score pages.
//!
//! Both roles expose the same four operations under different paths; the undo
//! stack itself lives on the backend.

use crate::{
    client::{api::ApiClient, error::ApiError},
    model::matches::{CommandHistory, CommandResult, FinishCommand, ScoreCommand},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    Admin,
    Editor,
}

pub struct ScoreCommands<'a> {
    client: &'a ApiClient,
    scope: CommandScope,
}

impl ApiClient {
    pub fn score_commands(&self, scope: CommandScope) -> ScoreCommands<'_> {
        ScoreCommands {
            client: self,
            scope,
        }
    }
}

impl ScoreCommands<'_> {
    pub async fn update_score(&self, command: &ScoreCommand) -> Result<CommandResult, ApiError> {
        match self.scope {
            CommandScope::Admin => self.client.admin().update_score(command).await,
            CommandScope::Editor => self.client.editor().update_score_command(command).await,
        }
    }

    pub async fn finish_match(&self, command: &FinishCommand) -> Result<CommandResult, ApiError> {
        match self.scope {
            CommandScope::Admin => self.client.admin().finish_match(command).await,
            CommandScope::Editor => self.client.editor().finish_match_command(command).await,
        }
    }

    pub async fn undo_last(&self) -> Result<CommandResult, ApiError> {
        match self.scope {
            CommandScope::Admin => self.client.admin().undo_last_command().await,
            CommandScope::Editor => self.client.editor().undo_last_command().await,
        }
    }

    pub async fn history(&self) -> Result<CommandHistory, ApiError> {
        match self.scope {
            CommandScope::Admin => self.client.admin().command_history().await,
            CommandScope::Editor => self.client.editor().command_history().await,
        }
    }
}
