use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::teams, ApiClient},
        error::ApiError,
    },
    model::{matches::MatchSummary, matches::TeamRef, player::PlayerSummary},
};

pub struct TeamsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi { client: self }
    }
}

impl TeamsApi<'_> {
    pub async fn list(&self) -> Result<Vec<TeamRef>, ApiError> {
        let list: Option<Vec<TeamRef>> = self.client.get_json(teams::LIST).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&teams::get(id)).await
    }

    pub async fn players(&self, id: i64) -> Result<Vec<PlayerSummary>, ApiError> {
        let list: Option<Vec<PlayerSummary>> = self.client.get_json(&teams::players(id)).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn matches(&self, id: i64) -> Result<Vec<MatchSummary>, ApiError> {
        let list: Option<Vec<MatchSummary>> = self.client.get_json(&teams::matches(id)).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn statistics(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&teams::statistics(id)).await
    }
}
