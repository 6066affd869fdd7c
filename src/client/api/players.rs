use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::players, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::player::{PlayerComment, PlayerRating, PlayerSummary},
};

pub struct PlayersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn players(&self) -> PlayersApi<'_> {
        PlayersApi { client: self }
    }
}

impl PlayersApi<'_> {
    pub async fn list(&self) -> Result<Vec<PlayerSummary>, ApiError> {
        let list: Option<Vec<PlayerSummary>> = self.client.get_json(players::LIST).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::get(id)).await
    }

    pub async fn ratings(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::ratings(id)).await
    }

    pub async fn rate(&self, id: i64, score: u8, comment: &str) -> Result<Value, ApiError> {
        let body = PlayerRating {
            score,
            comment: comment.to_string(),
        };

        self.client
            .send_json(HttpMethod::Post, &players::ratings(id), Some(&body))
            .await
    }

    pub async fn score(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::score(id)).await
    }

    pub async fn media(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::media(id)).await
    }

    pub async fn statistics(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::statistics(id)).await
    }

    pub async fn comments(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&players::comments(id)).await
    }

    pub async fn add_comment(&self, id: i64, comment: &str) -> Result<Value, ApiError> {
        let body = PlayerComment {
            comment: comment.to_string(),
        };

        self.client
            .send_json(HttpMethod::Post, &players::comments(id), Some(&body))
            .await
    }

    pub async fn add_media(&self, id: i64, media: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, &players::media(id), Some(media))
            .await
    }
}
