use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::matches, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::matches::{CommentRequest, MatchSummary, Prediction},
};

/// Build `?key=value&...` from query parameters, or an empty string without any.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    format!("?{}", pairs.join("&"))
}

pub struct MatchesApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn matches(&self) -> MatchesApi<'_> {
        MatchesApi { client: self }
    }
}

impl MatchesApi<'_> {
    /// `GET /matches`, optionally filtered by query parameters.
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Vec<MatchSummary>, ApiError> {
        let endpoint = format!("{}{}", matches::LIST, query_string(params));

        let list: Option<Vec<MatchSummary>> = self.client.get_json(&endpoint).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::get(id)).await
    }

    pub async fn predict(&self, id: i64, home_score: i32, away_score: i32) -> Result<Value, ApiError> {
        let body = Prediction {
            home_score,
            away_score,
        };

        self.client
            .send_json(HttpMethod::Post, &matches::predictions(id), Some(&body))
            .await
    }

    pub async fn comments(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::comments(id)).await
    }

    pub async fn add_comment(&self, id: i64, message: &str) -> Result<Value, ApiError> {
        let body = CommentRequest {
            message: message.to_string(),
        };

        self.client
            .send_json(HttpMethod::Post, &matches::comments(id), Some(&body))
            .await
    }

    pub async fn update_comment(&self, comment_id: i64, message: &str) -> Result<Value, ApiError> {
        let body = CommentRequest {
            message: message.to_string(),
        };

        self.client
            .send_json(HttpMethod::Put, &matches::comment(comment_id), Some(&body))
            .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Delete, &matches::comment(comment_id))
            .await
    }

    pub async fn like_comment(&self, comment_id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &matches::like_comment(comment_id))
            .await
    }

    pub async fn teams(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::teams(id)).await
    }

    pub async fn events(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::events(id)).await
    }

    pub async fn media(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::media(id)).await
    }

    pub async fn status_history(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&matches::status_history(id)).await
    }

    pub async fn add_event(&self, id: i64, event: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, &matches::events(id), Some(event))
            .await
    }

    pub async fn add_media(&self, id: i64, media: &Value) -> Result<Value, ApiError> {
        self.client
            .send_json(HttpMethod::Post, &matches::media(id), Some(media))
            .await
    }
}
