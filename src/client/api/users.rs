use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::users, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::{home::HomeSummary, user::UserProfile},
};

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    /// `GET /feed`
    pub async fn feed(&self) -> Result<Value, ApiError> {
        self.get_json(users::FEED).await
    }

    /// `GET /home`, the landing page summary.
    pub async fn home(&self) -> Result<HomeSummary, ApiError> {
        let summary: Option<HomeSummary> = self.get_json(users::HOME).await?;
        Ok(summary.unwrap_or_default())
    }
}

impl UsersApi<'_> {
    pub async fn profile(&self, id: i64) -> Result<Value, ApiError> {
        self.client.get_json(&users::profile(id)).await
    }

    pub async fn me(&self) -> Result<Option<UserProfile>, ApiError> {
        self.client.get_json(users::ME).await
    }

    pub async fn follow(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Post, &users::follow(id))
            .await
    }

    pub async fn unfollow(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Delete, &users::follow(id))
            .await
    }
}
