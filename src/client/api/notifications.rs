use serde_json::Value;

use crate::{
    client::{
        api::{endpoints::notifications, transport::HttpMethod, ApiClient},
        error::ApiError,
    },
    model::notification::{Notification, UnreadCount},
};

/// Number of notifications the navbar bell fetches.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi { client: self }
    }
}

impl NotificationsApi<'_> {
    pub async fn all(&self) -> Result<Vec<Notification>, ApiError> {
        self.list(notifications::LIST).await
    }

    pub async fn unread(&self) -> Result<Vec<Notification>, ApiError> {
        self.list(notifications::UNREAD).await
    }

    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        let count: Option<UnreadCount> = self.client.get_json(notifications::UNREAD_COUNT).await?;
        Ok(count.unwrap_or_default().count)
    }

    pub async fn recent(&self, limit: u32) -> Result<Vec<Notification>, ApiError> {
        self.list(&format!("{}?limit={}", notifications::RECENT, limit))
            .await
    }

    pub async fn mark_as_read(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Put, &notifications::mark_read(id))
            .await
    }

    pub async fn mark_all_as_read(&self) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Put, notifications::MARK_ALL_READ)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .send_empty(HttpMethod::Delete, &notifications::delete(id))
            .await
    }

    async fn list(&self, endpoint: &str) -> Result<Vec<Notification>, ApiError> {
        let list: Option<Vec<Notification>> = self.client.get_json(endpoint).await?;
        Ok(list.unwrap_or_default())
    }
}
