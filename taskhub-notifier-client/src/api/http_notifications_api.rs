use super::NotificationsApi;
use crate::Error;
use async_trait::async_trait;
use notifier_contract::{
    BulkDeleteResponse, BulkReadResponse, CreateNotificationRequest, CreatedNotificationResponse,
    ErrorResponse, ListFilters, MarkAllReadResponse, NotificationDeletedResponse,
    NotificationIdsRequest, NotificationListResponse, NotificationReadResponse,
    NotificationsClearedResponse,
};
use serde::de::DeserializeOwned;

///
/// [NotificationsApi] over HTTP with bearer authorization.
///
pub struct HttpNotificationsApi {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl HttpNotificationsApi {
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn parse<T>(response: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(envelope) => envelope.message,
            Err(_) => status.to_string(),
        };

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl NotificationsApi for HttpNotificationsApi {
    async fn list(&self, filters: ListFilters) -> Result<NotificationListResponse, Error> {
        let response = self
            .client
            .get(self.url("/notifications"))
            .bearer_auth(&self.bearer_token)
            .query(&filters)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn create(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<CreatedNotificationResponse, Error> {
        let response = self
            .client
            .post(self.url("/notifications"))
            .bearer_auth(&self.bearer_token)
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn mark_read(&self, notification_id: &str) -> Result<NotificationReadResponse, Error> {
        let response = self
            .client
            .put(self.url(&format!("/notifications/{notification_id}/read")))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn mark_all_read(&self) -> Result<MarkAllReadResponse, Error> {
        let response = self
            .client
            .put(self.url("/notifications/read-all"))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn delete(&self, notification_id: &str) -> Result<NotificationDeletedResponse, Error> {
        let response = self
            .client
            .delete(self.url(&format!("/notifications/{notification_id}")))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn delete_all(&self) -> Result<NotificationsClearedResponse, Error> {
        let response = self
            .client
            .delete(self.url("/notifications"))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn bulk_mark_read(
        &self,
        notification_ids: &[String],
    ) -> Result<BulkReadResponse, Error> {
        let request = NotificationIdsRequest {
            notification_ids: notification_ids.to_vec(),
        };
        let response = self
            .client
            .put(self.url("/notifications/bulk-read"))
            .bearer_auth(&self.bearer_token)
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn bulk_delete(&self, notification_ids: &[String]) -> Result<BulkDeleteResponse, Error> {
        let request = NotificationIdsRequest {
            notification_ids: notification_ids.to_vec(),
        };
        let response = self
            .client
            .delete(self.url("/notifications/bulk-delete"))
            .bearer_auth(&self.bearer_token)
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }
}
