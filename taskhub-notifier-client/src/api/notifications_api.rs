use crate::Error;
use async_trait::async_trait;
use notifier_contract::{
    BulkDeleteResponse, BulkReadResponse, CreateNotificationRequest, CreatedNotificationResponse,
    ListFilters, MarkAllReadResponse, NotificationDeletedResponse, NotificationListResponse,
    NotificationReadResponse, NotificationsClearedResponse,
};

///
/// The REST surface of the notification service as seen by the cache.
///
/// Exists as a trait so the cache can be tested against a mock instead
/// of a running server.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsApi: Send + Sync {
    async fn list(&self, filters: ListFilters) -> Result<NotificationListResponse, Error>;

    async fn create(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<CreatedNotificationResponse, Error>;

    async fn mark_read(&self, notification_id: &str) -> Result<NotificationReadResponse, Error>;

    async fn mark_all_read(&self) -> Result<MarkAllReadResponse, Error>;

    async fn delete(&self, notification_id: &str) -> Result<NotificationDeletedResponse, Error>;

    async fn delete_all(&self) -> Result<NotificationsClearedResponse, Error>;

    async fn bulk_mark_read(&self, notification_ids: &[String])
        -> Result<BulkReadResponse, Error>;

    async fn bulk_delete(&self, notification_ids: &[String]) -> Result<BulkDeleteResponse, Error>;
}
