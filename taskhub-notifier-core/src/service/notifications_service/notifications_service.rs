use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use notifier_contract::{CreateNotificationRequest, Notification};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Find one page of the user's notifications, newest first.
    ///
    /// ### Returns
    /// Page slice, pagination block and the unread count of the whole
    /// filtered set
    ///
    /// ### Errors
    /// - [Error::Validation] when page or limit is 0
    /// - [Error::UserNotExist] when the user does not exist
    ///
    async fn find_notifications(
        &self,
        user_id: Uuid,
        filters: input::NotificationFilters,
    ) -> Result<output::NotificationList, Error>;

    ///
    /// Create a notification in the target user's inbox.
    ///
    /// ### Returns
    /// The created notification
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - title or message is empty after trimming
    ///     - type is not one of the known kinds
    ///     - userId is not a well formed user id
    /// - [Error::UserNotExist] when the target user does not exist
    ///
    async fn create_notification(
        &self,
        creator_id: Uuid,
        request: CreateNotificationRequest,
    ) -> Result<Notification, Error>;

    ///
    /// Mark one notification of the user as read. Idempotent.
    ///
    /// ### Returns
    /// The updated notification and the unread count after the write
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when no notification with the id
    ///   is in the user's inbox
    ///
    async fn mark_notification_read(
        &self,
        user_id: Uuid,
        notification_id: String,
    ) -> Result<output::UpdatedNotification, Error>;

    ///
    /// Mark every notification of the user as read. Safe on an empty or
    /// already fully read inbox.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when the user does not exist
    ///
    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Delete one notification of the user.
    ///
    /// ### Returns
    /// The unread count after the write
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when no notification with the id
    ///   is in the user's inbox
    ///
    async fn delete_notification(
        &self,
        user_id: Uuid,
        notification_id: String,
    ) -> Result<u64, Error>;

    ///
    /// Delete every notification of the user.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when the user does not exist
    ///
    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Mark the listed notifications as read in one write. Unknown ids
    /// are ignored.
    ///
    /// ### Returns
    /// Count of notifications that changed and the unread count after
    /// the write
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when the user does not exist
    ///
    async fn mark_many_notifications_read(
        &self,
        user_id: Uuid,
        notification_ids: Vec<String>,
    ) -> Result<output::BulkUpdate, Error>;

    ///
    /// Delete the listed notifications in one write. Unknown ids are
    /// ignored.
    ///
    /// ### Returns
    /// Count of deleted notifications and the unread count after the
    /// write
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when the user does not exist
    ///
    async fn delete_many_notifications(
        &self,
        user_id: Uuid,
        notification_ids: Vec<String>,
    ) -> Result<output::BulkUpdate, Error>;
}
