use super::{dto::Notification, error::Error};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds user's embedded notifications, in storage order.
    ///
    /// ### Returns
    /// `None` when the user does not exist
    ///
    async fn find_notifications(&self, user_id: Uuid) -> Result<Option<Vec<Notification>>, Error>;

    ///
    /// Appends a notification to the user's inbox in one write.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the user does not exist
    ///
    async fn push_notification(
        &self,
        user_id: Uuid,
        notification: Notification,
    ) -> Result<(), Error>;

    ///
    /// Marks one notification as read.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - the user does not exist
    ///     - no notification with the id is in the user's inbox
    ///
    async fn set_notification_read(&self, user_id: Uuid, notification_id: &str)
        -> Result<(), Error>;

    ///
    /// Marks every notification of the user as read. Safe to call on an
    /// empty or already fully read inbox.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the user does not exist
    ///
    async fn set_all_notifications_read(&self, user_id: Uuid) -> Result<(), Error>;

    ///
    /// Marks the matching notifications as read in one write.
    /// Ids that are not present in the inbox are ignored.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the user does not exist
    ///
    async fn set_many_notifications_read(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error>;

    ///
    /// Removes one notification from the user's inbox.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - the user does not exist
    ///     - no notification with the id is in the user's inbox
    ///
    async fn pull_notification(&self, user_id: Uuid, notification_id: &str) -> Result<(), Error>;

    ///
    /// Removes the matching notifications in one write.
    /// Ids that are not present in the inbox are ignored.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the user does not exist
    ///
    async fn pull_many_notifications(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error>;

    ///
    /// Replaces the user's inbox with an empty array.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the user does not exist
    ///
    async fn clear_notifications(&self, user_id: Uuid) -> Result<(), Error>;
}
