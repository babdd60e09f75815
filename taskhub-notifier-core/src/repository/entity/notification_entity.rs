use crate::repository::dto::Notification;
use bson::DateTime;
use notifier_contract::NotificationKind;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// One element of the `notifications` array embedded in a user document.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationEntity {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub date: DateTime,
    pub read: bool,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub member_id: bson::Uuid,
}

impl From<Notification> for NotificationEntity {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            date: DateTime::from(notification.date),
            read: notification.read,
            project_id: notification.project_id,
            task_id: notification.task_id,
            member_id: bson::Uuid::from(notification.member_id),
        }
    }
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            kind: entity.kind,
            date: OffsetDateTime::from(entity.date),
            read: entity.read,
            project_id: entity.project_id,
            task_id: entity.task_id,
            member_id: Uuid::from(entity.member_id),
        }
    }
}
