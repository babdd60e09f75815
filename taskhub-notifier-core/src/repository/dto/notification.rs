use notifier_contract::NotificationKind;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub date: OffsetDateTime,
    pub read: bool,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub member_id: Uuid,
}

impl From<Notification> for notifier_contract::Notification {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            message: notification.message,
            kind: notification.kind,
            date: notification.date,
            read: notification.read,
            project_id: notification.project_id,
            task_id: notification.task_id,
            member_id: notification.member_id,
        }
    }
}
