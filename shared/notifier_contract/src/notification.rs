use crate::NotificationKind;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// A single inbox entry as it appears on the wire.
///
/// `id` is generated by the server at creation time and is the only
/// handle clients have for mark-read and delete calls. `member_id`
/// is the authenticated user that triggered the creation, never
/// supplied by the client.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub member_id: Uuid,
}
