use crate::Notification;
use serde::{Deserialize, Serialize};

///
/// Pagination block returned alongside every list response.
/// `pages` is `ceil(total / limit)` over the filtered set.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// Response of `GET /notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    pub success: bool,
    pub data: Vec<Notification>,
    pub pagination: PaginationInfo,
    pub unread_count: u64,
}

/// Response of `POST /notifications` (201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedNotificationResponse {
    pub success: bool,
    pub data: Notification,
}

///
/// Response of `PUT /notifications/:id/read`. Carries the caller's
/// authoritative unread count after the write so clients never have to
/// adjust their own counter.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReadResponse {
    pub success: bool,
    pub data: Notification,
    pub unread_count: u64,
}

/// Response of `PUT /notifications/read-all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponse {
    pub success: bool,
    pub message: String,
    pub unread_count: u64,
}

/// Response of `DELETE /notifications/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDeletedResponse {
    pub success: bool,
    pub message: String,
    pub unread_count: u64,
}

/// Response of `DELETE /notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsClearedResponse {
    pub success: bool,
    pub message: String,
}

/// Response of `PUT /notifications/bulk-read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReadResponse {
    pub success: bool,
    pub message: String,
    pub updated: u64,
    pub unread_count: u64,
}

/// Response of `DELETE /notifications/bulk-delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted: u64,
    pub unread_count: u64,
}

///
/// Error envelope used for every non-2xx response.
/// `errors` is present only for validation failures.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// One failed field of a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
