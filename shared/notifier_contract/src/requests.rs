use crate::NotificationKind;
use serde::{Deserialize, Serialize};

///
/// Body of `POST /notifications`.
///
/// `kind` and `user_id` are carried as plain strings so the server can
/// report field level validation errors instead of rejecting the whole
/// body during deserialization.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

///
/// Body of the bulk mark-read and bulk delete calls.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationIdsRequest {
    pub notification_ids: Vec<String>,
}

///
/// Query parameters of `GET /notifications`. All optional; the server
/// applies its own defaults for `page` and `limit`.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_request_json_deserialize_ok() {
        let json = r#"{
            "title": "New task",
            "message": "You were assigned a task",
            "type": "task",
            "userId": "379a73e6-91dd-48a3-a652-002d34c43670",
            "taskId": "t-3"
        }"#;

        let request = serde_json::from_str::<CreateNotificationRequest>(json).unwrap();

        assert_eq!(request.kind, "task");
        assert_eq!(request.task_id.as_deref(), Some("t-3"));
        assert!(request.project_id.is_none());
    }

    #[test]
    fn list_filters_query_string_skips_unset() {
        let filters = ListFilters {
            page: Some(2),
            kind: Some(NotificationKind::Team),
            ..Default::default()
        };

        let query = serde_urlencoded(&filters);

        assert_eq!(query, "page=2&type=team");
    }

    fn serde_urlencoded(filters: &ListFilters) -> String {
        // serde_json's object model is enough to render the pairs here
        let value = serde_json::to_value(filters).unwrap();
        value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| match v {
                serde_json::Value::String(s) => format!("{k}={s}"),
                other => format!("{k}={other}"),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
