use notifier_contract::NotificationKind;
use serde::Deserialize;

///
/// Query parameters of the list endpoint.
///
/// `page` starts at 1. Filters on `read` and `kind` narrow the set
/// before pagination is applied.
///
#[derive(Debug, Deserialize)]
pub struct NotificationFilters {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub read: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<NotificationKind>,
}

impl Default for NotificationFilters {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            read: None,
            kind: None,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}
