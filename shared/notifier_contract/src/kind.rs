use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

///
/// Category of a notification. Serialized as a lowercase string
/// in JSON bodies and in the `type` query parameter.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Project,
    Team,
    Task,
    General,
}
