use super::NotificationEntity;
use serde::Deserialize;

///
/// Projection of a user document down to its embedded inbox.
///
#[derive(Deserialize)]
pub struct UserFindEntity {
    #[serde(default)]
    pub notifications: Vec<NotificationEntity>,
}
