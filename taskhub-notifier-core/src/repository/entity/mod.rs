mod notification_entity;
mod user_find_entity;

pub use notification_entity::*;
pub use user_find_entity::*;
