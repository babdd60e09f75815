mod bulk_update;
mod notification_list;
mod updated_notification;

pub use bulk_update::*;
pub use notification_list::*;
pub use updated_notification::*;
