use notifier_contract::{Notification, PaginationInfo};

///
/// One page of a user's inbox. `unread_count` is computed over the
/// whole filtered set, not only the returned slice.
///
pub struct NotificationList {
    pub notifications: Vec<Notification>,
    pub pagination: PaginationInfo,
    pub unread_count: u64,
}
