use notifier_contract::Notification;

/// A mutated notification plus the caller's unread count after the write.
pub struct UpdatedNotification {
    pub notification: Notification,
    pub unread_count: u64,
}
