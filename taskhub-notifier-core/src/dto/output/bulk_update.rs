///
/// Outcome of a bulk operation. `affected` counts only the elements
/// that actually changed; ids absent from the caller's inbox are
/// ignored and do not contribute.
///
pub struct BulkUpdate {
    pub affected: u64,
    pub unread_count: u64,
}
