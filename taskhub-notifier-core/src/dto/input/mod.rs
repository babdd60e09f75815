mod notification_filters;

pub use notification_filters::*;
