mod notifications_service;

pub use notifications_service::*;
