pub mod api;
pub mod cache;

mod error;

pub use error::*;
