//!
//! Wire contract shared by the notifier service and its client cache.
//!
//! Every type here maps 1:1 to a JSON body travelling between the two,
//! so field renames happen in exactly one place.
//!

mod kind;
mod notification;
mod requests;
mod responses;

pub use kind::*;
pub use notification::*;
pub use requests::*;
pub use responses::*;
