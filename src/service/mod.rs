//! Resource accessors over the [`Executor`] seam.

pub mod categories;
pub mod comments;
mod executor;
pub mod reviews;
pub mod users;
mod validation;
pub use executor::Executor;
pub use validation::{NewComment, VoteUpdate};
