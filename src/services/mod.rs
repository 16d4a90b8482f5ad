//! Application services sitting between HTTP routes and the repository.

pub mod errors;
pub mod users;

pub use errors::{ServiceError, ServiceResult};
