pub mod error;
pub mod posts;
pub mod users;

pub use error::{ApiError, ApiResult};
