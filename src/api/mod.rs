//! REST API module.
//!
//! Collections are served as bare JSON arrays, matching the web client's contract.
//! Errors use the envelope from [`crate::errors`].

mod collections;
mod health;
mod posts;

pub use collections::*;
pub use health::*;
pub use posts::*;

use crate::errors::AppError;

/// Result type for handlers that can fail.
pub type ApiResult<T> = Result<T, AppError>;
