//! Convenience result type alias for Rollout.

use crate::error::AppError;

/// A specialized `Result` type for Rollout startup and configuration code.
pub type AppResult<T> = Result<T, AppError>;
