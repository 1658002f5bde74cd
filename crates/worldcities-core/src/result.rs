//! Convenience result type alias for WorldCities.

use crate::error::AppError;

/// A specialized `Result` type for WorldCities operations.
pub type AppResult<T> = Result<T, AppError>;
