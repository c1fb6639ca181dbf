//! Convenience result type alias for VaultKit.

use crate::error::AppError;

/// A specialized `Result` type for VaultKit operations.
pub type AppResult<T> = Result<T, AppError>;
