//! Convenience result type aliases for dataprep.

use crate::error::AppError;
use crate::exception::CmisError;

/// A specialized `Result` type for dataprep operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;

/// Result of a single protocol call made through a [`CmisSession`](crate::traits::session::CmisSession).
pub type CmisResult<T> = Result<T, CmisError>;
