//! Argument checks shared by every operation.

use dataprep_core::error::AppError;
use dataprep_core::result::AppResult;

/// Fail with "Parameter missing" when any value is empty.
pub fn require_present(values: &[&str]) -> AppResult<()> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(AppError::parameter_missing());
    }
    Ok(())
}
