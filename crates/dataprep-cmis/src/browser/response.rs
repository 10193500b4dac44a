//! Mapping of HTTP responses to results.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use dataprep_core::exception::{CmisError, CmisExceptionKind};
use dataprep_core::result::CmisResult;

use super::wire::{ErrorResponse, FailedToDelete};

/// Pass successful responses through; turn error responses into [`CmisError`].
pub async fn check(response: Response) -> CmisResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = error_from_body(status.as_u16(), &body);
    debug!(status = status.as_u16(), exception = %err.kind, "CMIS call failed");
    Err(err)
}

/// Decode a successful JSON body.
pub async fn json<T: DeserializeOwned>(response: Response) -> CmisResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| CmisError::connection(format!("Unreadable repository response: {e}"), e))
}

/// Build the error for a failed response from its status and body.
///
/// The `exception` field of a JSON body wins; otherwise the status decides.
pub fn error_from_body(status: u16, body: &str) -> CmisError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => {
            let kind = CmisExceptionKind::from_exception_name(&parsed.exception)
                .unwrap_or_else(|| CmisExceptionKind::from_status(status));
            CmisError::new(kind, parsed.message).with_status(status)
        }
        Err(_) => {
            let message = if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                body.trim().to_string()
            };
            CmisError::new(CmisExceptionKind::from_status(status), message).with_status(status)
        }
    }
}

/// Ids left behind by a `deleteTree` call, from its status and body.
///
/// A partial failure arrives as an error status carrying `{"ids": [...]}`;
/// any other failure is mapped like every other error response.
pub fn failed_to_delete(status: u16, body: &str) -> CmisResult<Vec<String>> {
    if body.trim().is_empty() {
        if (200..300).contains(&status) {
            return Ok(Vec::new());
        }
        return Err(error_from_body(status, body));
    }

    match serde_json::from_str::<FailedToDelete>(body) {
        Ok(failed) if (200..300).contains(&status) || !failed.ids.is_empty() => Ok(failed.ids),
        Ok(_) => Err(error_from_body(status, body)),
        Err(e) if (200..300).contains(&status) => Err(CmisError::connection(
            format!("Unreadable deleteTree response: {e}"),
            e,
        )),
        Err(_) => Err(error_from_body(status, body)),
    }
}

/// Wrap a transport failure.
pub fn transport(err: reqwest::Error) -> CmisError {
    CmisError::connection(format!("Repository request failed: {err}"), err)
}
