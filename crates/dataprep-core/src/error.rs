//! Unified application error types for dataprep.
//!
//! Protocol failures arrive as [`CmisError`] and are either translated into
//! a [`ErrorKind::CmisRuntime`] error with a contextual message, or passed
//! through unchanged as [`ErrorKind::Cmis`].

use std::fmt;
use thiserror::Error;

use crate::exception::{CmisError, CmisExceptionKind};

/// Top-level error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A required parameter was missing or an argument was unusable.
    IllegalArgument,
    /// A known protocol error, rethrown with a contextual message.
    CmisRuntime,
    /// A protocol error that no operation translated.
    Cmis,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalArgument => write!(f, "ILLEGAL_ARGUMENT"),
            Self::CmisRuntime => write!(f, "CMIS_RUNTIME"),
            Self::Cmis => write!(f, "CMIS"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified application error used throughout dataprep.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an illegal-argument error.
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalArgument, message)
    }

    /// The error raised when a required parameter is empty.
    pub fn parameter_missing() -> Self {
        Self::illegal_argument("Parameter missing")
    }

    /// Wrap a protocol error in a runtime error carrying `message`.
    pub fn cmis_runtime(message: impl Into<String>, cause: CmisError) -> Self {
        Self::with_source(ErrorKind::CmisRuntime, message, cause)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// The protocol error this error wraps, if any.
    pub fn cmis_cause(&self) -> Option<&CmisError> {
        self.source
            .as_deref()
            .and_then(|s| s.downcast_ref::<CmisError>())
    }

    /// The exception kind of the wrapped protocol error, if any.
    pub fn cmis_kind(&self) -> Option<CmisExceptionKind> {
        self.cmis_cause().map(|e| e.kind)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<CmisError> for AppError {
    fn from(err: CmisError) -> Self {
        Self::with_source(ErrorKind::Cmis, err.to_string(), err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
