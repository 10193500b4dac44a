//! Protocol-level CMIS errors.
//!
//! Names follow the exception identifiers of the CMIS 1.1 browser binding,
//! which the server sends in the `exception` field of an error response.

use std::fmt;
use thiserror::Error;

/// The CMIS exception a repository reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CmisExceptionKind {
    /// `objectNotFound`
    ObjectNotFound,
    /// `invalidArgument`
    InvalidArgument,
    /// `contentAlreadyExists`
    ContentAlreadyExists,
    /// `constraint`
    Constraint,
    /// `nameConstraintViolation`
    NameConstraintViolation,
    /// `permissionDenied`
    PermissionDenied,
    /// `unauthorized`
    Unauthorized,
    /// `notSupported`
    NotSupported,
    /// `updateConflict`
    UpdateConflict,
    /// `versioning`
    Versioning,
    /// `storage`
    Storage,
    /// `filterNotValid`
    FilterNotValid,
    /// `runtime`
    Runtime,
    /// The repository could not be reached or answered with something unreadable.
    Connection,
}

impl CmisExceptionKind {
    /// Wire name of the exception.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ObjectNotFound => "objectNotFound",
            Self::InvalidArgument => "invalidArgument",
            Self::ContentAlreadyExists => "contentAlreadyExists",
            Self::Constraint => "constraint",
            Self::NameConstraintViolation => "nameConstraintViolation",
            Self::PermissionDenied => "permissionDenied",
            Self::Unauthorized => "unauthorized",
            Self::NotSupported => "notSupported",
            Self::UpdateConflict => "updateConflict",
            Self::Versioning => "versioning",
            Self::Storage => "storage",
            Self::FilterNotValid => "filterNotValid",
            Self::Runtime => "runtime",
            Self::Connection => "connection",
        }
    }

    /// Parse the `exception` field of a browser binding error response.
    pub fn from_exception_name(name: &str) -> Option<Self> {
        let kind = match name {
            "objectNotFound" => Self::ObjectNotFound,
            "invalidArgument" => Self::InvalidArgument,
            "contentAlreadyExists" => Self::ContentAlreadyExists,
            "constraint" => Self::Constraint,
            "nameConstraintViolation" => Self::NameConstraintViolation,
            "permissionDenied" => Self::PermissionDenied,
            "unauthorized" => Self::Unauthorized,
            "notSupported" => Self::NotSupported,
            "updateConflict" => Self::UpdateConflict,
            "versioning" => Self::Versioning,
            "storage" => Self::Storage,
            "filterNotValid" => Self::FilterNotValid,
            "runtime" => Self::Runtime,
            _ => return None,
        };
        Some(kind)
    }

    /// Exception implied by an HTTP status when the body names none.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidArgument,
            401 => Self::Unauthorized,
            403 => Self::PermissionDenied,
            404 => Self::ObjectNotFound,
            405 => Self::NotSupported,
            409 => Self::Constraint,
            _ => Self::Runtime,
        }
    }
}

impl fmt::Display for CmisExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error reported by a CMIS repository or its transport.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct CmisError {
    /// The reported exception.
    pub kind: CmisExceptionKind,
    /// Message sent by the repository.
    pub message: String,
    /// HTTP status of the response, when there was one.
    pub status: Option<u16>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CmisError {
    /// Create a new protocol error.
    pub fn new(kind: CmisExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Attach the HTTP status the error arrived with.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Create a transport error with an underlying cause.
    pub fn connection(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: CmisExceptionKind::Connection,
            message: message.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create an `invalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(CmisExceptionKind::InvalidArgument, message)
    }

    /// Create a `runtime` error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(CmisExceptionKind::Runtime, message)
    }
}
