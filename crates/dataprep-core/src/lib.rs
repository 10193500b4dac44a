//! # dataprep-core
//!
//! Core crate for dataprep. Contains the CMIS object model, the session
//! traits implemented by protocol bindings, configuration schemas, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other dataprep crates.

pub mod config;
pub mod error;
pub mod exception;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use exception::{CmisError, CmisExceptionKind};
pub use result::{AppResult, CmisResult};
