//! # dataprep-content
//!
//! Creates and deletes folders and documents in Alfresco sites over CMIS,
//! for use by integration tests that need repository content in place.

pub mod content;
pub mod util;
pub mod validation;

pub use content::service::ContentService;
pub use util::CmisUtil;
