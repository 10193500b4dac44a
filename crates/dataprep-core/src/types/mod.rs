//! CMIS object model shared by bindings and services.

pub mod content;
pub mod document_type;
pub mod enums;
pub mod object;
pub mod properties;
pub mod repository;

pub use content::ContentStream;
pub use document_type::DocumentType;
pub use enums::{BaseTypeId, UnfileObject, VersioningState};
pub use object::{ChildrenPage, CmisObject, Document, Folder, ObjectData};
pub use properties::{Properties, property_ids};
pub use repository::RepositoryInfo;
