//! Property maps sent when creating objects.

use std::collections::BTreeMap;

/// Identifiers of the CMIS properties this crate reads or sets.
pub mod property_ids {
    pub const OBJECT_ID: &str = "cmis:objectId";
    pub const OBJECT_TYPE_ID: &str = "cmis:objectTypeId";
    pub const BASE_TYPE_ID: &str = "cmis:baseTypeId";
    pub const NAME: &str = "cmis:name";
    pub const CREATED_BY: &str = "cmis:createdBy";
    pub const CREATION_DATE: &str = "cmis:creationDate";
    pub const LAST_MODIFIED_BY: &str = "cmis:lastModifiedBy";
    pub const LAST_MODIFICATION_DATE: &str = "cmis:lastModificationDate";
    pub const PATH: &str = "cmis:path";
    pub const PARENT_ID: &str = "cmis:parentId";
    pub const CONTENT_STREAM_MIME_TYPE: &str = "cmis:contentStreamMimeType";
    pub const CONTENT_STREAM_LENGTH: &str = "cmis:contentStreamLength";
    pub const CONTENT_STREAM_FILE_NAME: &str = "cmis:contentStreamFileName";
    pub const VERSION_LABEL: &str = "cmis:versionLabel";
    pub const VERSION_SERIES_ID: &str = "cmis:versionSeriesId";
}

/// Single-valued string properties, ordered by id.
pub type Properties = BTreeMap<String, String>;

/// Properties for a new object of `object_type_id` named `name`.
pub fn named(object_type_id: &str, name: &str) -> Properties {
    let mut properties = Properties::new();
    properties.insert(property_ids::OBJECT_TYPE_ID.to_string(), object_type_id.to_string());
    properties.insert(property_ids::NAME.to_string(), name.to_string());
    properties
}
