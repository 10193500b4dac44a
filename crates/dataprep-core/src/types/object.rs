//! Folders, documents, and the fields every CMIS object shares.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::BaseTypeId;
use super::properties::property_ids;

/// Fields common to every CMIS object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    /// Object id, possibly carrying a `;version` suffix.
    pub id: String,
    /// `cmis:name`.
    pub name: String,
    /// Base type.
    pub base_type: BaseTypeId,
    /// Concrete object type, e.g. `cmis:folder` or `D:cm:content`.
    pub object_type_id: String,
    /// Creator.
    pub created_by: Option<String>,
    /// Creation timestamp.
    pub creation_date: Option<DateTime<Utc>>,
    /// Last modifier.
    pub last_modified_by: Option<String>,
    /// Last modification timestamp.
    pub last_modification_date: Option<DateTime<Utc>>,
    /// Every property the repository returned, keyed by property id.
    pub properties: BTreeMap<String, Value>,
}

impl ObjectData {
    /// Build object data from a succinct property map.
    ///
    /// Returns `None` when the object id is absent.
    pub fn from_properties(properties: BTreeMap<String, Value>) -> Option<Self> {
        let id = string_property(&properties, property_ids::OBJECT_ID)?;
        let base_type = string_property(&properties, property_ids::BASE_TYPE_ID)
            .map(|s| BaseTypeId::parse(&s))
            .unwrap_or_else(|| BaseTypeId::Other(String::new()));
        let object_type_id = string_property(&properties, property_ids::OBJECT_TYPE_ID)
            .unwrap_or_else(|| base_type.as_str().to_string());

        Some(Self {
            id,
            name: string_property(&properties, property_ids::NAME).unwrap_or_default(),
            base_type,
            object_type_id,
            created_by: string_property(&properties, property_ids::CREATED_BY),
            creation_date: date_property(&properties, property_ids::CREATION_DATE),
            last_modified_by: string_property(&properties, property_ids::LAST_MODIFIED_BY),
            last_modification_date: date_property(
                &properties,
                property_ids::LAST_MODIFICATION_DATE,
            ),
            properties,
        })
    }

    /// Id with any `;version` suffix removed.
    pub fn id_without_version(&self) -> &str {
        strip_version(&self.id)
    }

    /// A string-valued property.
    pub fn string(&self, id: &str) -> Option<String> {
        string_property(&self.properties, id)
    }
}

/// A CMIS folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Common object fields.
    #[serde(flatten)]
    pub object: ObjectData,
    /// Absolute path in the repository.
    pub path: Option<String>,
    /// Id of the parent folder; `None` for the root.
    pub parent_id: Option<String>,
}

impl Folder {
    /// Wrap object data known to describe a folder.
    pub fn from_object(object: ObjectData) -> Self {
        Self {
            path: object.string(property_ids::PATH),
            parent_id: object.string(property_ids::PARENT_ID),
            object,
        }
    }

    /// Object id.
    pub fn id(&self) -> &str {
        &self.object.id
    }

    /// Folder name.
    pub fn name(&self) -> &str {
        &self.object.name
    }
}

/// A CMIS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Common object fields.
    #[serde(flatten)]
    pub object: ObjectData,
    /// MIME type of the content stream.
    pub content_stream_mime_type: Option<String>,
    /// Length of the content stream in bytes.
    pub content_stream_length: Option<u64>,
    /// File name of the content stream.
    pub content_stream_file_name: Option<String>,
    /// Version label, e.g. `1.0`.
    pub version_label: Option<String>,
    /// Id shared by all versions of the document.
    pub version_series_id: Option<String>,
}

impl Document {
    /// Wrap object data known to describe a document.
    pub fn from_object(object: ObjectData) -> Self {
        Self {
            content_stream_mime_type: object.string(property_ids::CONTENT_STREAM_MIME_TYPE),
            content_stream_length: object
                .properties
                .get(property_ids::CONTENT_STREAM_LENGTH)
                .and_then(Value::as_u64),
            content_stream_file_name: object.string(property_ids::CONTENT_STREAM_FILE_NAME),
            version_label: object.string(property_ids::VERSION_LABEL),
            version_series_id: object.string(property_ids::VERSION_SERIES_ID),
            object,
        }
    }

    /// Object id, including the version suffix when the repository sends one.
    pub fn id(&self) -> &str {
        &self.object.id
    }

    /// Document name.
    pub fn name(&self) -> &str {
        &self.object.name
    }
}

/// Any object a repository returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CmisObject {
    /// A folder.
    Folder(Folder),
    /// A document.
    Document(Document),
    /// Relationships, policies, items, and anything else.
    Other(ObjectData),
}

impl CmisObject {
    /// Classify object data by its base type.
    pub fn from_object(object: ObjectData) -> Self {
        match object.base_type {
            BaseTypeId::Folder => Self::Folder(Folder::from_object(object)),
            BaseTypeId::Document => Self::Document(Document::from_object(object)),
            _ => Self::Other(object),
        }
    }

    /// Common object fields.
    pub fn data(&self) -> &ObjectData {
        match self {
            Self::Folder(f) => &f.object,
            Self::Document(d) => &d.object,
            Self::Other(o) => o,
        }
    }

    /// Object id.
    pub fn id(&self) -> &str {
        &self.data().id
    }

    /// Object name.
    pub fn name(&self) -> &str {
        &self.data().name
    }

    /// The folder, if this object is one.
    pub fn into_folder(self) -> Option<Folder> {
        match self {
            Self::Folder(f) => Some(f),
            _ => None,
        }
    }

    /// The document, if this object is one.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Document(d) => Some(d),
            _ => None,
        }
    }
}

/// One page of a folder listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildrenPage {
    /// Children on this page.
    pub objects: Vec<CmisObject>,
    /// Whether more children follow.
    pub has_more_items: bool,
    /// Total number of children, when the repository reports it.
    pub num_items: Option<u64>,
}

/// Strip a `;version` suffix from an object id.
pub fn strip_version(id: &str) -> &str {
    id.split(';').next().unwrap_or(id)
}

fn string_property(properties: &BTreeMap<String, Value>, id: &str) -> Option<String> {
    match properties.get(id)? {
        Value::String(s) => Some(s.clone()),
        // Multi-valued properties come back as arrays; take the first value.
        Value::Array(values) => values.first().and_then(Value::as_str).map(str::to_string),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn date_property(properties: &BTreeMap<String, Value>, id: &str) -> Option<DateTime<Utc>> {
    match properties.get(id)? {
        Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        _ => None,
    }
}
