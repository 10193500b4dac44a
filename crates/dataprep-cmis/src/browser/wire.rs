//! JSON shapes of browser binding responses (succinct form).

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use dataprep_core::exception::CmisError;
use dataprep_core::result::CmisResult;
use dataprep_core::types::{ChildrenPage, CmisObject, ObjectData};

/// A single object as returned with `succinct=true`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEnvelope {
    /// Property id to value.
    #[serde(default)]
    pub succinct_properties: BTreeMap<String, Value>,
}

impl ObjectEnvelope {
    /// Convert into the object model.
    pub fn into_object(self) -> CmisResult<CmisObject> {
        ObjectData::from_properties(self.succinct_properties)
            .map(CmisObject::from_object)
            .ok_or_else(|| CmisError::runtime("Repository returned an object without cmis:objectId"))
    }
}

/// Entry of a children listing.
#[derive(Debug, Deserialize)]
pub struct ChildEntry {
    /// The child itself.
    pub object: ObjectEnvelope,
}

/// Response of `cmisselector=children`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenResponse {
    /// Children on this page.
    #[serde(default)]
    pub objects: Vec<ChildEntry>,
    /// Whether more pages follow.
    #[serde(default)]
    pub has_more_items: bool,
    /// Total number of children.
    #[serde(default)]
    pub num_items: Option<u64>,
}

impl ChildrenResponse {
    /// Convert into the object model.
    pub fn into_page(self) -> CmisResult<ChildrenPage> {
        let objects = self
            .objects
            .into_iter()
            .map(|entry| entry.object.into_object())
            .collect::<CmisResult<Vec<_>>>()?;
        Ok(ChildrenPage {
            objects,
            has_more_items: self.has_more_items,
            num_items: self.num_items,
        })
    }
}

/// Body of an error response.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Exception name, e.g. `objectNotFound`.
    pub exception: String,
    /// Message from the repository.
    #[serde(default)]
    pub message: String,
}

/// Body of a `deleteTree` response that left objects behind.
#[derive(Debug, Deserialize)]
pub struct FailedToDelete {
    /// Ids of objects that were not deleted.
    #[serde(default)]
    pub ids: Vec<String>,
}
