//! Repository descriptions returned when a session is opened.

use serde::{Deserialize, Serialize};

/// The subset of CMIS repository info a session keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    /// Repository identifier.
    pub repository_id: String,
    /// Display name.
    #[serde(default)]
    pub repository_name: String,
    /// Product name, e.g. `Alfresco Community`.
    #[serde(default)]
    pub product_name: String,
    /// Product version.
    #[serde(default)]
    pub product_version: String,
    /// CMIS version the repository speaks.
    #[serde(default)]
    pub cmis_version_supported: String,
    /// Id of the root folder.
    #[serde(default)]
    pub root_folder_id: String,
    /// Browser binding URL of the root folder.
    #[serde(default)]
    pub root_folder_url: String,
    /// Browser binding URL of the repository.
    #[serde(default)]
    pub repository_url: String,
}
