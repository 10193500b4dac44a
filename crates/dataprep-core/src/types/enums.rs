//! Enumerations from the CMIS domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base type of a CMIS object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseTypeId {
    /// `cmis:document`
    Document,
    /// `cmis:folder`
    Folder,
    /// `cmis:relationship`
    Relationship,
    /// `cmis:policy`
    Policy,
    /// `cmis:item`
    Item,
    /// `cmis:secondary`
    Secondary,
    /// Anything the repository reports that is not a CMIS 1.1 base type.
    Other(String),
}

impl BaseTypeId {
    /// Property value used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "cmis:document",
            Self::Folder => "cmis:folder",
            Self::Relationship => "cmis:relationship",
            Self::Policy => "cmis:policy",
            Self::Item => "cmis:item",
            Self::Secondary => "cmis:secondary",
            Self::Other(s) => s,
        }
    }

    /// Parse a `cmis:baseTypeId` property value.
    pub fn parse(value: &str) -> Self {
        match value {
            "cmis:document" => Self::Document,
            "cmis:folder" => Self::Folder,
            "cmis:relationship" => Self::Relationship,
            "cmis:policy" => Self::Policy,
            "cmis:item" => Self::Item,
            "cmis:secondary" => Self::Secondary,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BaseTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versioning state a document is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersioningState {
    /// Not versionable.
    None,
    /// A major version.
    Major,
    /// A minor version.
    Minor,
    /// Checked out on creation.
    CheckedOut,
}

impl VersioningState {
    /// Parameter value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::CheckedOut => "checkedout",
        }
    }
}

/// What happens to objects filed in a deleted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnfileObject {
    /// Unfile objects that are also filed elsewhere.
    Unfile,
    /// Delete objects that are only filed in the tree.
    DeleteSingleFiled,
    /// Delete every object in the tree.
    Delete,
}

impl UnfileObject {
    /// Parameter value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfile => "unfile",
            Self::DeleteSingleFiled => "deletesinglefiled",
            Self::Delete => "delete",
        }
    }
}
