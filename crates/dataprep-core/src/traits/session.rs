//! CMIS session traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::CmisResult;
use crate::types::{
    ChildrenPage, CmisObject, ContentStream, Document, Folder, Properties, RepositoryInfo,
    UnfileObject, VersioningState,
};

/// An authenticated connection to one repository.
///
/// Implementations hold the credentials they were opened with and apply
/// them to every call. A session carries no other state.
#[async_trait]
pub trait CmisSession: Send + Sync + std::fmt::Debug + 'static {
    /// The repository this session is bound to.
    fn repository_info(&self) -> &RepositoryInfo;

    /// Fetch an object by id.
    async fn get_object(&self, object_id: &str) -> CmisResult<CmisObject>;

    /// Fetch an object by absolute path, e.g. `/Sites/alpha/documentLibrary`.
    async fn get_object_by_path(&self, path: &str) -> CmisResult<CmisObject>;

    /// List one page of a folder's children.
    async fn get_children(
        &self,
        folder_id: &str,
        max_items: u32,
        skip_count: u64,
    ) -> CmisResult<ChildrenPage>;

    /// Create a folder in `parent_id`.
    async fn create_folder(&self, parent_id: &str, properties: &Properties) -> CmisResult<Folder>;

    /// Create a document with content in `parent_id`.
    async fn create_document(
        &self,
        parent_id: &str,
        properties: &Properties,
        content: ContentStream,
        versioning_state: VersioningState,
    ) -> CmisResult<Document>;

    /// Delete a single object.
    async fn delete(&self, object_id: &str, all_versions: bool) -> CmisResult<()>;

    /// Delete a folder and everything below it.
    ///
    /// Returns the ids of objects the repository could not delete.
    async fn delete_tree(
        &self,
        folder_id: &str,
        all_versions: bool,
        unfile: UnfileObject,
        continue_on_failure: bool,
    ) -> CmisResult<Vec<String>>;
}

/// Opens sessions from user credentials.
#[async_trait]
pub trait SessionProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Authenticate and open a session against the configured repository.
    async fn open_session(&self, user_name: &str, password: &str)
    -> CmisResult<Arc<dyn CmisSession>>;
}
