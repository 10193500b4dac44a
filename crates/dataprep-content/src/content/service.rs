//! Create and delete site folders and documents over CMIS.

use std::sync::Arc;

use tracing::{info, warn};

use dataprep_core::config::server::ServerConfig;
use dataprep_core::error::AppError;
use dataprep_core::exception::{CmisError, CmisExceptionKind};
use dataprep_core::result::{AppResult, CmisResult};
use dataprep_core::traits::session::SessionProvider;
use dataprep_core::types::properties;
use dataprep_core::types::{
    CmisObject, ContentStream, Document, DocumentType, Folder, UnfileObject, VersioningState,
};

use crate::util::{self, CmisUtil};
use crate::validation::require_present;

const FOLDER_TYPE: &str = "cmis:folder";
const DOCUMENT_TYPE: &str = "cmis:document";

/// Prepares content in Alfresco sites for tests.
///
/// Every call opens its own session with the given credentials. Known
/// protocol errors come back as [`ErrorKind::CmisRuntime`] with a message
/// naming the site, folder, or document involved; anything else is passed
/// through as [`ErrorKind::Cmis`].
///
/// [`ErrorKind::CmisRuntime`]: dataprep_core::error::ErrorKind::CmisRuntime
/// [`ErrorKind::Cmis`]: dataprep_core::error::ErrorKind::Cmis
#[derive(Debug, Clone)]
pub struct ContentService {
    util: CmisUtil,
}

impl ContentService {
    /// Create a content service over a session provider.
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self {
            util: CmisUtil::new(provider),
        }
    }

    /// Create a content service talking to the browser binding in `config`.
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        Ok(Self {
            util: CmisUtil::from_config(config)?,
        })
    }

    /// Session and lookup helpers this service is built on.
    pub fn util(&self) -> &CmisUtil {
        &self.util
    }

    /// Create a folder in the site's document library.
    pub async fn create_folder(
        &self,
        user_name: &str,
        password: &str,
        folder_name: &str,
        site_name: &str,
    ) -> AppResult<Folder> {
        require_present(&[user_name, password, folder_name, site_name])?;

        let properties = properties::named(FOLDER_TYPE, folder_name);
        let session = self.util.get_cmis_session(user_name, password).await?;

        let created: CmisResult<Folder> = async {
            let library = util::document_library(session.as_ref(), site_name).await?;
            session.create_folder(library.id(), &properties).await
        }
        .await;

        let folder = created.map_err(|e| match e.kind {
            CmisExceptionKind::ObjectNotFound => {
                AppError::cmis_runtime(format!("Invalid Site {site_name}"), e)
            }
            CmisExceptionKind::ContentAlreadyExists => {
                AppError::cmis_runtime(format!("Folder already exists {folder_name}"), e)
            }
            _ => e.into(),
        })?;

        info!(site = site_name, folder = folder_name, id = folder.id(), "Folder created");
        Ok(folder)
    }

    /// Delete an empty folder from the site's document library.
    pub async fn delete_folder(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        folder_name: &str,
    ) -> AppResult<()> {
        require_present(&[user_name, password, folder_name])?;

        let deleted: CmisResult<()> = async {
            let session = self.util.get_cmis_session(user_name, password).await?;
            let folder_id = util::node_ref_in(session.as_ref(), site_name, folder_name).await?;
            let folder = session.get_object(&folder_id).await?;
            session.delete(folder.id(), true).await
        }
        .await;

        deleted.map_err(|e| match e.kind {
            CmisExceptionKind::InvalidArgument => {
                AppError::cmis_runtime(format!("Invalid folder {folder_name}"), e)
            }
            CmisExceptionKind::Constraint => {
                AppError::cmis_runtime("Cannot delete folder with at least one child", e)
            }
            _ => e.into(),
        })?;

        info!(site = site_name, folder = folder_name, "Folder deleted");
        Ok(())
    }

    /// Create a document in the site's document library.
    pub async fn create_document(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        doc_type: DocumentType,
        doc_name: &str,
        doc_content: &str,
    ) -> AppResult<Document> {
        require_present(&[user_name, password, doc_name, site_name])?;

        let properties = properties::named(DOCUMENT_TYPE, doc_name);
        let session = self.util.get_cmis_session(user_name, password).await?;

        let created: CmisResult<Document> = async {
            let content = ContentStream::from_text(doc_name, doc_type.mime_type(), doc_content);
            let library = util::document_library(session.as_ref(), site_name).await?;
            session
                .create_document(library.id(), &properties, content, VersioningState::Major)
                .await
        }
        .await;

        let document = created.map_err(|e| document_error(e, site_name, doc_name, None))?;

        info!(site = site_name, document = doc_name, id = document.id(), "Document created");
        Ok(document)
    }

    /// Create a document inside a folder of the site's document library.
    ///
    /// Returns `None` when `folder_name` resolves to something other than a
    /// folder.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_document_in_folder(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        folder_name: &str,
        doc_type: DocumentType,
        doc_name: &str,
        doc_content: &str,
    ) -> AppResult<Option<Document>> {
        require_present(&[user_name, password, doc_name, site_name])?;

        let properties = properties::named(DOCUMENT_TYPE, doc_name);
        let session = self.util.get_cmis_session(user_name, password).await?;

        let created: CmisResult<Option<Document>> = async {
            let content = ContentStream::from_text(doc_name, doc_type.mime_type(), doc_content);
            let folder_id = util::node_ref_in(session.as_ref(), site_name, folder_name).await?;
            match session.get_object(&folder_id).await? {
                CmisObject::Folder(folder) => session
                    .create_document(folder.id(), &properties, content, VersioningState::Major)
                    .await
                    .map(Some),
                _ => Ok(None),
            }
        }
        .await;

        let document =
            created.map_err(|e| document_error(e, site_name, doc_name, Some(folder_name)))?;

        match &document {
            Some(d) => info!(
                site = site_name,
                folder = folder_name,
                document = doc_name,
                id = d.id(),
                "Document created in folder"
            ),
            None => warn!(
                site = site_name,
                folder = folder_name,
                "Target is not a folder, no document created"
            ),
        }
        Ok(document)
    }

    /// Delete a document from the site's document library.
    pub async fn delete_document(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        doc_name: &str,
    ) -> AppResult<()> {
        require_present(&[user_name, password, doc_name, site_name])?;

        let deleted: CmisResult<()> = async {
            let session = self.util.get_cmis_session(user_name, password).await?;
            let doc_id = util::node_ref_in(session.as_ref(), site_name, doc_name).await?;
            let document = session.get_object(&doc_id).await?;
            session.delete(document.id(), true).await
        }
        .await;

        deleted.map_err(|e| match e.kind {
            CmisExceptionKind::ObjectNotFound => {
                AppError::cmis_runtime(format!("Invalid site {site_name}"), e)
            }
            _ => e.into(),
        })?;

        info!(site = site_name, document = doc_name, "Document deleted");
        Ok(())
    }

    /// Delete a folder and everything below it.
    ///
    /// Deletion continues past children the repository refuses to delete;
    /// their ids are returned.
    pub async fn delete_tree(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        folder_name: &str,
    ) -> AppResult<Vec<String>> {
        require_present(&[user_name, password, folder_name])?;

        let deleted: CmisResult<Option<Vec<String>>> = async {
            let session = self.util.get_cmis_session(user_name, password).await?;
            let folder_id = util::node_ref_in(session.as_ref(), site_name, folder_name).await?;
            match session.get_object(&folder_id).await? {
                CmisObject::Folder(folder) => session
                    .delete_tree(folder.id(), true, UnfileObject::Delete, true)
                    .await
                    .map(Some),
                _ => Ok(None),
            }
        }
        .await;

        let failed = deleted
            .map_err(|e| match e.kind {
                CmisExceptionKind::InvalidArgument => {
                    AppError::cmis_runtime(format!("Invalid folder {folder_name}"), e)
                }
                _ => e.into(),
            })?
            .ok_or_else(|| {
                AppError::illegal_argument("Object does not exist or is not a folder")
            })?;

        if failed.is_empty() {
            info!(site = site_name, folder = folder_name, "Folder tree deleted");
        } else {
            warn!(
                site = site_name,
                folder = folder_name,
                failed = ?failed,
                "Folder tree partially deleted"
            );
        }
        Ok(failed)
    }

    /// Id of the document library child named `content_name`; empty when absent.
    pub async fn get_node_ref(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        content_name: &str,
    ) -> AppResult<String> {
        require_present(&[user_name, password, site_name, content_name])?;
        Ok(self
            .util
            .get_node_ref(user_name, password, site_name, content_name)
            .await?)
    }
}

/// Translate errors from document creation.
fn document_error(
    e: CmisError,
    site_name: &str,
    doc_name: &str,
    folder_name: Option<&str>,
) -> AppError {
    match (e.kind, folder_name) {
        (CmisExceptionKind::ObjectNotFound, _) => {
            AppError::cmis_runtime(format!("Invalid Site {site_name}"), e)
        }
        (CmisExceptionKind::ContentAlreadyExists, _) => {
            AppError::cmis_runtime(format!("Document already exists {doc_name}"), e)
        }
        (CmisExceptionKind::InvalidArgument, Some(folder)) => {
            AppError::cmis_runtime(format!("Invalid folder {folder}"), e)
        }
        _ => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataprep_core::error::ErrorKind;

    #[test]
    fn test_document_error_translation() {
        let err = document_error(
            CmisError::new(CmisExceptionKind::ContentAlreadyExists, "dup"),
            "alpha",
            "a.txt",
            None,
        );
        assert_eq!(err.kind, ErrorKind::CmisRuntime);
        assert_eq!(err.message, "Document already exists a.txt");

        // Invalid arguments only name the folder when there is one.
        let err = document_error(
            CmisError::new(CmisExceptionKind::InvalidArgument, "bad id"),
            "alpha",
            "a.txt",
            None,
        );
        assert_eq!(err.kind, ErrorKind::Cmis);

        let err = document_error(
            CmisError::new(CmisExceptionKind::InvalidArgument, "bad id"),
            "alpha",
            "a.txt",
            Some("Reports"),
        );
        assert_eq!(err.message, "Invalid folder Reports");
    }

    #[test]
    fn test_unmapped_errors_pass_through() {
        let err = document_error(
            CmisError::new(CmisExceptionKind::PermissionDenied, "nope"),
            "alpha",
            "a.txt",
            Some("Reports"),
        );
        assert_eq!(err.kind, ErrorKind::Cmis);
        assert_eq!(err.cmis_kind(), Some(CmisExceptionKind::PermissionDenied));
    }
}
