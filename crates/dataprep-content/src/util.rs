//! Session acquisition and node lookup shared by content operations.

use std::sync::Arc;

use tracing::debug;

use dataprep_cmis::BrowserSessionProvider;
use dataprep_core::config::server::ServerConfig;
use dataprep_core::exception::{CmisError, CmisExceptionKind};
use dataprep_core::result::{AppResult, CmisResult};
use dataprep_core::traits::session::{CmisSession, SessionProvider};
use dataprep_core::types::Folder;

/// Children fetched per page when scanning a document library.
const CHILDREN_PAGE_SIZE: u32 = 100;

/// Path of a site's document library.
pub fn document_library_path(site_name: &str) -> String {
    format!("/Sites/{site_name}/documentLibrary")
}

/// Opens sessions and resolves site content to node ids.
#[derive(Debug, Clone)]
pub struct CmisUtil {
    provider: Arc<dyn SessionProvider>,
}

impl CmisUtil {
    /// Create a utility over any session provider.
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self { provider }
    }

    /// Create a utility talking to the browser binding described by `config`.
    pub fn from_config(config: &ServerConfig) -> AppResult<Self> {
        Ok(Self::new(Arc::new(BrowserSessionProvider::new(config)?)))
    }

    /// Open a session for `user_name`.
    pub async fn get_cmis_session(
        &self,
        user_name: &str,
        password: &str,
    ) -> CmisResult<Arc<dyn CmisSession>> {
        self.provider.open_session(user_name, password).await
    }

    /// Id of the document library child named `content_name`, without its
    /// version suffix. Empty when the library has no such child.
    pub async fn get_node_ref(
        &self,
        user_name: &str,
        password: &str,
        site_name: &str,
        content_name: &str,
    ) -> CmisResult<String> {
        let session = self.get_cmis_session(user_name, password).await?;
        node_ref_in(session.as_ref(), site_name, content_name).await
    }
}

/// Fetch a site's document library.
pub async fn document_library(session: &dyn CmisSession, site_name: &str) -> CmisResult<Folder> {
    let path = document_library_path(site_name);
    session
        .get_object_by_path(&path)
        .await?
        .into_folder()
        .ok_or_else(|| {
            CmisError::new(
                CmisExceptionKind::ObjectNotFound,
                format!("{path} is not a folder"),
            )
        })
}

/// [`CmisUtil::get_node_ref`] over an already open session.
pub async fn node_ref_in(
    session: &dyn CmisSession,
    site_name: &str,
    content_name: &str,
) -> CmisResult<String> {
    let library = document_library(session, site_name).await?;

    let mut skip_count = 0u64;
    loop {
        let page = session
            .get_children(library.id(), CHILDREN_PAGE_SIZE, skip_count)
            .await?;
        if let Some(found) = page.objects.iter().find(|o| o.name() == content_name) {
            let node_ref = found.data().id_without_version().to_string();
            debug!(site = site_name, name = content_name, node_ref = %node_ref, "Resolved node ref");
            return Ok(node_ref);
        }
        if !page.has_more_items || page.objects.is_empty() {
            break;
        }
        skip_count += page.objects.len() as u64;
    }

    debug!(site = site_name, name = content_name, "No matching child in document library");
    Ok(String::new())
}
