//! Opens browser binding sessions.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use dataprep_core::config::server::ServerConfig;
use dataprep_core::error::AppError;
use dataprep_core::exception::{CmisError, CmisExceptionKind};
use dataprep_core::result::{AppResult, CmisResult};
use dataprep_core::traits::session::{CmisSession, SessionProvider};
use dataprep_core::types::RepositoryInfo;

use super::response;
use super::session::BrowserSession;

/// Session provider for a repository's CMIS 1.1 browser binding.
#[derive(Debug, Clone)]
pub struct BrowserSessionProvider {
    /// Shared HTTP client.
    client: Client,
    /// URL of the browser binding service document.
    browser_url: String,
    /// Repository to bind sessions to; empty picks the first one offered.
    repository_id: String,
}

impl BrowserSessionProvider {
    /// Create a provider from server configuration.
    pub fn new(config: &ServerConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            browser_url: config.browser_url(),
            repository_id: config.repository_id.clone(),
        })
    }

    /// Create a provider for an explicit browser binding URL.
    pub fn with_url(browser_url: impl Into<String>, repository_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            browser_url: browser_url.into(),
            repository_id: repository_id.into(),
        }
    }

    /// URL of the browser binding service document.
    pub fn browser_url(&self) -> &str {
        &self.browser_url
    }

    /// Fetch every repository the service offers.
    pub async fn repositories(
        &self,
        user_name: &str,
        password: &str,
    ) -> CmisResult<BTreeMap<String, RepositoryInfo>> {
        debug!(url = %self.browser_url, user = user_name, "Fetching repository infos");
        let resp = self
            .client
            .get(&self.browser_url)
            .basic_auth(user_name, Some(password))
            .send()
            .await
            .map_err(response::transport)?;
        let resp = response::check(resp).await?;
        response::json(resp).await
    }

    fn select_repository(
        &self,
        mut repositories: BTreeMap<String, RepositoryInfo>,
    ) -> CmisResult<RepositoryInfo> {
        if self.repository_id.is_empty() {
            return repositories
                .into_values()
                .next()
                .ok_or_else(|| CmisError::new(CmisExceptionKind::ObjectNotFound, "No repositories available"));
        }
        repositories.remove(&self.repository_id).ok_or_else(|| {
            CmisError::new(
                CmisExceptionKind::ObjectNotFound,
                format!("Repository '{}' not found", self.repository_id),
            )
        })
    }

    /// Root folder URL of `repository`, derived from the service URL when absent.
    fn root_folder_url(&self, repository: &RepositoryInfo) -> CmisResult<Url> {
        let raw = if repository.root_folder_url.is_empty() {
            format!(
                "{}/{}/root",
                self.browser_url.trim_end_matches('/'),
                repository.repository_id
            )
        } else {
            repository.root_folder_url.clone()
        };
        Url::parse(&raw)
            .map_err(|e| CmisError::runtime(format!("Invalid root folder URL '{raw}': {e}")))
    }
}

#[async_trait]
impl SessionProvider for BrowserSessionProvider {
    async fn open_session(
        &self,
        user_name: &str,
        password: &str,
    ) -> CmisResult<Arc<dyn CmisSession>> {
        let repositories = self.repositories(user_name, password).await?;
        let repository = self.select_repository(repositories)?;
        let root_url = self.root_folder_url(&repository)?;

        info!(
            repository = %repository.repository_id,
            user = user_name,
            "Opened CMIS session"
        );

        Ok(Arc::new(BrowserSession::new(
            self.client.clone(),
            repository,
            root_url,
            user_name,
            password,
        )))
    }
}
