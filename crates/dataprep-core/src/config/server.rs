//! Repository server and CMIS endpoint configuration.

use serde::{Deserialize, Serialize};

/// Location of the Alfresco repository whose CMIS browser binding is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL scheme, `http` or `https`.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Repository host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// Repository port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the CMIS 1.1 browser binding service.
    #[serde(default = "default_browser_path")]
    pub browser_path: String,
    /// Repository to open sessions against. Empty selects the first one offered.
    #[serde(default = "default_repository_id")]
    pub repository_id: String,
    /// Timeout applied to every request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ServerConfig {
    /// Base URL of the repository, e.g. `http://localhost:8080`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// Full URL of the browser binding service document.
    pub fn browser_url(&self) -> String {
        let path = self.browser_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}/{}", self.base_url(), path)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
            browser_path: default_browser_path(),
            repository_id: default_repository_id(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_browser_path() -> String {
    "/alfresco/api/-default-/public/cmis/versions/1.1/browser".to_string()
}

fn default_repository_id() -> String {
    "-default-".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
