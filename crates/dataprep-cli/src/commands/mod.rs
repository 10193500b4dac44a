//! CLI command definitions and dispatch.

pub mod config;
pub mod document;
pub mod folder;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dataprep_content::ContentService;
use dataprep_core::config::AppConfig;
use dataprep_core::error::AppError;

/// dataprep: create and delete CMIS test content in Alfresco sites
#[derive(Debug, Parser)]
#[command(name = "dataprep", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/dataprep.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Credentials shared by commands that talk to the repository
#[derive(Debug, Clone, Args)]
pub struct Credentials {
    /// Repository user
    #[arg(short, long)]
    pub user: String,
    /// Repository password
    #[arg(short, long)]
    pub password: String,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Document management
    Document(document::DocumentArgs),
    /// Resolve the node id of a document library entry
    NodeRef {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Folder or document name
        #[arg(short, long)]
        name: String,
    },
    /// Configuration management
    Config(config::ConfigArgs),
}

/// Node ref display row
#[derive(Debug, Serialize, Tabled)]
struct NodeRefRow {
    /// Site
    site: String,
    /// Name
    name: String,
    /// Node id
    node_ref: String,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, config, self.format).await,
            Commands::Document(args) => document::execute(args, config, self.format).await,
            Commands::NodeRef {
                credentials,
                site,
                name,
            } => {
                let service = content_service(config)?;
                let node_ref = service
                    .get_node_ref(&credentials.user, &credentials.password, site, name)
                    .await?;
                if node_ref.is_empty() {
                    output::print_warning(&format!("No '{}' in site '{}'", name, site));
                    return Ok(());
                }
                output::print_row(
                    &NodeRefRow {
                        site: site.clone(),
                        name: name.clone(),
                        node_ref,
                    },
                    self.format,
                );
                Ok(())
            }
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: content service for the configured repository
pub fn content_service(config: &AppConfig) -> Result<ContentService, AppError> {
    ContentService::from_config(&config.server)
}
