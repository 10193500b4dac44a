//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Credentials;
use crate::output::{self, OutputFormat};
use dataprep_core::config::AppConfig;
use dataprep_core::error::AppError;
use dataprep_core::types::Folder;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a folder in a site's document library
    Create {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Delete an empty folder
    Delete {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder and everything in it
    DeleteTree {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Path
    path: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id().to_string(),
            name: f.name().to_string(),
            path: f.path.clone().unwrap_or_default(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::content_service(config)?;

    match &args.command {
        FolderCommand::Create {
            credentials,
            site,
            name,
        } => {
            let folder = service
                .create_folder(&credentials.user, &credentials.password, name, site)
                .await?;
            output::print_row(&FolderRow::from(&folder), format);
        }
        FolderCommand::Delete {
            credentials,
            site,
            name,
        } => {
            service
                .delete_folder(&credentials.user, &credentials.password, site, name)
                .await?;
            output::print_success(&format!("Folder '{}' deleted from site '{}'", name, site));
        }
        FolderCommand::DeleteTree {
            credentials,
            site,
            name,
        } => {
            let failed = service
                .delete_tree(&credentials.user, &credentials.password, site, name)
                .await?;
            if failed.is_empty() {
                output::print_success(&format!("Folder tree '{}' deleted", name));
            } else {
                output::print_warning(&format!(
                    "Folder tree '{}' partially deleted; {} object(s) remain: {}",
                    name,
                    failed.len(),
                    failed.join(", ")
                ));
            }
        }
    }

    Ok(())
}
