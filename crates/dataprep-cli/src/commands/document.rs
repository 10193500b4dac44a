//! Document management CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use super::Credentials;
use crate::output::{self, OutputFormat};
use dataprep_core::config::AppConfig;
use dataprep_core::error::AppError;
use dataprep_core::types::{Document, DocumentType};

/// Arguments for document commands
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Document subcommand
    #[command(subcommand)]
    pub command: DocumentCommand,
}

/// Document subcommands
#[derive(Debug, Subcommand)]
pub enum DocumentCommand {
    /// Create a document from text content
    Create {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Document name
        #[arg(short, long)]
        name: String,
        /// Folder in the document library (omit for the library root)
        #[arg(long)]
        folder: Option<String>,
        /// Content type, as an extension or MIME type (guessed from the name if omitted)
        #[arg(short = 't', long = "type")]
        doc_type: Option<DocumentType>,
        /// Inline text content
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,
        /// Read text content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a document from the document library
    Delete {
        /// Credentials
        #[command(flatten)]
        credentials: Credentials,
        /// Site short name
        #[arg(short, long)]
        site: String,
        /// Document name
        #[arg(short, long)]
        name: String,
    },
}

/// Document display row
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document ID
    id: String,
    /// Name
    name: String,
    /// MIME type
    mime_type: String,
    /// Size in bytes
    size: u64,
    /// Version label
    version: String,
}

impl From<&Document> for DocumentRow {
    fn from(d: &Document) -> Self {
        Self {
            id: d.id().to_string(),
            name: d.name().to_string(),
            mime_type: d.content_stream_mime_type.clone().unwrap_or_default(),
            size: d.content_stream_length.unwrap_or(0),
            version: d.version_label.clone().unwrap_or_default(),
        }
    }
}

/// Execute document commands
pub async fn execute(
    args: &DocumentArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::content_service(config)?;

    match &args.command {
        DocumentCommand::Create {
            credentials,
            site,
            name,
            folder,
            doc_type,
            content,
            file,
        } => {
            let doc_type = doc_type
                .or_else(|| DocumentType::from_file_name(name))
                .unwrap_or_default();
            let content = match (content, file) {
                (Some(text), _) => text.clone(),
                (None, Some(path)) => tokio::fs::read_to_string(path).await.map_err(|e| {
                    AppError::illegal_argument(format!("Failed to read {}: {}", path.display(), e))
                })?,
                (None, None) => String::new(),
            };

            let document = match folder {
                Some(folder) => service
                    .create_document_in_folder(
                        &credentials.user,
                        &credentials.password,
                        site,
                        folder,
                        doc_type,
                        name,
                        &content,
                    )
                    .await?
                    .ok_or_else(|| {
                        AppError::illegal_argument(format!("'{}' is not a folder", folder))
                    })?,
                None => {
                    service
                        .create_document(
                            &credentials.user,
                            &credentials.password,
                            site,
                            doc_type,
                            name,
                            &content,
                        )
                        .await?
                }
            };
            output::print_row(&DocumentRow::from(&document), format);
        }
        DocumentCommand::Delete {
            credentials,
            site,
            name,
        } => {
            service
                .delete_document(&credentials.user, &credentials.password, site, name)
                .await?;
            output::print_success(&format!("Document '{}' deleted from site '{}'", name, site));
        }
    }

    Ok(())
}
