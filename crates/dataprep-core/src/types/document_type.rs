//! Content types used to tag created documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Content type of a document created from a text payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Plain text.
    #[default]
    TextPlain,
    /// XML.
    Xml,
    /// HTML.
    Html,
    /// PDF.
    Pdf,
    /// Legacy Word document.
    MsWord,
    /// Legacy Excel workbook.
    MsExcel,
    /// Legacy PowerPoint presentation.
    MsPowerPoint,
    /// Word OOXML document.
    WordOoxml,
    /// Excel OOXML workbook.
    ExcelOoxml,
    /// PowerPoint OOXML presentation.
    PowerPointOoxml,
}

impl DocumentType {
    /// Every document type.
    pub const ALL: [DocumentType; 10] = [
        Self::TextPlain,
        Self::Xml,
        Self::Html,
        Self::Pdf,
        Self::MsWord,
        Self::MsExcel,
        Self::MsPowerPoint,
        Self::WordOoxml,
        Self::ExcelOoxml,
        Self::PowerPointOoxml,
    ];

    /// MIME type sent with the content stream.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::TextPlain => "text/plain",
            Self::Xml => "text/xml",
            Self::Html => "text/html",
            Self::Pdf => "application/pdf",
            Self::MsWord => "application/msword",
            Self::MsExcel => "application/vnd.ms-excel",
            Self::MsPowerPoint => "application/vnd.ms-powerpoint",
            Self::WordOoxml => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::ExcelOoxml => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::PowerPointOoxml => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TextPlain => "txt",
            Self::Xml => "xml",
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::MsWord => "doc",
            Self::MsExcel => "xls",
            Self::MsPowerPoint => "ppt",
            Self::WordOoxml => "docx",
            Self::ExcelOoxml => "xlsx",
            Self::PowerPointOoxml => "pptx",
        }
    }

    /// Guess the document type from a file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        let ext = ext.to_lowercase();
        Self::ALL.into_iter().find(|t| t.extension() == ext)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

impl FromStr for DocumentType {
    type Err = AppError;

    /// Accepts an extension (`txt`, `.docx`) or a MIME type (`text/plain`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.extension() == needle || t.mime_type() == needle)
            .ok_or_else(|| AppError::illegal_argument(format!("Unknown document type: {s}")))
    }
}
