//! Content streams attached to documents on creation.

use bytes::Bytes;

/// The content of a document being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStream {
    /// File name sent with the content.
    pub file_name: String,
    /// Length in bytes.
    pub length: u64,
    /// MIME type of the content.
    pub mime_type: String,
    /// The content itself.
    pub data: Bytes,
}

impl ContentStream {
    /// Build a content stream over `data`; the length is taken from the data.
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            file_name: file_name.into(),
            length: data.len() as u64,
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Build a content stream from the UTF-8 bytes of `text`.
    pub fn from_text(file_name: impl Into<String>, mime_type: impl Into<String>, text: &str) -> Self {
        Self::new(file_name, mime_type, Bytes::copy_from_slice(text.as_bytes()))
    }
}
