use std::path::Path;

use bytes::Bytes;

/// An uploaded file copied out of the request that carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub filename: String,
    pub data: Bytes,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Browsers submit an empty, unnamed part when no file was selected.
    pub fn is_empty(&self) -> bool {
        self.filename.trim().is_empty() || self.data.is_empty()
    }

    /// Extension including the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
