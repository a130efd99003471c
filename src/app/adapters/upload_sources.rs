//! Concrete upload sources
//!
//! Two implementations of [`UploadSource`]: an in-memory source for
//! embedders (and tests) that already hold the content, and a path-backed
//! source that reads through the async filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::services::upload_orchestrator::UploadSource;

/// An upload whose content is already in memory
#[derive(Debug, Clone)]
pub struct MemoryUpload {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryUpload {
    /// Create a source from raw bytes
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Create a source from text content
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.as_bytes().to_vec())
    }
}

impl UploadSource for MemoryUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// An upload backed by a file on disk
///
/// Name and size are captured once at selection time, matching the
/// snapshot a file picker hands over; the content is read lazily when the
/// orchestrator asks for it.
#[derive(Debug, Clone)]
pub struct FileUpload {
    name: String,
    size_bytes: u64,
    path: PathBuf,
}

impl FileUpload {
    /// Capture a file selection from a path
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Selected file '{}' ({} bytes)", name, metadata.len());
        Ok(Self {
            name,
            size_bytes: metadata.len(),
            path,
        })
    }

    /// The underlying path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UploadSource for FileUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    async fn read(&self) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}
