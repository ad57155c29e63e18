//! Delivery of exported documents.
//!
//! Serialization stays pure; where the bytes end up is decided by whichever
//! sink the caller plugs in.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::render::export::ExportedDocument;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Delivers `doc` and returns a human-readable location for it.
    async fn deliver(&self, doc: &ExportedDocument) -> Result<String, SinkError>;
}

/// Writes each document to `<dir>/<filename>`, creating `dir` on demand.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DocumentSink for DirectorySink {
    async fn deliver(&self, doc: &ExportedDocument) -> Result<String, SinkError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&doc.filename);
        tokio::fs::write(&path, doc.content.as_bytes()).await?;
        info!("Exported {} ({} bytes)", path.display(), doc.content.len());
        Ok(path.display().to_string())
    }
}
