//! Where glyph SVG files come from.
//!
//! The cache only needs "path in, SVG text out". The HTTP source serves the
//! usual deployment (assets on a static host); the directory source is for
//! running next to a checked-out asset folder.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("asset {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no <svg> element found in {path}")]
    Parse { path: String },
}

#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Returns the full text of the SVG asset at `path`.
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HttpFragmentSource {
    client: Client,
    base_url: String,
}

impl HttpFragmentSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FragmentError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let response = self.client.get(self.url_for(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FragmentError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local directory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DirFragmentSource {
    root: PathBuf,
}

impl DirFragmentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FragmentSource for DirFragmentSource {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let file = self.root.join(path.trim_start_matches('/'));
        Ok(tokio::fs::read_to_string(file).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_handles_slashes() {
        let source = HttpFragmentSource::new("http://assets.local/").unwrap();
        assert_eq!(source.url_for("/flags/A.svg"), "http://assets.local/flags/A.svg");

        let source = HttpFragmentSource::new("http://assets.local").unwrap();
        assert_eq!(source.url_for("flags/B.svg"), "http://assets.local/flags/B.svg");
    }

    #[tokio::test]
    async fn test_dir_source_reads_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir_all(dir.path().join("flags")).await.unwrap();
        tokio::fs::write(dir.path().join("flags/A.svg"), "<svg></svg>")
            .await
            .unwrap();

        let source = DirFragmentSource::new(dir.path());
        assert_eq!(source.fetch("/flags/A.svg").await.unwrap(), "<svg></svg>");
    }

    #[tokio::test]
    async fn test_dir_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirFragmentSource::new(dir.path());
        let err = source.fetch("/flags/Z.svg").await.unwrap_err();
        assert!(matches!(err, FragmentError::Io(_)));
    }
}
