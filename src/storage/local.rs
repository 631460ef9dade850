use super::{DocumentLocation, DocumentStore};
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Serves documents from `<root>/<bucket>/<key>` on the local filesystem.
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, location: &DocumentLocation) -> PathBuf {
        self.root.join(&location.bucket).join(&location.key)
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn fetch_document(&self, location: &DocumentLocation) -> Result<String> {
        let path = self.path_for(location);
        let data = fs::read(&path).await.map_err(|e| {
            Error::storage(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!("Read {} bytes from {}", data.len(), path.display());

        Ok(String::from_utf8(data)?)
    }
}
