mod local;
mod s3;

pub use local::LocalDocumentStore;
pub use s3::S3DocumentStore;

use crate::{
    Result,
    config::{StorageBackend, StorageConfig},
};
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// Bucket and key of a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    pub bucket: String,
    pub key: String,
}

impl DocumentLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl From<&StorageConfig> for DocumentLocation {
    fn from(config: &StorageConfig) -> Self {
        Self::new(&config.bucket, &config.key)
    }
}

impl fmt::Display for DocumentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the whole document as UTF-8 text.
    async fn fetch_document(&self, location: &DocumentLocation) -> Result<String>;
}

pub async fn create_document_store(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>> {
    match config.backend {
        StorageBackend::S3 => Ok(Arc::new(S3DocumentStore::from_config(config).await)),
        StorageBackend::Local => {
            let root = config.local_root.as_deref().ok_or_else(|| {
                crate::Error::config("storage.local_root is required for the local backend")
            })?;
            Ok(Arc::new(LocalDocumentStore::new(root)))
        }
    }
}
