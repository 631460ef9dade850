use super::{DocumentLocation, DocumentStore};
use crate::{Error, Result, config::StorageConfig};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{Client, error::DisplayErrorContext};
use tracing::{debug, warn};

pub struct S3DocumentStore {
    client: Client,
}

impl S3DocumentStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn fetch_document(&self, location: &DocumentLocation) -> Result<String> {
        let output = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|service| service.is_no_such_key()) {
                    warn!("Document {} does not exist", location);
                }
                Error::storage(format!(
                    "GetObject failed for {}: {}",
                    location,
                    DisplayErrorContext(&e)
                ))
            })?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| Error::storage(format!("Failed to read body of {}: {}", location, e)))?
            .into_bytes();

        debug!("Fetched {} bytes from {}", bytes.len(), location);

        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
