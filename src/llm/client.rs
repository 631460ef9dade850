use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig, timeout::TimeoutConfig};
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use std::time::Duration;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generates a completion for a single user prompt and returns its text.
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}

pub struct BedrockClient {
    client: Client,
    model_id: String,
    anthropic_version: String,
}

impl BedrockClient {
    pub fn new(client: Client, config: &InferenceConfig) -> Self {
        Self {
            client,
            model_id: config.model_id.clone(),
            anthropic_version: config.anthropic_version.clone(),
        }
    }

    /// Builds the SDK client with the configured region, read timeout and
    /// retry budget. Retries happen inside the SDK, below `generate`.
    pub async fn from_config(config: &InferenceConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .read_timeout(Duration::from_secs(config.read_timeout_secs))
                    .build(),
            )
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
            .load()
            .await;

        Self::new(Client::new(&sdk_config), config)
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let request = InvokeModelRequest::user_prompt(&self.anthropic_version, prompt, params);
        let body = serde_json::to_vec(&request)?;

        debug!(
            "Invoking model {} with {} byte payload",
            self.model_id,
            body.len()
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|service| service.is_throttling_exception())
                {
                    warn!("Model {} throttled the request", self.model_id);
                }
                Error::inference(format!(
                    "InvokeModel failed for {}: {}",
                    self.model_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        parse_answer(output.body().as_ref())
    }
}
