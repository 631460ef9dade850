//! Wire types for the Anthropic Messages API as hosted on Bedrock.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
        }
    }
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> f64 {
    0.5
}

fn default_top_k() -> u32 {
    1
}

fn default_top_p() -> f64 {
    0.9
}

#[derive(Debug, Clone, Serialize)]
pub struct InvokeModelRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

impl InvokeModelRequest {
    /// A request carrying `prompt` as the single user message.
    pub fn user_prompt(anthropic_version: &str, prompt: &str, params: &GenerationParams) -> Self {
        Self {
            anthropic_version: anthropic_version.to_string(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentBlock::Text {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvokeModelResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub content: Vec<ResponseContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl InvokeModelResponse {
    /// Text of the first content block.
    pub fn into_first_text(self) -> Result<String> {
        let first = self
            .content
            .into_iter()
            .next()
            .ok_or_else(|| Error::malformed_response("response contained no content blocks"))?;

        first.text.ok_or_else(|| {
            Error::malformed_response(format!(
                "first content block has no text (type: {})",
                first.block_type.as_deref().unwrap_or("unknown")
            ))
        })
    }
}

/// Parses a raw InvokeModel response body and extracts the answer text.
pub fn parse_answer(body: &[u8]) -> Result<String> {
    let response: InvokeModelResponse = serde_json::from_slice(body)
        .map_err(|e| Error::malformed_response(format!("invalid response body: {}", e)))?;

    if let Some(usage) = &response.usage {
        debug!(
            model = response.model.as_deref().unwrap_or("unknown"),
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Model usage"
        );
    }

    response.into_first_text()
}
