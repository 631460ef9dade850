use crate::llm::GenerationParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    /// Upper bound on request body size in bytes. Unbounded when unset.
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    S3,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_key")]
    pub key: String,
    /// Falls back to the SDK region chain when unset.
    #[serde(default)]
    pub region: Option<String>,
    /// Directory holding `<bucket>/<key>` for the local backend.
    #[serde(default)]
    pub local_root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_inference_region")]
    pub region: String,
    #[serde(default = "default_anthropic_version")]
    pub anthropic_version: String,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default)]
    pub generation: GenerationParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_subject_name")]
    pub subject_name: String,
    /// Reflexive pronoun used in the persona ("as himself").
    #[serde(default = "default_subject_reflexive")]
    pub subject_reflexive: String,
    #[serde(default = "default_question")]
    pub default_question: String,
    #[serde(default)]
    pub max_question_chars: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            max_body_bytes: None,
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: default_bucket(),
            key: default_key(),
            region: None,
            local_root: None,
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            region: default_inference_region(),
            anthropic_version: default_anthropic_version(),
            read_timeout_secs: default_read_timeout_secs(),
            max_attempts: default_max_attempts(),
            generation: GenerationParams::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            subject_name: default_subject_name(),
            subject_reflexive: default_subject_reflexive(),
            default_question: default_question(),
            max_question_chars: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bucket() -> String {
    "adi-cloud-resume-challenge-bucket".to_string()
}

fn default_key() -> String {
    "Aditya Krishnakumar Resume textfile.txt".to_string()
}

fn default_model_id() -> String {
    "anthropic.claude-3-haiku-20240307-v1:0".to_string()
}

fn default_inference_region() -> String {
    "us-east-1".to_string()
}

fn default_anthropic_version() -> String {
    "bedrock-2023-05-31".to_string()
}

fn default_read_timeout_secs() -> u64 {
    600
}

fn default_max_attempts() -> u32 {
    3
}

fn default_subject_name() -> String {
    "Aditya Krishnakumar".to_string()
}

fn default_subject_reflexive() -> String {
    "himself".to_string()
}

fn default_question() -> String {
    "Who is this person?".to_string()
}
