use super::mocks::{MockDocumentStore, MockInferenceClient};
use axum::Router;
use resume_assistant::{
    assistant::Assistant,
    config::Config,
    server::{AppState, router},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const SAMPLE_RESUME: &str = "Jane Doe
Senior Software Engineer, Example Corp (2019-2024)
- Built event-driven billing pipelines in Rust and Go
- Led migration of 40 services to AWS Lambda
Education: BSc Computer Science";

pub const SAMPLE_ANSWER: &str = "I'm Jane Doe, a senior software engineer who builds billing pipelines in Rust.";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.prompt.subject_name = "Jane Doe".to_string();
    config.prompt.subject_reflexive = "herself".to_string();
    config
}

/// Router backed by the given collaborators
pub fn create_test_app_with(
    config: &Config,
    store: MockDocumentStore,
    inference: MockInferenceClient,
) -> Router {
    let assistant = Assistant::new(config, Arc::new(store), Arc::new(inference));
    router(AppState {
        assistant: Arc::new(assistant),
        max_body_bytes: config.server.max_body_bytes,
    })
}

/// Router whose collaborators return the sample resume and answer
pub fn create_test_app() -> (Router, MockDocumentStore, MockInferenceClient) {
    let store = MockDocumentStore::new(SAMPLE_RESUME);
    let inference = MockInferenceClient::new(SAMPLE_ANSWER);
    let app = create_test_app_with(&create_test_config(), store.clone(), inference.clone());
    (app, store, inference)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `content` to `<dir>/<relative>`, creating parent directories
pub async fn write_file(dir: &TempDir, relative: &str, content: &[u8]) -> String {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.unwrap();
    }
    fs::write(&path, content).await.unwrap();
    path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"
  max_body_bytes: 65536

storage:
  backend: "local"
  bucket: "resumes"
  key: "jane.txt"
  local_root: "/srv/documents"

inference:
  model_id: "anthropic.claude-3-sonnet-20240229-v1:0"
  region: "eu-central-1"
  read_timeout_secs: 120
  max_attempts: 5
  generation:
    max_tokens: 500
    temperature: 0.2

prompt:
  subject_name: "Jane Doe"
  subject_reflexive: "herself"
  default_question: "Tell me about yourself."
  max_question_chars: 1000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

storage:
  backend: "ftp"
"#;
