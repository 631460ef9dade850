mod prompt;

pub use prompt::{compose_prompt, persona_instructions};

use crate::{
    Error, Result,
    config::Config,
    llm::{BedrockClient, GenerationParams, InferenceClient},
    storage::{DocumentLocation, DocumentStore, create_document_store},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Answers questions about the person described by the reference document.
///
/// Each call to [`Assistant::answer`] fetches the document once and calls the
/// inference backend once. Nothing is cached between calls.
pub struct Assistant {
    store: Arc<dyn DocumentStore>,
    inference: Arc<dyn InferenceClient>,
    location: DocumentLocation,
    generation: GenerationParams,
    persona: String,
    default_question: String,
    max_question_chars: Option<usize>,
}

impl Assistant {
    pub fn new(
        config: &Config,
        store: Arc<dyn DocumentStore>,
        inference: Arc<dyn InferenceClient>,
    ) -> Self {
        Self {
            store,
            inference,
            location: DocumentLocation::from(&config.storage),
            generation: config.inference.generation.clone(),
            persona: persona_instructions(
                &config.prompt.subject_name,
                &config.prompt.subject_reflexive,
            ),
            default_question: config.prompt.default_question.clone(),
            max_question_chars: config.prompt.max_question_chars,
        }
    }

    /// Builds the assistant with the storage backend and Bedrock client named
    /// in `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        info!(
            "Initializing assistant: document {}, model {}",
            DocumentLocation::from(&config.storage),
            config.inference.model_id
        );

        let store = create_document_store(&config.storage).await?;
        let inference = Arc::new(BedrockClient::from_config(&config.inference).await);

        Ok(Self::new(config, store, inference))
    }

    /// Answers `question`, or the default question when `None`.
    pub async fn answer(&self, question: Option<&str>) -> Result<String> {
        let question = question.unwrap_or(&self.default_question);

        if let Some(limit) = self.max_question_chars {
            let length = question.chars().count();
            if length > limit {
                return Err(Error::bad_request(format!(
                    "prompt is {} characters long, the limit is {}",
                    length, limit
                )));
            }
        }

        let document = self.store.fetch_document(&self.location).await?;
        debug!("Loaded reference document ({} bytes)", document.len());

        let prompt = compose_prompt(&self.persona, &document, question);
        debug!("Composed prompt ({} bytes)", prompt.len());

        self.inference.generate(&prompt, &self.generation).await
    }
}
