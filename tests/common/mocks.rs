use async_trait::async_trait;
use resume_assistant::{
    Error, Result,
    llm::{GenerationParams, InferenceClient},
    storage::{DocumentLocation, DocumentStore},
};
use std::sync::{Arc, Mutex};

/// Mock document store for testing
#[derive(Debug, Clone)]
pub struct MockDocumentStore {
    pub document: String,
    pub requests: Arc<Mutex<Vec<DocumentLocation>>>,
    pub error: Option<String>,
}

impl MockDocumentStore {
    pub fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<DocumentLocation> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn fetch_document(&self, location: &DocumentLocation) -> Result<String> {
        self.requests.lock().unwrap().push(location.clone());

        if let Some(ref error) = self.error {
            return Err(Error::storage(error.clone()));
        }

        Ok(self.document.clone())
    }
}

/// Mock inference client for testing
#[derive(Debug, Clone)]
pub struct MockInferenceClient {
    pub answer: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub params: Arc<Mutex<Vec<GenerationParams>>>,
    pub error: Option<String>,
    pub malformed: bool,
}

impl MockInferenceClient {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            params: Arc::new(Mutex::new(Vec::new())),
            error: None,
            malformed: false,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Fails like a backend whose response lacks the expected content.
    pub fn with_malformed_response(mut self) -> Self {
        self.malformed = true;
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn get_params(&self) -> Vec<GenerationParams> {
        self.params.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(params.clone());

        if self.malformed {
            return Err(Error::malformed_response("response contained no content blocks"));
        }

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.answer.clone())
    }
}
