mod client;
mod types;

pub use client::{BedrockClient, InferenceClient};
#[cfg(test)]
pub use client::MockInferenceClient;
pub use types::*;
