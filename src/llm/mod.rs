//! Language-model collaborators used for embeddings, report summaries and Q&A.

pub mod ollama;

use async_trait::async_trait;

use crate::errors::LlmError;

pub use ollama::OllamaClient;

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError>;
}
