use serde::{Deserialize, Serialize};

/// Ollama endpoint and models used for embeddings, summaries and Q&A.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    #[serde(default = "default_summary_temperature")]
    pub summary_temperature: f32,

    #[serde(default = "default_qa_temperature")]
    pub qa_temperature: f32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            embedding_model: default_embedding_model(),
            chat_model: default_chat_model(),
            summary_temperature: default_summary_temperature(),
            qa_temperature: default_qa_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_embedding_model() -> String {
    "nomic-embed-text".to_string()
}

fn default_chat_model() -> String {
    "llama3".to_string()
}

fn default_summary_temperature() -> f32 {
    0.7
}

fn default_qa_temperature() -> f32 {
    0.1
}

fn default_timeout_secs() -> u64 {
    120
}
