use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::LlmConfig,
    errors::LlmError,
    llm::{Embedder, TextGenerator},
};

/// Client for a local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    base_url: String,
    embedding_model: String,
    chat_model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            embedding_model: config.embedding_model.clone(),
            chat_model: config.chat_model.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, LlmError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let url = self.endpoint(path);
        debug!(%url, "Calling language model");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Resp>().await?)
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let response: EmbeddingResponse = self
            .post(
                "api/embeddings",
                &EmbeddingRequest {
                    model: &self.embedding_model,
                    prompt: text,
                },
            )
            .await?;

        if response.embedding.is_empty() {
            return Err(LlmError::EmptyResponse("embedding"));
        }
        Ok(response.embedding)
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        let response: GenerateResponse = self
            .post(
                "api/generate",
                &GenerateRequest {
                    model: &self.chat_model,
                    prompt,
                    stream: false,
                    options: GenerateOptions { temperature },
                },
            )
            .await?;

        let text = response.response.trim().to_string();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse("completion"));
        }
        Ok(text)
    }
}
