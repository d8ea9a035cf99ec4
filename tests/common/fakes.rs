use std::sync::Mutex;

use async_trait::async_trait;
use schemadiff::{
    errors::LlmError,
    llm::{Embedder, TextGenerator},
};

/// Letter-frequency embedding: identical texts get identical vectors.
pub struct FakeEmbedder;

#[async_trait]
impl Embedder for FakeEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let mut vector = vec![0.0f32; 26];
        for c in text.to_lowercase().chars() {
            if c.is_ascii_lowercase() {
                vector[(c as u8 - b'a') as usize] += 1.0;
            }
        }
        Ok(vector)
    }
}

/// Embedder whose every call fails, as an unreachable model server would.
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, LlmError> {
        Err(LlmError::EmptyResponse("embedding"))
    }
}

/// Returns a fixed reply and records every prompt with its temperature.
pub struct FakeGenerator {
    reply: String,
    pub calls: Mutex<Vec<(String, f32)>>,
}

impl FakeGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> Option<(String, f32)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));
        Ok(self.reply.clone())
    }
}
