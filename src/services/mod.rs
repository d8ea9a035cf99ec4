pub mod assistant_service;
pub mod compare_service;
pub mod store_service;

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use assistant_service::AssistantService;
pub use compare_service::{
    CompareService, LoadedSchemas, available_schemas, resolve_schema_names,
};
pub use store_service::{SimilarChunk, StoreService};

use crate::{
    config::Settings,
    db::init_db,
    llm::{Embedder, OllamaClient, TextGenerator},
    repo::ChunkRepository,
};

pub struct AppServices {
    pub store_service: StoreService,
    pub compare_service: CompareService,
    pub assistant_service: AssistantService,
}

impl AppServices {
    pub async fn new(settings: &Settings) -> Result<Self> {
        let db = init_db(settings)
            .await
            .context("Failed to initialize database for ChunkRepository")?;

        let ollama = Arc::new(
            OllamaClient::new(&settings.llm).context("Failed to create language model client")?,
        );

        Ok(Self::with_clients(settings, db, ollama.clone(), ollama))
    }

    /// Wires services around an existing connection and language-model clients.
    pub fn with_clients(
        settings: &Settings,
        db: DatabaseConnection,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let chunk_repo = Arc::new(ChunkRepository::new(db));

        Self {
            store_service: StoreService::new(chunk_repo, embedder),
            compare_service: CompareService::new(settings.clone()),
            assistant_service: AssistantService::new(settings.clone(), generator),
        }
    }
}
