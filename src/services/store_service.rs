use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    ddl::DdlRecord,
    db::migrations,
    llm::Embedder,
    repo::{ChunkRepository, NewChunk},
    types::SchemaChunk,
    utils::cosine_similarity,
};

/// A stored chunk ranked against a query statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarChunk {
    pub chunk_id: String,
    pub schema: String,
    pub table: String,
    pub content: String,
    pub score: f32,
}

/// Persistent chunk store with embedding-based similarity search.
pub struct StoreService {
    repo: Arc<ChunkRepository>,
    embedder: Arc<dyn Embedder>,
}

impl StoreService {
    pub fn new(repo: Arc<ChunkRepository>, embedder: Arc<dyn Embedder>) -> Self {
        Self { repo, embedder }
    }

    pub fn get_repo(&self) -> Arc<ChunkRepository> {
        self.repo.clone()
    }

    /// Applies pending migrations so the store can be used without `db migrate up`.
    pub async fn ensure_schema(&self) -> Result<()> {
        let db = self.repo.get_db();
        if migrations::pending(&db).await? > 0 {
            migrations::up(&db).await?;
        }
        Ok(())
    }

    /// Replaces every schema present in `chunks` with the new chunks.
    ///
    /// All chunks are embedded before the store is touched; the delete and insert
    /// share one transaction, so a failure leaves the previous chunks in place.
    ///
    /// Chunk ids are `{schema}_{table}_{n}`, `n` counting repeats of the same
    /// schema and table within the batch starting at 1.
    pub async fn store_schemas(&self, chunks: &[SchemaChunk]) -> Result<usize> {
        let mut new_chunks = Vec::with_capacity(chunks.len());
        for (chunk, chunk_id) in chunks.iter().zip(chunk_ids(chunks)) {
            let embedding = self
                .embedder
                .embed(&chunk.content)
                .await
                .context(format!("Failed to embed chunk {}", chunk_id))?;
            debug!(chunk_id, dimensions = embedding.len(), "Embedded chunk");

            new_chunks.push(NewChunk {
                chunk_id,
                schema_name: chunk.schema.clone(),
                table_name: chunk.table.clone(),
                content: chunk.content.clone(),
                embedding,
            });
        }

        let schemas: Vec<String> = chunks
            .iter()
            .map(|c| c.schema.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let stored = self.repo.replace_schemas(&schemas, new_chunks).await?;
        info!(stored, schemas = ?schemas, "Stored schema chunks");
        Ok(stored)
    }

    /// Up to `top_k` nearest stored chunks, excluding those of `schema_name`.
    ///
    /// The exclusion is applied after the cut, so fewer than `top_k` hits may come back.
    pub async fn retrieve_similar(
        &self,
        ddl: &str,
        schema_name: &str,
        top_k: usize,
    ) -> Result<Vec<SimilarChunk>> {
        let query = self
            .embedder
            .embed(ddl)
            .await
            .context("Failed to embed query statement")?;

        let mut ranked: Vec<SimilarChunk> = self
            .repo
            .get_all()
            .await?
            .into_iter()
            .map(|model| SimilarChunk {
                score: cosine_similarity(&query, &model.embedding_vector()),
                chunk_id: model.chunk_id,
                schema: model.schema_name,
                table: model.table_name,
                content: model.content,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.chunk_id.cmp(&b.chunk_id))
        });

        Ok(ranked
            .into_iter()
            .take(top_k)
            .filter(|hit| hit.schema != schema_name)
            .collect())
    }

    /// Stored statements of one schema in insertion order.
    pub async fn records_for_schema(&self, schema_name: &str) -> Result<Vec<DdlRecord>> {
        Ok(self
            .repo
            .find_by_schema(schema_name)
            .await?
            .iter()
            .map(|model| model.to_record())
            .collect())
    }

    pub async fn schema_names(&self) -> Result<Vec<String>> {
        self.repo.schema_names().await
    }
}

fn chunk_ids(chunks: &[SchemaChunk]) -> Vec<String> {
    let mut counter: HashMap<String, usize> = HashMap::new();
    chunks
        .iter()
        .map(|chunk| {
            let base = format!("{}_{}", chunk.schema, chunk.table);
            let n = counter.entry(base.clone()).or_insert(0);
            *n += 1;
            format!("{}_{}", base, n)
        })
        .collect()
}
