use anyhow::{Context, Result};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::entities::{
    SchemaChunkActiveModel, SchemaChunkColumn, SchemaChunkModel, SchemaChunksEntity,
};

/// A chunk ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChunk {
    pub chunk_id: String,
    pub schema_name: String,
    pub table_name: String,
    pub content: String,
    pub embedding: Vec<f32>,
}

pub struct ChunkRepository {
    db: DatabaseConnection,
}

impl ChunkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub async fn get_all(&self) -> Result<Vec<SchemaChunkModel>> {
        SchemaChunksEntity::find()
            .order_by_asc(SchemaChunkColumn::Id)
            .all(&self.db)
            .await
            .context("Failed to get all schema chunks")
    }

    pub async fn find_by_schema(&self, schema_name: &str) -> Result<Vec<SchemaChunkModel>> {
        SchemaChunksEntity::find()
            .filter(SchemaChunkColumn::SchemaName.eq(schema_name))
            .order_by_asc(SchemaChunkColumn::Id)
            .all(&self.db)
            .await
            .context(format!(
                "Failed to find chunks for schema: {}",
                schema_name
            ))
    }

    /// Distinct schema names in the store, ascending.
    pub async fn schema_names(&self) -> Result<Vec<String>> {
        SchemaChunksEntity::find()
            .select_only()
            .column(SchemaChunkColumn::SchemaName)
            .distinct()
            .order_by_asc(SchemaChunkColumn::SchemaName)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("Failed to list stored schema names")
    }

    pub async fn count(&self) -> Result<u64> {
        SchemaChunksEntity::find()
            .count(&self.db)
            .await
            .context("Failed to count schema chunks")
    }

    /// Deletes every chunk of `schemas` and inserts `chunks` in one transaction.
    pub async fn replace_schemas(&self, schemas: &[String], chunks: Vec<NewChunk>) -> Result<usize> {
        let models = to_active_models(chunks)?;
        let inserted = models.len();

        let txn = self
            .db
            .begin()
            .await
            .context("Failed to begin chunk replacement")?;

        for schema in schemas {
            SchemaChunksEntity::delete_many()
                .filter(SchemaChunkColumn::SchemaName.eq(schema.as_str()))
                .exec(&txn)
                .await
                .context(format!("Failed to delete chunks for schema: {}", schema))?;
        }

        if !models.is_empty() {
            SchemaChunksEntity::insert_many(models)
                .exec(&txn)
                .await
                .context("Failed to insert schema chunks")?;
        }

        txn.commit()
            .await
            .context("Failed to commit chunk replacement")?;
        Ok(inserted)
    }
}

fn to_active_models(chunks: Vec<NewChunk>) -> Result<Vec<SchemaChunkActiveModel>> {
    let now = chrono::Utc::now().naive_utc();
    chunks
        .into_iter()
        .map(|chunk| {
            let embedding = serde_json::to_string(&chunk.embedding)
                .context(format!("Failed to encode embedding of {}", chunk.chunk_id))?;
            Ok(SchemaChunkActiveModel {
                id: NotSet,
                chunk_id: Set(chunk.chunk_id),
                schema_name: Set(chunk.schema_name),
                table_name: Set(chunk.table_name),
                content: Set(chunk.content),
                embedding: Set(embedding),
                created_at: Set(now),
            })
        })
        .collect()
}
