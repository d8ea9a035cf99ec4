use std::collections::BTreeMap;

use tracing::info;

use crate::{ddl::DdlRecord, types::SchemaChunk};

/// One chunk per extracted statement, carrying its schema and table as metadata.
pub fn chunk_tables(records: &[DdlRecord]) -> Vec<SchemaChunk> {
    let chunks: Vec<SchemaChunk> = records
        .iter()
        .map(|record| SchemaChunk {
            content: record.ddl.clone(),
            schema: record.schema_name.clone(),
            table: record.table_name.clone(),
        })
        .collect();

    for (schema, count) in chunk_counts(&chunks) {
        info!(schema, count, "Chunks prepared");
    }

    chunks
}

/// Number of chunks per schema, ordered by schema name.
pub fn chunk_counts(chunks: &[SchemaChunk]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for chunk in chunks {
        *counts.entry(chunk.schema.clone()).or_insert(0) += 1;
    }
    counts
}
