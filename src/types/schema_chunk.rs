use serde::{Deserialize, Serialize};

/// A DDL statement prepared for the chunk store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaChunk {
    pub content: String,
    pub schema: String,
    pub table: String,
}
