use sea_orm::entity::prelude::*;

use crate::ddl::DdlRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "schema_chunks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub chunk_id: String,

    pub schema_name: String,

    pub table_name: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    /// JSON array of the chunk's embedding vector.
    #[sea_orm(column_type = "Text")]
    pub embedding: String,

    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decoded embedding; an unreadable column yields an empty vector.
    pub fn embedding_vector(&self) -> Vec<f32> {
        serde_json::from_str(&self.embedding).unwrap_or_default()
    }

    pub fn to_record(&self) -> DdlRecord {
        DdlRecord {
            schema_name: self.schema_name.clone(),
            table_name: self.table_name.clone(),
            ddl: self.content.clone(),
        }
    }
}
