pub mod schema_chunk;

pub use schema_chunk::{
    ActiveModel as SchemaChunkActiveModel, Column as SchemaChunkColumn,
    Entity as SchemaChunksEntity, Model as SchemaChunkModel,
};
