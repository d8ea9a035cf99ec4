mod column_status;
mod schema_chunk;
mod split_policy;

pub use column_status::ColumnStatus;
pub use schema_chunk::SchemaChunk;
pub use split_policy::SplitPolicy;
