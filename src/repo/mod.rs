pub mod chunk_repo;

pub use chunk_repo::{ChunkRepository, NewChunk};
