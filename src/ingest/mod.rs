//! Reading schema documents from disk and preparing their statements for storage.

pub mod chunk;
pub mod document;
pub mod formats;

pub use chunk::{chunk_counts, chunk_tables};
pub use document::{list_documents, namespace_for, read_document};
