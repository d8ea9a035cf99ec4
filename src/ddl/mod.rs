//! Lightweight `CREATE TABLE` handling: statement extraction, column parsing and
//! per-schema table maps.

pub mod columns;
pub mod extract;
pub mod table_map;

pub use columns::{ColumnMap, parse_columns, parse_columns_with, split_top_level_columns};
pub use extract::{DdlRecord, TableReference, extract, table_reference};
pub use table_map::{TableDefinition, TableMap};
