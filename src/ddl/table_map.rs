use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    ddl::{ColumnMap, DdlRecord, extract, parse_columns_with, table_reference},
    types::SplitPolicy,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    pub full_name: String,
    pub columns: ColumnMap,
}

/// Parsed tables of one schema side, keyed by lower-cased table name without namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableMap(BTreeMap<String, TableDefinition>);

impl TableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from extracted records; a later record for the same table replaces
    /// an earlier one.
    pub fn from_records<'a, I>(records: I, policy: SplitPolicy) -> Self
    where
        I: IntoIterator<Item = &'a DdlRecord>,
    {
        let mut map = Self::new();
        for record in records {
            let full_name = table_reference(&record.ddl)
                .map(|r| r.full_name())
                .unwrap_or_else(|| record.table_name.clone());

            map.insert(
                &record.table_name,
                TableDefinition {
                    full_name,
                    columns: parse_columns_with(&record.ddl, policy),
                },
            );
        }
        map
    }

    /// Extracts and parses every statement in `raw_text`.
    pub fn from_text(raw_text: &str, default_namespace: &str, policy: SplitPolicy) -> Self {
        Self::from_records(&extract(raw_text, default_namespace), policy)
    }

    pub fn insert(&mut self, table_name: &str, definition: TableDefinition) {
        let key = table_name
            .rsplit('.')
            .next()
            .unwrap_or(table_name)
            .to_lowercase();
        self.0.insert(key, definition);
    }

    pub fn get(&self, table_name: &str) -> Option<&TableDefinition> {
        self.0.get(&table_name.to_lowercase())
    }

    pub fn contains(&self, table_name: &str) -> bool {
        self.get(table_name).is_some()
    }

    /// Lower-cased table names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
