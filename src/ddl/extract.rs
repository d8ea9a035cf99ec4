use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Every `CREATE TABLE` block up to the first `);` that follows it.
static STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)CREATE\s+TABLE\b.+?\);").expect("statement pattern is valid")
});

/// Table reference right after `CREATE TABLE`: optional `namespace.` plus identifier.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:(\w+)\.)?(\w+)")
        .expect("reference pattern is valid")
});

/// A single `CREATE TABLE` statement found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlRecord {
    pub schema_name: String,
    pub table_name: String,
    pub ddl: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    pub namespace: Option<String>,
    pub name: String,
}

impl TableReference {
    /// Name as written in the statement, namespace included.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

/// Parses the table reference of a statement that starts with `CREATE TABLE`.
pub fn table_reference(ddl: &str) -> Option<TableReference> {
    let caps = REFERENCE_RE.captures(ddl.trim_start())?;
    Some(TableReference {
        namespace: caps.get(1).map(|m| m.as_str().to_string()),
        name: caps.get(2)?.as_str().to_string(),
    })
}

/// Extracts every `CREATE TABLE ... );` statement from `raw_text`.
///
/// Statements without an explicit namespace are attributed to `default_namespace`.
/// Blocks whose table reference cannot be read are dropped.
pub fn extract(raw_text: &str, default_namespace: &str) -> Vec<DdlRecord> {
    let mut records = Vec::new();

    for block in STATEMENT_RE.find_iter(raw_text) {
        let ddl = block.as_str().trim();
        if ddl.is_empty() {
            continue;
        }

        let Some(reference) = table_reference(ddl) else {
            warn!(
                statement = %first_line(ddl),
                "Skipping CREATE TABLE statement with unreadable table name"
            );
            continue;
        };

        records.push(DdlRecord {
            schema_name: reference
                .namespace
                .unwrap_or_else(|| default_namespace.to_string()),
            table_name: reference.name,
            ddl: ddl.to_string(),
        });
    }

    debug!(
        count = records.len(),
        default_namespace, "Extracted CREATE TABLE statements"
    );
    records
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}
