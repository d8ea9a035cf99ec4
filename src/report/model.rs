use serde::{Deserialize, Serialize};

use crate::compare::TableComparison;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub source_schema: String,
    pub destination_schema: String,
    pub timestamp: String,
    pub tool_version: String,
}

/// Outcome of one comparison run between a source and a destination schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub success: bool,
    pub meta: ReportMeta,
    pub results: Vec<TableComparison>,
}

impl ComparisonReport {
    pub fn failed_tables(&self) -> impl Iterator<Item = &TableComparison> {
        self.results.iter().filter(|t| !t.success())
    }
}
