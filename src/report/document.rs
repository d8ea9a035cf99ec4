use serde::{Deserialize, Serialize};

use crate::{
    compare::{ColumnComparison, ColumnOutcome, TableComparison, TablePresence},
    report::{ComparisonReport, ReportMeta},
};

pub const EXPECTATION_TYPE: &str = "expect_table_schema_to_match";

pub const PASS_GLYPH: &str = "✅";
pub const FAIL_GLYPH: &str = "❌";

/// Persisted JSON form of a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub success: bool,
    pub meta: ReportMeta,
    pub results: Vec<ExpectationResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationResult {
    pub expectation_type: String,
    pub kwargs: ExpectationKwargs,
    pub success: bool,
    pub meta: ExpectationMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationKwargs {
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectationMeta {
    pub status: String,
    #[serde(default)]
    pub column_results: Vec<String>,
}

impl ComparisonReport {
    pub fn to_document(&self) -> ReportDocument {
        let source = &self.meta.source_schema;
        let destination = &self.meta.destination_schema;

        ReportDocument {
            success: self.success,
            meta: self.meta.clone(),
            results: self
                .results
                .iter()
                .map(|table| ExpectationResult {
                    expectation_type: EXPECTATION_TYPE.to_string(),
                    kwargs: ExpectationKwargs {
                        table: table.table.clone(),
                    },
                    success: table.success(),
                    meta: ExpectationMeta {
                        status: table_status(table, source, destination),
                        column_results: table
                            .columns
                            .iter()
                            .map(|c| column_result(c, source, destination))
                            .collect(),
                    },
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_document())
    }
}

impl ReportDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl ExpectationResult {
    pub fn passed_columns(&self) -> impl Iterator<Item = &String> {
        self.meta
            .column_results
            .iter()
            .filter(|r| r.starts_with(PASS_GLYPH))
    }

    pub fn failed_columns(&self) -> impl Iterator<Item = &String> {
        self.meta
            .column_results
            .iter()
            .filter(|r| !r.starts_with(PASS_GLYPH))
    }
}

fn table_status(table: &TableComparison, source: &str, destination: &str) -> String {
    match table.presence {
        TablePresence::MissingInRight => format!(
            "{} Table '{}' is missing in {}",
            FAIL_GLYPH, table.table, destination
        ),
        TablePresence::MissingInLeft => format!(
            "{} Table '{}' is missing in {}",
            FAIL_GLYPH, table.table, source
        ),
        TablePresence::Both if table.success() => {
            format!("{} Table '{}' matches", PASS_GLYPH, table.table)
        }
        TablePresence::Both => format!(
            "{} Table '{}' has column differences",
            FAIL_GLYPH, table.table
        ),
    }
}

fn column_result(column: &ColumnComparison, source: &str, destination: &str) -> String {
    let name = &column.column;
    match &column.outcome {
        ColumnOutcome::Match { data_type } => format!(
            "{} Column '{}' matches with datatype: {}",
            PASS_GLYPH, name, data_type
        ),
        ColumnOutcome::TypeMismatch { left, right } => format!(
            "{} Column '{}' has different datatypes: {} vs {}",
            FAIL_GLYPH, name, left, right
        ),
        ColumnOutcome::MissingInRight { .. } => format!(
            "{} Column '{}' is missing in {}",
            FAIL_GLYPH, name, destination
        ),
        ColumnOutcome::MissingInLeft { .. } => {
            format!("{} Column '{}' is missing in {}", FAIL_GLYPH, name, source)
        }
    }
}
