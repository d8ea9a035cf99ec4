use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    ddl::{ColumnMap, TableMap},
    report::{ComparisonReport, assemble},
    types::{ColumnStatus, SplitPolicy},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ColumnOutcome {
    Match { data_type: String },
    TypeMismatch { left: String, right: String },
    MissingInLeft { data_type: String },
    MissingInRight { data_type: String },
}

impl ColumnOutcome {
    pub fn status(&self) -> ColumnStatus {
        match self {
            ColumnOutcome::Match { .. } => ColumnStatus::Match,
            ColumnOutcome::TypeMismatch { .. } => ColumnStatus::TypeMismatch,
            ColumnOutcome::MissingInLeft { .. } => ColumnStatus::MissingInLeft,
            ColumnOutcome::MissingInRight { .. } => ColumnStatus::MissingInRight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnComparison {
    pub column: String,
    pub outcome: ColumnOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePresence {
    Both,
    MissingInLeft,
    MissingInRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableComparison {
    pub table: String,
    pub presence: TablePresence,
    pub columns: Vec<ColumnComparison>,
}

impl TableComparison {
    /// True only when the table exists on both sides and every column matches.
    pub fn success(&self) -> bool {
        self.presence == TablePresence::Both
            && self.columns.iter().all(|c| c.outcome.status().is_match())
    }

    pub fn count(&self, status: ColumnStatus) -> usize {
        self.columns
            .iter()
            .filter(|c| c.outcome.status() == status)
            .count()
    }
}

/// Compares two table maps and wraps the outcome into a report.
pub fn compare(
    tables_left: &TableMap,
    tables_right: &TableMap,
    left_name: &str,
    right_name: &str,
) -> ComparisonReport {
    assemble(diff_tables(tables_left, tables_right), left_name, right_name)
}

/// Extracts both sides from raw text and compares them.
pub fn compare_text(
    left_text: &str,
    right_text: &str,
    left_name: &str,
    right_name: &str,
    policy: SplitPolicy,
) -> ComparisonReport {
    let left = TableMap::from_text(left_text, left_name, policy);
    let right = TableMap::from_text(right_text, right_name, policy);
    compare(&left, &right, left_name, right_name)
}

/// Table-by-table differences, ordered by lower-cased table name.
pub fn diff_tables(tables_left: &TableMap, tables_right: &TableMap) -> Vec<TableComparison> {
    let names: BTreeSet<&str> = tables_left.names().chain(tables_right.names()).collect();

    names
        .into_iter()
        .map(|name| {
            match (tables_left.get(name), tables_right.get(name)) {
                (Some(left), Some(right)) => TableComparison {
                    table: name.to_string(),
                    presence: TablePresence::Both,
                    columns: diff_columns(&left.columns, &right.columns),
                },
                (Some(_), None) => missing_table(name, TablePresence::MissingInRight),
                (None, _) => missing_table(name, TablePresence::MissingInLeft),
            }
        })
        .collect()
}

fn missing_table(name: &str, presence: TablePresence) -> TableComparison {
    TableComparison {
        table: name.to_string(),
        presence,
        columns: Vec::new(),
    }
}

/// Column names are compared case-sensitively but ordered by their lower-cased form.
fn diff_columns(left: &ColumnMap, right: &ColumnMap) -> Vec<ColumnComparison> {
    left.keys()
        .chain(right.keys())
        .unique()
        .sorted_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)))
        .filter_map(|column| {
            let outcome = match (left.get(column), right.get(column)) {
                (Some(l), Some(r)) if l == r => ColumnOutcome::Match {
                    data_type: l.clone(),
                },
                (Some(l), Some(r)) => ColumnOutcome::TypeMismatch {
                    left: l.clone(),
                    right: r.clone(),
                },
                (Some(l), None) => ColumnOutcome::MissingInRight {
                    data_type: l.clone(),
                },
                (None, Some(r)) => ColumnOutcome::MissingInLeft {
                    data_type: r.clone(),
                },
                (None, None) => return None,
            };
            Some(ColumnComparison {
                column: column.clone(),
                outcome,
            })
        })
        .collect()
}
