use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    compare::TableComparison,
    report::{ComparisonReport, ReportMeta},
};

/// Version recorded in report metadata.
pub fn tool_version() -> &'static str {
    option_env!("CARGO_PKG_VERSION").unwrap_or("unknown")
}

/// Wraps diff results into a report stamped with the current time.
pub fn assemble(
    results: Vec<TableComparison>,
    left_name: &str,
    right_name: &str,
) -> ComparisonReport {
    assemble_at(results, left_name, right_name, Utc::now())
}

pub fn assemble_at(
    results: Vec<TableComparison>,
    left_name: &str,
    right_name: &str,
    timestamp: DateTime<Utc>,
) -> ComparisonReport {
    ComparisonReport {
        success: results.iter().all(TableComparison::success),
        meta: ReportMeta {
            source_schema: left_name.to_string(),
            destination_schema: right_name.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            tool_version: tool_version().to_string(),
        },
        results,
    }
}
