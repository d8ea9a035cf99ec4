use serde::{Deserialize, Serialize};

use crate::types::SplitPolicy;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompareConfig {
    #[serde(default = "default_source_schema")]
    pub source_schema: String,

    #[serde(default = "default_destination_schema")]
    pub destination_schema: String,

    #[serde(default)]
    pub split_policy: SplitPolicy,

    /// Base file name of the JSON report, HTML page and summary.
    #[serde(default = "default_report_name")]
    pub report_name: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            source_schema: default_source_schema(),
            destination_schema: default_destination_schema(),
            split_policy: SplitPolicy::default(),
            report_name: default_report_name(),
        }
    }
}

fn default_source_schema() -> String {
    "employee_management".to_string()
}

fn default_destination_schema() -> String {
    "contractor_management".to_string()
}

fn default_report_name() -> String {
    "validation_reports".to_string()
}
