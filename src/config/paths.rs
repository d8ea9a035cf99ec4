use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::serde::deserialize_list_from_string;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PathsConfig {
    #[serde(default = "default_data_directory")]
    pub data_directory: String,

    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,

    /// File extensions (without the dot) that are read as schema documents.
    #[serde(
        default = "default_extensions",
        deserialize_with = "deserialize_extensions"
    )]
    pub extensions: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            reports_dir: default_reports_dir(),
            extensions: default_extensions(),
        }
    }
}

fn default_data_directory() -> String {
    "./data".to_string()
}

fn default_reports_dir() -> String {
    "./validation_reports".to_string()
}

fn default_extensions() -> Vec<String> {
    ["sql", "txt", "ddl", "docx", "pdf"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_list_from_string(deserializer)?
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect())
}
