use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::config::{CompareConfig, DatabaseConfig, LlmConfig, LogConfig, PathsConfig};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logs: LogConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub compare: CompareConfig,
}

fn get_env_file_name() -> String {
    if let Ok(env_file) = std::env::var("SCHEMADIFF_ENV_FILE") {
        return env_file;
    }
    if let Ok(env) = std::env::var("SCHEMADIFF_ENV") {
        return match env.to_lowercase().as_str() {
            "dev" => ".env.dev".to_string(),
            "test" => ".env.test".to_string(),
            _ => ".env".to_string(),
        };
    }
    ".env".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::from_filename(get_env_file_name()).ok();

        let settings = Config::builder()
            .add_source(
                Environment::with_prefix("SCHEMADIFF")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Output file next to the JSON report, e.g. `report_path(".html")`.
    pub fn report_path(&self, suffix: &str) -> PathBuf {
        PathBuf::from(&self.paths.reports_dir)
            .join(format!("{}{}", self.compare.report_name, suffix))
    }

    pub fn print_config(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Failed to serialize settings: {}", err),
        }
    }
}
