pub mod comparison;
pub mod database;
pub mod llm;
pub mod log;
pub mod paths;
pub mod settings;

pub use comparison::CompareConfig;
pub use database::DatabaseConfig;
pub use llm::LlmConfig;
pub use log::LogConfig;
pub use paths::PathsConfig;
pub use settings::Settings;
