use crate::config::Settings;
use anyhow::{Context, Result};
use sea_orm::{Database, DatabaseConnection};
use tracing::debug;

pub async fn init_db(settings: &Settings) -> Result<DatabaseConnection> {
    debug!(url = %settings.database.url, "Connecting to chunk store");
    Database::connect(&settings.database.url)
        .await
        .context(format!(
            "Failed to connect to database: {}",
            settings.database.url
        ))
}
