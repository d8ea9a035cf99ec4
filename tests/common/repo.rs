use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use schemadiff::{config::Settings, db::migrations, services::AppServices};
use sea_orm::Database;
use tempfile::TempDir;

use crate::common::{FakeEmbedder, FakeGenerator};

pub struct TestEnv {
    pub dir: TempDir,
    pub settings: Settings,
    pub services: AppServices,
    pub generator: Arc<FakeGenerator>,
}

impl TestEnv {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.data_directory)
    }

    pub fn write_document(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.data_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

/// Services over a fresh SQLite file in a temporary directory, with fake model clients.
pub async fn init_test_env() -> Result<TestEnv> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().to_string_lossy().to_string();

    let mut settings = Settings::default();
    settings.database.url = format!("sqlite://{}/test.db?mode=rwc", root);
    settings.paths.data_directory = format!("{}/data", root);
    settings.paths.reports_dir = format!("{}/reports", root);
    settings.logs.dir = None;
    std::fs::create_dir_all(&settings.paths.data_directory)?;

    let db = Database::connect(&settings.database.url).await?;
    migrations::up(&db)
        .await
        .context("Failed to init chunk store")?;

    let generator = Arc::new(FakeGenerator::new("stub answer"));
    let services =
        AppServices::with_clients(&settings, db, Arc::new(FakeEmbedder), generator.clone());

    Ok(TestEnv {
        dir,
        settings,
        services,
        generator,
    })
}
