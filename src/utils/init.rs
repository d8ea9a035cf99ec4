use std::path::Path;

use anyhow::{Context as _, Result};
use rust_embed::RustEmbed;
use tera::{Context, Tera};
use tracing::info;

use crate::config::Settings;

#[derive(RustEmbed)]
#[folder = "src/assets/env/"]
struct EnvFiles;

pub fn get_env_file_with_defaults(template_name: &str) -> Result<String> {
    let file = EnvFiles::get(template_name)
        .ok_or_else(|| anyhow::anyhow!("Failed to find env file template: {}", template_name))?;

    let template_str =
        std::str::from_utf8(file.data.as_ref()).context("Failed to parse template as UTF-8")?;

    Tera::default()
        .render_str(template_str, &Context::new())
        .context("Failed to render env file")
}

/// Creates the data, reports and log directories named in the settings.
pub fn ensure_directories(settings: &Settings) -> Result<Vec<String>> {
    let mut dirs = vec![
        settings.paths.data_directory.clone(),
        settings.paths.reports_dir.clone(),
    ];
    if let Some(log_dir) = &settings.logs.dir {
        dirs.push(log_dir.clone());
    }

    for dir in &dirs {
        std::fs::create_dir_all(Path::new(dir))
            .context(format!("Failed to create directory {}", dir))?;
        info!(dir, "Directory ready");
    }

    Ok(dirs)
}
