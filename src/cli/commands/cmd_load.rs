use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, new_spinner},
    },
    ingest::{chunk_counts, chunk_tables},
};

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Directory of schema documents, defaults to the configured data directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

#[derive(Tabled)]
struct ChunkCountRow {
    #[tabled(rename = "#")]
    index: String,

    #[tabled(rename = "Schema")]
    schema: String,

    #[tabled(rename = "Chunks")]
    count: String,
}

pub async fn execute(args: &LoadArgs, ctx: &Context<'_>) {
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.settings.paths.data_directory));

    let records = ctx
        .services
        .compare_service
        .load_records(&dir)
        .exit_on_err("Failed to load schema documents")
        .records;

    let chunks = chunk_tables(&records);
    if chunks.is_empty() {
        println!("⚠️ No CREATE TABLE statements found in {}", dir.display());
        return;
    }

    println!("{}", "=== Chunks per schema ===".blue());
    let rows: Vec<ChunkCountRow> = chunk_counts(&chunks)
        .into_iter()
        .enumerate()
        .map(|(i, (schema, count))| ChunkCountRow {
            index: (i + 1).to_string().bright_black().to_string(),
            schema: schema.green().to_string(),
            count: count.to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string();
    println!("{}", table);

    let store = &ctx.services.store_service;
    store
        .ensure_schema()
        .await
        .exit_on_err("Failed to prepare chunk store");

    let spinner = new_spinner(format!("Embedding and storing {} chunks...", chunks.len()));
    let result = store.store_schemas(&chunks).await;
    spinner.finish_and_clear();

    let stored = result.exit_on_err("Failed to store schema chunks");
    println!("✅ Stored {} chunks", stored);
}
