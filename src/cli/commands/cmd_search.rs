use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Modify, Style, Width,
        object::{Columns, Rows},
    },
};
use terminal_size::{Width as TermWidth, terminal_size};

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, new_spinner},
    },
    ddl::extract,
    ingest::{namespace_for, read_document},
};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Schema the query statements belong to; its own chunks are left out
    #[arg(short, long)]
    pub schema: String,

    /// Number of nearest chunks considered per statement
    #[arg(short = 'k', long, default_value_t = 5)]
    pub top_k: usize,

    /// Document with the statements to search for
    pub file: PathBuf,
}

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "#")]
    index: String,

    #[tabled(rename = "Chunk")]
    chunk_id: String,

    #[tabled(rename = "Schema")]
    schema: String,

    #[tabled(rename = "Table")]
    table: String,

    #[tabled(rename = "Score")]
    score: String,

    #[tabled(rename = "Statement")]
    content: String,
}

pub async fn execute(args: &SearchArgs, ctx: &Context<'_>) {
    let text = read_document(&args.file, &ctx.settings.paths.extensions)
        .exit_on_err("Failed to read query document");

    let records = extract(&text, &namespace_for(&args.file));
    let queries: Vec<(String, String)> = if records.is_empty() {
        vec![(args.file.display().to_string(), text)]
    } else {
        records.into_iter().map(|r| (r.table_name, r.ddl)).collect()
    };

    let store = &ctx.services.store_service;
    store
        .ensure_schema()
        .await
        .exit_on_err("Failed to prepare chunk store");

    let terminal_width = if let Some((TermWidth(w), _)) = terminal_size() {
        w as usize
    } else {
        80
    };

    for (label, ddl) in queries {
        let spinner = new_spinner(format!("Searching for '{}'...", label));
        let result = store.retrieve_similar(&ddl, &args.schema, args.top_k).await;
        spinner.finish_and_clear();

        let hits = result.exit_on_err("Failed to search chunk store");
        println!("{}", format!("=== {} ===", label).blue());
        if hits.is_empty() {
            println!("⚠️ No similar statements in other schemas");
            continue;
        }

        let rows: Vec<HitRow> = hits
            .into_iter()
            .enumerate()
            .map(|(i, hit)| HitRow {
                index: (i + 1).to_string().bright_black().to_string(),
                chunk_id: hit.chunk_id,
                schema: hit.schema.green().to_string(),
                table: hit.table,
                score: format!("{:.4}", hit.score),
                content: hit.content.lines().next().unwrap_or_default().to_string(),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
            .with(Modify::new(Columns::one(5)).with(Width::truncate(60).suffix("...")))
            .with(Width::truncate(terminal_width))
            .to_string();
        println!("{}", table);
    }
}
