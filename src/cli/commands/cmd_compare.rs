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
    compare::{TableComparison, TablePresence},
    ddl::DdlRecord,
    report::ComparisonReport,
    services::resolve_schema_names,
    types::ColumnStatus,
};

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Source schema name, defaults to the configured source schema
    #[arg(short, long)]
    pub source: Option<String>,

    /// Destination schema name, defaults to the configured destination schema
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Directory of schema documents, defaults to the configured data directory
    #[arg(long, conflicts_with = "from_store")]
    pub dir: Option<PathBuf>,

    /// Read statements from the chunk store instead of the documents
    #[arg(long, default_value_t = false)]
    pub from_store: bool,

    /// Also write an HTML page next to the JSON report
    #[arg(long, default_value_t = false)]
    pub html: bool,

    /// Also write a language model summary of the report
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "#")]
    index: String,

    #[tabled(rename = "Table")]
    table: String,

    #[tabled(rename = "Status")]
    status: String,

    #[tabled(rename = "Match")]
    matches: String,

    #[tabled(rename = "Type Mismatch")]
    mismatches: String,

    #[tabled(rename = "Missing in Source")]
    missing_in_source: String,

    #[tabled(rename = "Missing in Destination")]
    missing_in_destination: String,
}

pub async fn execute(args: &CompareArgs, ctx: &Context<'_>) {
    let settings = ctx.settings;
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| settings.compare.source_schema.clone());
    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| settings.compare.destination_schema.clone());

    let (source, destination, records) = if args.from_store {
        records_from_store(&source, &destination, ctx).await
    } else {
        records_from_documents(args.dir.clone(), &source, &destination, ctx)
    };

    println!(
        "Comparing schemas: {} (source) and {} (destination)",
        source.green(),
        destination.green()
    );

    let compare_service = &ctx.services.compare_service;
    let report = compare_service.compare_records(&records, &source, &destination);
    print_report(&report);

    let path = compare_service
        .write_report(&report)
        .exit_on_err("Failed to write report");
    println!("✅ Report written to {}", path.display());

    let doc = report.to_document();
    if args.html {
        let path = compare_service
            .write_html(&doc)
            .exit_on_err("Failed to write HTML report");
        println!("✅ HTML report written to {}", path.display());
    }

    if args.summary {
        let assistant = &ctx.services.assistant_service;
        let spinner = new_spinner("Generating summary...");
        let result = assistant.summarize(&doc).await;
        spinner.finish_and_clear();

        let summary = result.exit_on_err("Failed to summarize report");
        let path = assistant
            .write_summary(&summary)
            .exit_on_err("Failed to write summary");
        println!("{}", "=== Summary ===".blue());
        println!("{}", summary);
        println!("✅ Summary written to {}", path.display());
    }
}

fn records_from_documents(
    dir: Option<PathBuf>,
    source: &str,
    destination: &str,
    ctx: &Context<'_>,
) -> (String, String, Vec<DdlRecord>) {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&ctx.settings.paths.data_directory));
    let loaded = ctx
        .services
        .compare_service
        .load_records(&dir)
        .exit_on_err("Failed to load schema documents");

    let (source, destination) = resolve_schema_names(source, destination, &loaded.available())
        .exit_on_err("Cannot compare schemas");
    (source, destination, loaded.records)
}

async fn records_from_store(
    source: &str,
    destination: &str,
    ctx: &Context<'_>,
) -> (String, String, Vec<DdlRecord>) {
    let store = &ctx.services.store_service;
    store
        .ensure_schema()
        .await
        .exit_on_err("Failed to prepare chunk store");

    let available = store
        .schema_names()
        .await
        .exit_on_err("Failed to list stored schemas");
    let (source, destination) = resolve_schema_names(source, destination, &available)
        .exit_on_err("Cannot compare schemas");

    let mut records = store
        .records_for_schema(&source)
        .await
        .exit_on_err("Failed to read source schema");
    records.extend(
        store
            .records_for_schema(&destination)
            .await
            .exit_on_err("Failed to read destination schema"),
    );
    (source, destination, records)
}

fn table_status(table: &TableComparison) -> String {
    match table.presence {
        TablePresence::MissingInLeft => "MISSING IN SOURCE".yellow().bold().to_string(),
        TablePresence::MissingInRight => "MISSING IN DESTINATION".yellow().bold().to_string(),
        TablePresence::Both if table.success() => "MATCH".green().bold().to_string(),
        TablePresence::Both => "DIFFERENT".red().bold().to_string(),
    }
}

fn print_report(report: &ComparisonReport) {
    println!("{}", "=== Comparison ===".blue());
    if report.results.is_empty() {
        println!("⚠️ No tables found in either schema");
        return;
    }

    let rows: Vec<TableRow> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, t)| TableRow {
            index: (i + 1).to_string().bright_black().to_string(),
            table: t.table.clone(),
            status: table_status(t),
            matches: t.count(ColumnStatus::Match).to_string(),
            mismatches: t.count(ColumnStatus::TypeMismatch).to_string(),
            missing_in_source: t.count(ColumnStatus::MissingInLeft).to_string(),
            missing_in_destination: t.count(ColumnStatus::MissingInRight).to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string();
    println!("{}", table);

    let failed = report.failed_tables().count();
    if report.success {
        println!("✅ All {} tables match", report.results.len());
    } else {
        println!(
            "❌ {} of {} tables differ",
            failed,
            report.results.len()
        );
    }
}
