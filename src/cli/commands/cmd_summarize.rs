use colored::Colorize;

use crate::cli::{
    Context,
    commands::{ExitOnErr, ReportArgs, new_spinner},
};

pub async fn execute(args: &ReportArgs, ctx: &Context<'_>) {
    let doc = ctx
        .services
        .compare_service
        .read_report(args.report.as_deref())
        .exit_on_err("Failed to read report");

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
