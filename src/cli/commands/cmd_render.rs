use crate::cli::{
    Context,
    commands::{ExitOnErr, ReportArgs},
};

pub async fn execute(args: &ReportArgs, ctx: &Context<'_>) {
    let compare_service = &ctx.services.compare_service;
    let doc = compare_service
        .read_report(args.report.as_deref())
        .exit_on_err("Failed to read report");

    let path = compare_service
        .write_html(&doc)
        .exit_on_err("Failed to write HTML report");
    println!("✅ HTML report written to {}", path.display());
}
