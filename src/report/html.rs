use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::Context;

use crate::{report::ReportDocument, utils::templates::get_template_source};

const REPORT_TEMPLATE: &str = "report.html.jinja";

#[derive(Serialize)]
struct HtmlRow<'a> {
    table: &'a str,
    success: bool,
    status: &'a str,
    passed: Vec<&'a String>,
    failed: Vec<&'a String>,
}

/// Renders a report as a standalone HTML page, one row per table.
pub fn render_html(doc: &ReportDocument) -> Result<String> {
    let rows: Vec<HtmlRow> = doc
        .results
        .iter()
        .map(|r| HtmlRow {
            table: &r.kwargs.table,
            success: r.success,
            status: &r.meta.status,
            passed: r.passed_columns().collect(),
            failed: r.failed_columns().collect(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("meta", &doc.meta);
    context.insert("success", &doc.success);
    context.insert("rows", &rows);
    context.insert(
        "failed_count",
        &doc.results.iter().filter(|r| !r.success).count(),
    );

    let template = get_template_source(REPORT_TEMPLATE)?;
    tera::Tera::one_off(&template, &context, true).context("Failed to render HTML report")
}
