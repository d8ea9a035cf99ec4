use anyhow::Result;
use schemadiff::{compare::compare_text, report::SchemaFacts, types::SplitPolicy};

use crate::common::init_test_env;

fn sample_document() -> schemadiff::report::ReportDocument {
    compare_text(
        "CREATE TABLE users (id INT, legacy_flag BOOLEAN);\nCREATE TABLE payroll (id INT);",
        "CREATE TABLE users (id INT);\nCREATE TABLE invoices (id INT);",
        "employee_management",
        "contractor_management",
        SplitPolicy::Naive,
    )
    .to_document()
}

#[tokio::test]
async fn test_summarize_uses_summary_temperature() -> Result<()> {
    let env = init_test_env().await?;
    let assistant = &env.services.assistant_service;

    let summary = assistant.summarize(&sample_document()).await?;
    assert_eq!(summary, "stub answer");

    let (prompt, temperature) = env.generator.last_call().expect("generator was called");
    assert_eq!(temperature, env.settings.llm.summary_temperature);
    assert!(prompt.contains("\"employee_management\" (source)"));
    assert!(prompt.contains("\"contractor_management\" (destination)"));
    assert!(prompt.contains("expect_table_schema_to_match"));

    let path = assistant.write_summary(&summary)?;
    assert!(path.ends_with("validation_reports_summary.txt"));
    assert_eq!(std::fs::read_to_string(path)?, "stub answer");
    Ok(())
}

#[tokio::test]
async fn test_answer_narrows_facts_to_schema() -> Result<()> {
    let env = init_test_env().await?;
    let facts = SchemaFacts::from_document(&sample_document());

    let answer = env
        .services
        .assistant_service
        .answer(&facts, "Which tables are in contractor_management?")
        .await?;
    assert_eq!(answer, "stub answer");

    let (prompt, temperature) = env.generator.last_call().expect("generator was called");
    assert_eq!(temperature, env.settings.llm.qa_temperature);
    assert!(prompt.contains("invoices"));
    assert!(!prompt.contains("payroll"));
    assert!(prompt.contains("User question: Which tables are in contractor_management?"));
    Ok(())
}

#[tokio::test]
async fn test_answer_general_question_gets_all_facts() -> Result<()> {
    let env = init_test_env().await?;
    let facts = SchemaFacts::from_document(&sample_document());

    env.services
        .assistant_service
        .answer(&facts, "What differs?")
        .await?;

    let (prompt, _) = env.generator.last_call().expect("generator was called");
    assert!(prompt.contains("payroll"));
    assert!(prompt.contains("invoices"));
    assert!(prompt.contains("legacy_flag"));
    Ok(())
}
