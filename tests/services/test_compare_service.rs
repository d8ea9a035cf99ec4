use anyhow::Result;
use schemadiff::{
    errors::CompareError,
    ingest::chunk_tables,
    services::resolve_schema_names,
};

use crate::common::{TestEnv, init_test_env};

const EMPLOYEE: &str = r#"
-- HR schema
CREATE TABLE employees (
    id INT,
    name VARCHAR(100),
    legacy_flag BOOLEAN
);

CREATE TABLE payroll (id INT, amount DECIMAL);
"#;

const CONTRACTOR: &str = r#"
CREATE TABLE employees (
    id INT,
    name TEXT
);

CREATE TABLE invoices (id INT);
"#;

fn write_documents(env: &TestEnv) {
    env.write_document("employee_management.sql", EMPLOYEE);
    env.write_document("contractor_management.sql", CONTRACTOR);
    env.write_document("notes.md", "ignored");
}

#[tokio::test]
async fn test_compare_documents() -> Result<()> {
    let env = init_test_env().await?;
    write_documents(&env);
    let service = &env.services.compare_service;

    let loaded = service.load_records(&env.data_dir())?;
    let records = loaded.records.clone();
    assert_eq!(records.len(), 4);

    let (source, destination) = resolve_schema_names(
        &env.settings.compare.source_schema,
        &env.settings.compare.destination_schema,
        &loaded.available(),
    )?;
    assert_eq!(source, "employee_management");
    assert_eq!(destination, "contractor_management");

    let report = service.compare_records(&records, &source, &destination);
    assert!(!report.success);

    let tables: Vec<&str> = report.results.iter().map(|t| t.table.as_str()).collect();
    assert_eq!(tables, vec!["employees", "invoices", "payroll"]);

    let doc = report.to_document();
    assert_eq!(
        doc.results[0].meta.column_results,
        vec![
            "✅ Column 'id' matches with datatype: INT",
            "❌ Column 'legacy_flag' is missing in contractor_management",
            "❌ Column 'name' has different datatypes: VARCHAR(100) vs TEXT",
        ]
    );
    assert_eq!(
        doc.results[1].meta.status,
        "❌ Table 'invoices' is missing in employee_management"
    );
    assert_eq!(
        doc.results[2].meta.status,
        "❌ Table 'payroll' is missing in contractor_management"
    );

    Ok(())
}

#[tokio::test]
async fn test_report_round_trip() -> Result<()> {
    let env = init_test_env().await?;
    write_documents(&env);
    let service = &env.services.compare_service;

    let records = service.load_records(&env.data_dir())?.records;
    let report =
        service.compare_records(&records, "employee_management", "contractor_management");

    let path = service.write_report(&report)?;
    assert!(path.ends_with("validation_reports.json"));

    let doc = service.read_report(None)?;
    assert_eq!(doc, report.to_document());

    let html_path = service.write_html(&doc)?;
    let html = std::fs::read_to_string(html_path)?;
    assert!(html.contains("employees"));
    assert!(html.contains("invoices"));

    Ok(())
}

#[tokio::test]
async fn test_read_missing_report() -> Result<()> {
    let env = init_test_env().await?;
    let missing = env.dir.path().join("nope.json");

    let err = env
        .services
        .compare_service
        .read_report(Some(&missing))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompareError>(),
        Some(CompareError::ReportNotFound { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_compare_from_store_matches_documents() -> Result<()> {
    let env = init_test_env().await?;
    write_documents(&env);
    let compare = &env.services.compare_service;
    let store = &env.services.store_service;

    let records = compare.load_records(&env.data_dir())?.records;
    store.store_schemas(&chunk_tables(&records)).await?;

    let mut stored = store.records_for_schema("employee_management").await?;
    stored.extend(store.records_for_schema("contractor_management").await?);

    let from_documents =
        compare.compare_records(&records, "employee_management", "contractor_management");
    let from_store =
        compare.compare_records(&stored, "employee_management", "contractor_management");

    assert_eq!(from_documents.success, from_store.success);
    assert_eq!(from_documents.results, from_store.results);
    Ok(())
}

#[tokio::test]
async fn test_single_schema_cannot_be_compared() -> Result<()> {
    let env = init_test_env().await?;
    env.write_document("employee_management.sql", EMPLOYEE);

    let loaded = env
        .services
        .compare_service
        .load_records(&env.data_dir())?;
    let err = resolve_schema_names(
        "employee_management",
        "contractor_management",
        &loaded.available(),
    )
    .unwrap_err();

    assert!(matches!(err, CompareError::NotEnoughSchemas { .. }));
    Ok(())
}

#[tokio::test]
async fn test_empty_document_counts_as_schema() -> Result<()> {
    let env = init_test_env().await?;
    env.write_document("employee_management.sql", "-- nothing here yet\n");
    env.write_document("contractor_management.sql", CONTRACTOR);
    let service = &env.services.compare_service;

    let loaded = service.load_records(&env.data_dir())?;
    let (source, destination) = resolve_schema_names(
        &env.settings.compare.source_schema,
        &env.settings.compare.destination_schema,
        &loaded.available(),
    )?;
    assert_eq!(source, "employee_management");
    assert_eq!(destination, "contractor_management");

    let report = service.compare_records(&loaded.records, &source, &destination);
    assert!(!report.success);

    let statuses: Vec<String> = report
        .to_document()
        .results
        .into_iter()
        .map(|t| t.meta.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            "❌ Table 'employees' is missing in employee_management",
            "❌ Table 'invoices' is missing in employee_management",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_document_keeps_configured_pair_with_other_schemas() -> Result<()> {
    let env = init_test_env().await?;
    env.write_document("employee_management.sql", "");
    env.write_document("contractor_management.sql", CONTRACTOR);
    env.write_document("other.sql", "CREATE TABLE audit (id INT);");

    let loaded = env
        .services
        .compare_service
        .load_records(&env.data_dir())?;
    assert_eq!(
        loaded.available(),
        vec!["contractor_management", "employee_management", "other"]
    );

    let (source, destination) = resolve_schema_names(
        &env.settings.compare.source_schema,
        &env.settings.compare.destination_schema,
        &loaded.available(),
    )?;
    assert_eq!(source, "employee_management");
    assert_eq!(destination, "contractor_management");
    Ok(())
}
