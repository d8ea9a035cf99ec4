use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    compare::compare_text,
    config::Settings,
    ddl::{DdlRecord, extract},
    errors::CompareError,
    ingest::{list_documents, namespace_for, read_document},
    report::{ComparisonReport, ReportDocument, render_html},
};

/// Statements extracted from a document directory, plus the namespace of every document read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSchemas {
    pub records: Vec<DdlRecord>,
    pub namespaces: Vec<String>,
}

impl LoadedSchemas {
    /// Schemas that can be compared, including documents without any statement.
    pub fn available(&self) -> Vec<String> {
        available_schemas(&self.records, &self.namespaces)
    }
}

pub struct CompareService {
    settings: Settings,
}

impl CompareService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Extracts statements from every supported document in `dir`, using each file's
    /// name as the default namespace.
    pub fn load_records(&self, dir: &Path) -> Result<LoadedSchemas> {
        let extensions = &self.settings.paths.extensions;
        let files = list_documents(dir, extensions)
            .context(format!("Failed to list documents in {}", dir.display()))?;

        let mut loaded = LoadedSchemas::default();
        for file in files {
            let text = read_document(&file, extensions)?;
            let namespace = namespace_for(&file);
            let extracted = extract(&text, &namespace);
            info!(file = %file.display(), statements = extracted.len(), "Parsed document");
            loaded.records.extend(extracted);
            loaded.namespaces.push(namespace);
        }

        info!(total = loaded.records.len(), "Statements extracted");
        Ok(loaded)
    }

    /// Compares two schemas of `records`, rebuilding each side from its joined statements.
    pub fn compare_records(
        &self,
        records: &[DdlRecord],
        source: &str,
        destination: &str,
    ) -> ComparisonReport {
        info!(source, destination, "Comparing schemas");
        compare_text(
            &joined_ddl(records, source),
            &joined_ddl(records, destination),
            source,
            destination,
            self.settings.compare.split_policy,
        )
    }

    /// Writes the pretty-printed JSON report and returns its path.
    pub fn write_report(&self, report: &ComparisonReport) -> Result<PathBuf> {
        let json = report
            .to_json_pretty()
            .context("Failed to serialize comparison report")?;
        let path = self.settings.report_path(".json");
        write_file(&path, &json)?;
        info!(path = %path.display(), "Report written");
        Ok(path)
    }

    pub fn write_html(&self, doc: &ReportDocument) -> Result<PathBuf> {
        let html = render_html(doc)?;
        let path = self.settings.report_path(".html");
        write_file(&path, &html)?;
        info!(path = %path.display(), "HTML report written");
        Ok(path)
    }

    /// Loads a persisted report; `None` reads the configured report location.
    pub fn read_report(&self, path: Option<&Path>) -> Result<ReportDocument> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.settings.report_path(".json"));

        if !path.is_file() {
            return Err(CompareError::ReportNotFound { path }.into());
        }

        let json = std::fs::read_to_string(&path)
            .context(format!("Failed to read report {}", path.display()))?;
        ReportDocument::from_json(&json).context(format!("Invalid report {}", path.display()))
    }
}

/// Schema names of `records` and document `namespaces`, sorted and deduplicated.
pub fn available_schemas(records: &[DdlRecord], namespaces: &[String]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.schema_name.clone())
        .chain(namespaces.iter().cloned())
        .unique()
        .sorted()
        .collect()
}

/// Picks the source and destination schema.
///
/// The configured pair wins when both are available; otherwise the first two available
/// names are used.
pub fn resolve_schema_names(
    source: &str,
    destination: &str,
    available: &[String],
) -> Result<(String, String), CompareError> {
    let has = |name: &str| available.iter().any(|a| a == name);
    if has(source) && has(destination) {
        return Ok((source.to_string(), destination.to_string()));
    }

    let sorted: Vec<&String> = available.iter().unique().sorted().collect();
    match sorted.as_slice() {
        [first, second, ..] => {
            warn!(
                configured_source = source,
                configured_destination = destination,
                "Configured schemas not found, using {} and {}",
                first,
                second
            );
            Ok((first.to_string(), second.to_string()))
        }
        _ => Err(CompareError::NotEnoughSchemas {
            available: available.to_vec(),
        }),
    }
}

fn joined_ddl(records: &[DdlRecord], schema: &str) -> String {
    records
        .iter()
        .filter(|r| r.schema_name == schema)
        .map(|r| r.ddl.as_str())
        .join("\n")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).context(format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_configured_pair() {
        let available = names(&["contractor_management", "employee_management", "other"]);
        let (source, destination) =
            resolve_schema_names("employee_management", "contractor_management", &available)
                .unwrap();
        assert_eq!(source, "employee_management");
        assert_eq!(destination, "contractor_management");
    }

    #[test]
    fn test_resolve_falls_back_to_sorted_names() {
        let available = names(&["zeta", "alpha", "beta"]);
        let (source, destination) = resolve_schema_names("hr", "crm", &available).unwrap();
        assert_eq!(source, "alpha");
        assert_eq!(destination, "beta");
    }

    #[test]
    fn test_resolve_needs_two_schemas() {
        let err = resolve_schema_names("hr", "crm", &names(&["hr"])).unwrap_err();
        assert!(matches!(err, CompareError::NotEnoughSchemas { .. }));
    }

    #[test]
    fn test_available_schemas() {
        let mut records = extract("CREATE TABLE a (id INT); CREATE TABLE b (id INT);", "y");
        records.extend(extract("CREATE TABLE hr.c (id INT);", "x"));
        assert_eq!(available_schemas(&records, &[]), vec!["hr", "y"]);
    }

    #[test]
    fn test_available_schemas_include_empty_documents() {
        let loaded = LoadedSchemas {
            records: extract("CREATE TABLE a (id INT);", "contractor_management"),
            namespaces: names(&["contractor_management", "employee_management"]),
        };
        assert_eq!(
            loaded.available(),
            vec!["contractor_management", "employee_management"]
        );
    }

    #[test]
    fn test_joined_ddl_keeps_schema_statements() {
        let mut records = extract("CREATE TABLE a (id INT);", "left");
        records.extend(extract("CREATE TABLE b (id INT);", "right"));
        records.extend(extract("CREATE TABLE c (id INT);", "left"));

        assert_eq!(
            joined_ddl(&records, "left"),
            "CREATE TABLE a (id INT);\nCREATE TABLE c (id INT);"
        );
        assert_eq!(joined_ddl(&records, "missing"), "");
    }
}
