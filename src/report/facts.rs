use serde::Serialize;
use serde_json::{Value, json};

use crate::report::ReportDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDifference {
    pub table: String,
    pub differences: Vec<String>,
}

/// Table membership per schema, read back from a persisted report.
///
/// Tables present in both schemas appear on both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFacts {
    pub source_schema: String,
    pub destination_schema: String,
    pub source_tables: Vec<String>,
    pub destination_tables: Vec<String>,
    pub table_differences: Vec<TableDifference>,
}

impl SchemaFacts {
    pub fn from_document(doc: &ReportDocument) -> Self {
        let source = doc.meta.source_schema.clone();
        let destination = doc.meta.destination_schema.clone();
        let missing_in_source = format!("missing in {}", source);
        let missing_in_destination = format!("missing in {}", destination);

        let mut facts = Self {
            source_schema: source,
            destination_schema: destination,
            source_tables: Vec::new(),
            destination_tables: Vec::new(),
            table_differences: Vec::new(),
        };

        for result in &doc.results {
            let table = result.kwargs.table.clone();
            let status = result.meta.status.as_str();

            if status.ends_with(&missing_in_destination) {
                facts.source_tables.push(table);
            } else if status.ends_with(&missing_in_source) {
                facts.destination_tables.push(table);
            } else {
                facts.source_tables.push(table.clone());
                facts.destination_tables.push(table.clone());

                let differences: Vec<String> = result
                    .meta
                    .column_results
                    .iter()
                    .filter(|r| r.contains("missing"))
                    .cloned()
                    .collect();

                if !differences.is_empty() {
                    facts
                        .table_differences
                        .push(TableDifference { table, differences });
                }
            }
        }

        facts
    }

    /// Narrows the facts to the schema a question is about.
    ///
    /// The destination name is checked first, so a question naming both schemas gets the
    /// destination list.
    pub fn facts_for_question(&self, question: &str) -> Value {
        let question = question.to_lowercase();

        if question.contains(&self.destination_schema.to_lowercase()) {
            json!({ "tables": self.destination_tables })
        } else if question.contains(&self.source_schema.to_lowercase()) {
            json!({ "tables": self.source_tables })
        } else {
            json!({
                "tables": {
                    self.source_schema.as_str(): self.source_tables,
                    self.destination_schema.as_str(): self.destination_tables,
                },
                "table_differences": self.table_differences,
            })
        }
    }
}
