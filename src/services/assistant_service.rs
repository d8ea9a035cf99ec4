use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use tera::Context as TeraContext;
use tracing::info;

use crate::{
    config::Settings,
    llm::TextGenerator,
    report::{ReportDocument, SchemaFacts},
    utils::render_template,
};

/// Natural-language summaries of reports and answers about their facts.
pub struct AssistantService {
    settings: Settings,
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    pub fn new(settings: Settings, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            settings,
            generator,
        }
    }

    pub fn summary_prompt(&self, doc: &ReportDocument) -> Result<String> {
        let report =
            serde_json::to_string_pretty(doc).context("Failed to serialize report for summary")?;

        let mut context = TeraContext::new();
        context.insert("source_schema", &doc.meta.source_schema);
        context.insert("destination_schema", &doc.meta.destination_schema);
        context.insert("report", &report);
        render_template("summary.txt.jinja", &context)
    }

    pub async fn summarize(&self, doc: &ReportDocument) -> Result<String> {
        let prompt = self.summary_prompt(doc)?;
        info!(
            source = %doc.meta.source_schema,
            destination = %doc.meta.destination_schema,
            "Requesting report summary"
        );
        self.generator
            .generate(&prompt, self.settings.llm.summary_temperature)
            .await
            .context("Failed to generate report summary")
    }

    pub fn write_summary(&self, summary: &str) -> Result<PathBuf> {
        let path = self.settings.report_path("_summary.txt");
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, summary).context(format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Summary written");
        Ok(path)
    }

    pub fn answer_prompt(&self, facts: &SchemaFacts, question: &str) -> Result<String> {
        let facts_json = serde_json::to_string_pretty(&facts.facts_for_question(question))
            .context("Failed to serialize schema facts")?;

        let mut context = TeraContext::new();
        context.insert("facts", &facts_json);
        context.insert("question", question);
        render_template("qa.txt.jinja", &context)
    }

    /// Answers `question` using only the facts relevant to it.
    pub async fn answer(&self, facts: &SchemaFacts, question: &str) -> Result<String> {
        let prompt = self.answer_prompt(facts, question)?;
        self.generator
            .generate(&prompt, self.settings.llm.qa_temperature)
            .await
            .context("Failed to answer question")
    }
}
