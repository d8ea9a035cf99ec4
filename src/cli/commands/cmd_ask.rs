use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use inquire::Text;

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, new_spinner},
    },
    report::SchemaFacts,
};

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Path of the JSON report, defaults to the configured report location
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Ask a single question instead of starting an interactive session
    #[arg(short, long)]
    pub question: Option<String>,
}

pub async fn execute(args: &AskArgs, ctx: &Context<'_>) {
    let doc = ctx
        .services
        .compare_service
        .read_report(args.report.as_deref())
        .exit_on_err("Failed to read report");
    let facts = SchemaFacts::from_document(&doc);

    if let Some(question) = &args.question {
        answer(&facts, question, ctx).await;
        return;
    }

    println!(
        "Ask about {} and {}. Type {} or {} to leave.",
        facts.source_schema.green(),
        facts.destination_schema.green(),
        "exit".bold(),
        "quit".bold()
    );

    loop {
        let question = match Text::new("Question:").prompt() {
            Ok(q) => q,
            Err(_) => break,
        };

        let question = question.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_command(question) {
            break;
        }

        answer(&facts, question, ctx).await;
    }
}

async fn answer(facts: &SchemaFacts, question: &str, ctx: &Context<'_>) {
    let spinner = new_spinner("Thinking...");
    let result = ctx.services.assistant_service.answer(facts, question).await;
    spinner.finish_and_clear();

    match result {
        Ok(answer) => println!("{}\n", answer),
        Err(e) => eprintln!("❌ Failed to answer question: {:#}", e),
    }
}

fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exit_command() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(!is_exit_command("exit now"));
        assert!(!is_exit_command("which tables?"));
    }
}
