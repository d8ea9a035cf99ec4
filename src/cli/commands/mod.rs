pub mod cmd_ask;
pub mod cmd_compare;
pub mod cmd_config;
pub mod cmd_db;
pub mod cmd_init;
pub mod cmd_load;
pub mod cmd_render;
pub mod cmd_search;
pub mod cmd_summarize;
pub mod cmd_version;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::commands::{
    cmd_ask::AskArgs, cmd_compare::CompareArgs, cmd_db::DbCommands, cmd_init::InitCommands,
    cmd_load::LoadArgs, cmd_search::SearchArgs, cmd_version::VersionCommand,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize application
    Init {
        #[command(subcommand)]
        action: Option<InitCommands>,
    },

    /// Manage chunk store database
    Db {
        #[command(subcommand)]
        action: DbCommands,
    },

    /// Parse schema documents and store their statements with embeddings
    Load(LoadArgs),

    /// Compare two schemas and write the validation report
    Compare(CompareArgs),

    /// Render an HTML page from an existing JSON report
    Render(ReportArgs),

    /// Summarize an existing report with the language model
    Summarize(ReportArgs),

    /// Ask questions about an existing report
    Ask(AskArgs),

    /// Find stored statements of other schemas similar to the statements in a file
    Search(SearchArgs),

    /// Print resolved configuration
    Config,

    /// Print version
    Version(VersionCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Path of the JSON report, defaults to the configured report location
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

pub trait ExitOnErr<T> {
    fn exit_on_err(self, msg: &str) -> T;
}

impl<T, E: std::fmt::Display> ExitOnErr<T> for Result<T, E> {
    fn exit_on_err(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("❌ {}: {}", msg, e);
                std::process::exit(1);
            }
        }
    }
}

pub fn new_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
