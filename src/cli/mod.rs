mod commands;

use clap::Parser;
use colored::Colorize;

use crate::cli::commands::{
    Commands, cmd_ask, cmd_compare, cmd_config, cmd_db, cmd_init, cmd_load, cmd_render,
    cmd_search, cmd_summarize, cmd_version,
};
use crate::config::Settings;
use crate::services::AppServices;

pub struct Context<'a> {
    pub settings: &'a Settings,
    pub services: &'a AppServices,
}

#[derive(Parser, Debug)]
#[command(
    name = "schemadiff",
    about = "Compare relational schemas extracted from DDL documents",
    long_about = format!(
r#"{} - {}"#,
"SCHEMADIFF".green().bold(),
"Structural comparison of two database schemas, with JSON/HTML reports and optional language model summaries."
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Commands that need neither the chunk store nor the language model.
    pub fn needs_services(&self) -> bool {
        !matches!(
            self.command,
            Commands::Config | Commands::Version(_) | Commands::Db { .. }
        )
    }

    pub async fn execute(&self, ctx: &Context<'_>) {
        match &self.command {
            Commands::Init { action } => cmd_init::execute(action, ctx).await,
            Commands::Db { action } => cmd_db::execute(action, ctx.settings).await,
            Commands::Load(args) => cmd_load::execute(args, ctx).await,
            Commands::Compare(args) => cmd_compare::execute(args, ctx).await,
            Commands::Render(args) => cmd_render::execute(args, ctx).await,
            Commands::Summarize(args) => cmd_summarize::execute(args, ctx).await,
            Commands::Ask(args) => cmd_ask::execute(args, ctx).await,
            Commands::Search(args) => cmd_search::execute(args, ctx).await,
            Commands::Config => cmd_config::execute(ctx.settings),
            Commands::Version(action) => cmd_version::execute(action, ctx.settings).await,
        }
    }

    /// Runs commands that only read settings.
    pub async fn execute_standalone(&self, settings: &Settings) {
        match &self.command {
            Commands::Db { action } => cmd_db::execute(action, settings).await,
            Commands::Config => cmd_config::execute(settings),
            Commands::Version(action) => cmd_version::execute(action, settings).await,
            _ => {}
        }
    }
}
