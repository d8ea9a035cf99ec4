use std::path::Path;

use clap::Subcommand;
use inquire::Confirm;

use crate::{
    cli::{Context, commands::ExitOnErr},
    db::{init_db, migrations},
    utils::init::{ensure_directories, get_env_file_with_defaults},
};

#[derive(Subcommand, Debug)]
pub enum InitCommands {
    /// initialize .env file, working directories and database using defaults
    All {
        /// Overwrite existing .env file
        #[arg(short, long, default_value_t = false)]
        overwrite: bool,
    },

    /// initialize .env file
    Env {
        /// Overwrite existing .env file
        #[arg(short, long, default_value_t = false)]
        overwrite: bool,
    },

    /// create data, reports and log directories
    Dirs,

    /// initializes database. Run this command after initializing .env file
    /// Runs migrations.
    Db,
}

pub async fn execute(action: &Option<InitCommands>, ctx: &Context<'_>) {
    match action {
        Some(InitCommands::All { overwrite }) => init_all(*overwrite, ctx).await,
        None => init_all(false, ctx).await,
        Some(InitCommands::Env { overwrite }) => init_env_file(*overwrite),
        Some(InitCommands::Dirs) => init_directories(ctx),
        Some(InitCommands::Db) => init_database(ctx).await,
    }
}

async fn init_all(overwrite: bool, ctx: &Context<'_>) {
    init_env_file(overwrite);
    init_directories(ctx);
    init_database(ctx).await;
}

fn init_env_file(overwrite: bool) {
    let env_file =
        get_env_file_with_defaults("env.default.jinja").exit_on_err("Failed to get env file");

    if Path::new(".env").exists() && !overwrite {
        let should_overwrite =
            Confirm::new("A .env file already exists. Do you want to overwrite it?")
                .with_default(false)
                .prompt()
                .unwrap_or(false);

        if !should_overwrite {
            println!("Keeping existing .env file.");
            return;
        }
    }

    std::fs::write(".env", env_file).exit_on_err("Failed to create .env file");
    println!("✅ Successfully created .env file.");
}

fn init_directories(ctx: &Context<'_>) {
    let created = ensure_directories(ctx.settings).exit_on_err("Failed to create directories");
    for dir in created {
        println!("✅ Directory ready: {}", dir);
    }
}

async fn init_database(ctx: &Context<'_>) {
    let db = init_db(ctx.settings)
        .await
        .exit_on_err("Failed to connect to database");

    migrations::up(&db)
        .await
        .exit_on_err("Failed to run migrations");
    println!("✅ Chunk store initialized");
}
