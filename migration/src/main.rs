use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The migration CLI reads DATABASE_URL; mirror the application's setting into it.
    if let Ok(db_url) = std::env::var("SCHEMADIFF__DATABASE__URL") {
        std::env::set_var("DATABASE_URL", db_url);
    }

    cli::run_cli(migration::Migrator).await;
}
