use schemadiff::{
    cli::{Cli, Context},
    config::Settings,
    services::AppServices,
    utils,
};

#[tokio::main]
async fn main() {
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let cli = Cli::parse_args();

    utils::logger::init_logging(&settings.logs);

    if !cli.needs_services() {
        cli.execute_standalone(&settings).await;
        return;
    }

    let app_services = match AppServices::new(&settings).await {
        Ok(services) => services,
        Err(e) => {
            eprintln!("❌ Failed to initialize services: {:#}", e);
            std::process::exit(1);
        }
    };

    cli.execute(&Context {
        settings: &settings,
        services: &app_services,
    })
    .await;
}
