//! Catalog seeder - populate a library service from XML catalogs

use clap::{error::ErrorKind, Parser};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_seeder::{
    cli::{self, Cli},
    config::{AppConfig, LoggingConfig},
    error::ErrorCode,
    services::{self, CatalogSeeder},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprint!("{}", e);
            print!("{}", cli::usage(&AppConfig::load(None).unwrap_or_default()));
            return Ok(ExitCode::from(ErrorCode::BadUsage as u8));
        }
    };

    let config = AppConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging);

    tracing::debug!("catalog-seeder v{}", env!("CARGO_PKG_VERSION"));

    let target_uri = cli::resolve_uri(cli.uri(), &config.target);
    let files = cli::resolve_files(
        &cli.files,
        &config.catalogs.default_files,
        &cli::program_dir()?,
    );
    let client = cli.client.unwrap_or(config.submitter.client);
    let submitter = services::build_submitter(client, &config.submitter)?;

    tracing::info!("Seeding {} catalog file(s) into {}", files.len(), target_uri);

    let seeder = CatalogSeeder::new(submitter, target_uri);
    let summary = seeder.seed_files(&files).await;

    Ok(ExitCode::from(summary.exit_status()))
}

/// Logs go to stderr; stdout carries the operator-facing progress lines
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("catalog_seeder={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
