#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use anyhow::{ensure, Context, Result};
use articleone::{
    cli::{self, Args},
    config::Config,
    http::HttpClient,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            ensure!(path.is_file(), "config file not found: {}", path.display());
            Config::load_from(path)
        }
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    // stdout carries only the tables
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    if !args.any_report() {
        tracing::warn!("no report selected; pass --members, --senators or --representatives");
        return Ok(());
    }

    let client = HttpClient::from_config(&config.http).context("failed to build HTTP client")?;
    let output = cli::run(&args, &config.sources, &client).await?;
    emit(&output);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn emit(output: &str) {
    print!("{output}");
}
