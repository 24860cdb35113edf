use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use ilot_product_crawler::config::{BindConfig, Cli, Commands, Config};
use ilot_product_crawler::fetcher::Fetcher;
use ilot_product_crawler::server::{self, AppState};
use ilot_product_crawler::{export, scrape};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        None => serve(&config, BindConfig::from_env()?).await,
        Some(Commands::Serve { bind }) => serve(&config, bind).await,
        Some(Commands::Export { out }) => {
            let fetcher = Fetcher::new(&config)?;
            let products = scrape(&fetcher, &config.site_origin).await?;
            export::save_xlsx(&products, &out)?;
            info!(count = products.len(), out = %out, "Spreadsheet written.");
            Ok(())
        }
    }
}

async fn serve(config: &Config, bind: BindConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    server::start(&bind, state).await
}
