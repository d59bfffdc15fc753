mod client;
mod config;
mod document;
mod errors;
mod models;
mod populate;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::PortfolioClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::populate::populate_document;
use crate::store::{load_template, output_file_name, save_document};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume generator v{}", env!("CARGO_PKG_VERSION"));

    let run_date = Local::now().date_naive();

    // Duplicate the template into an owned tree before any mutation.
    let mut doc = load_template(&config.template_path)?;

    let client = PortfolioClient::new(&config.data_source_host);
    let profile = client.fetch_profile().await.map_err(AppError::from)?;
    info!("Fetched profile ({})", profile.job);
    let histories = client.fetch_histories().await.map_err(AppError::from)?;
    info!("Fetched {} work histories", histories.len());

    populate_document(&mut doc, &profile, &histories, run_date)?;

    let output_path = PathBuf::from(&config.output_dir).join(output_file_name(run_date));
    save_document(&doc, &output_path)?;

    Ok(())
}
