mod reconcile;
mod report;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tienda_core::AppConfig;
use tienda_shopify::AdminClient;
use tracing_subscriber::EnvFilter;

use crate::reconcile::{Mode, ProductStatus, Reconciler};

#[derive(Debug, Parser)]
#[command(name = "tienda-cli")]
#[command(about = "Find and remove duplicate product images in the Shopify catalog")]
struct Cli {
    /// Delete duplicate images. Without this flag the run only reports them.
    #[arg(long)]
    execute: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = tienda_core::load_app_config();
    init_tracing(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    let result = match config {
        Ok(config) => run_with(&cli, &config).await,
        Err(e) => Err(anyhow::Error::new(e).context("failed to load configuration")),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "media reconciliation aborted");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the per-product lines and summary.
fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Fetches the catalog and reconciles it. Per-product failures are reported
/// and still return `Ok`; only client setup or catalog fetch failures are `Err`.
async fn run_with(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let client = AdminClient::new(
        &config.shopify,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build Shopify admin client")?;

    tracing::info!(endpoint = client.endpoint(), "fetching product catalog");
    let products = client
        .fetch_all_products(config.catalog_page_size)
        .await
        .context("failed to fetch product catalog")?;

    let mode = if cli.execute {
        Mode::Execute(client)
    } else {
        Mode::DryRun
    };
    println!(
        "reconciling media for {} products ({})",
        products.len(),
        mode.label()
    );

    let reconciler = Reconciler::new(mode, Duration::from_millis(config.product_delay_ms));
    let report = reconciler.run(&products).await;

    println!();
    print!("{}", report::render_summary(&report.stats, reconciler.mode()));

    let failed: Vec<&str> = report
        .outcomes
        .iter()
        .filter(|o| matches!(o.status, ProductStatus::Error { .. }))
        .map(|o| o.handle.as_str())
        .collect();
    if !failed.is_empty() {
        println!("failed products: {}", failed.join(", "));
    }

    Ok(())
}
