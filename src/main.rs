//! Bookstall main entry point
//!
//! This is the command-line interface for the Bookstall catalog scraper.

use bookstall::config::{load_config, Config};
use bookstall::export::{CsvExporter, ExportSink};
use bookstall::scrape::{build_http_client, discover_categories, CategoryScraper, Pacer};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bookstall: a catalog website scraper
///
/// Bookstall discovers a catalog site's categories, paginates each
/// category's listing, scrapes every product detail page into a
/// structured record, and exports one CSV file (plus cover images) per
/// category.
#[derive(Parser, Debug)]
#[command(name = "bookstall")]
#[command(version)]
#[command(about = "A catalog website scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return ExitCode::SUCCESS;
    }

    if run_pipeline(config).await {
        tracing::info!("Web scraping finished");
        ExitCode::SUCCESS
    } else {
        tracing::error!("Process failed");
        ExitCode::FAILURE
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookstall=info,warn"),
            1 => EnvFilter::new("bookstall=debug,info"),
            2 => EnvFilter::new("bookstall=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &Config) {
    println!("=== Bookstall Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);

    println!("\nScraper:");
    println!("  Request delay: {}ms", config.scraper.request_delay_ms);
    println!("  User agent: {}", config.scraper.user_agent);

    println!("\nOutput:");
    println!("  Data directory: {}", config.output.data_dir);
    println!("  Images directory: {}", config.output.images_dir);

    println!("\n✓ Configuration is valid");
}

/// Runs the whole pipeline: discovery, per-category scrape, export
///
/// Returns the aggregate success flag: false as soon as any category's
/// export fails, while remaining categories are still processed. Scrape
/// failures (dead pages, dead products) are contained inside the scrape
/// stage and do not affect this flag.
async fn run_pipeline(config: Config) -> bool {
    let client = match build_http_client(&config.scraper.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return false;
        }
    };

    let pacer = Pacer::from_millis(config.scraper.request_delay_ms);
    let exporter = CsvExporter::new(
        &config.output.data_dir,
        &config.output.images_dir,
        client.clone(),
        pacer.clone(),
    );

    tracing::info!("Web scraping in progress...");
    let categories = discover_categories(&client, &config.site.base_url).await;
    if categories.is_empty() {
        tracing::warn!("No categories discovered; nothing to export");
    }

    let mut success = true;
    for category in &categories {
        let scraper =
            CategoryScraper::new(&config.site.base_url, &category.url, &category.title);
        let records = scraper.get_books(&client, &pacer).await;

        tracing::info!(
            "Creating CSV file for {} ({} records)...",
            category.title,
            records.len()
        );
        match exporter.export(&records, &category.title).await {
            Ok(()) => tracing::info!("Export finished with success"),
            Err(e) => {
                tracing::error!("Export failed for {}: {}", category.title, e);
                success = false;
            }
        }
    }

    success
}
