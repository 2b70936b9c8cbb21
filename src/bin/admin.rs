//! CLI administration tool for click-tracker.
//!
//! Provides commands for viewing click statistics and checking the database
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View aggregate click counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use click_tracker::application::services::StatsService;
use click_tracker::domain::destination::{AllowList, DEFAULT_AMAZON_URL, DEFAULT_WALMART_URL};
use click_tracker::infrastructure::persistence::PgClickRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing click-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show aggregate click statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Verify the database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => show_stats(pool).await,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(pool).await,
    }
}

/// Prints the aggregate counts per destination plus the total.
async fn show_stats(pool: PgPool) -> Result<()> {
    let amazon_url =
        std::env::var("AMAZON_URL").unwrap_or_else(|_| DEFAULT_AMAZON_URL.to_string());
    let walmart_url =
        std::env::var("WALMART_URL").unwrap_or_else(|_| DEFAULT_WALMART_URL.to_string());
    let allow_list = AllowList::from_urls(amazon_url, walmart_url)
        .context("Invalid destination allow-list configuration")?;

    let repository = Arc::new(PgClickRepository::new(Arc::new(pool)));
    let service = StatsService::new(repository, allow_list);

    let stats = service
        .snapshot()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {e:?}"))?;

    println!("{}", "Click statistics".bold());
    println!("  {}  {}", "amazon: ".cyan(), stats.amazon.to_string().green());
    println!("  {}  {}", "walmart:".cyan(), stats.walmart.to_string().green());
    println!("  {}  {}", "total:  ".cyan(), stats.total.to_string().green());

    Ok(())
}

/// Runs a connectivity probe and reports the result.
async fn check_db(pool: PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Database check failed")?;

    println!("{}", "Database connection OK".green());
    Ok(())
}
