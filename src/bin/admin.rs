//! CLI administration tool for url-shortener.
//!
//! Talks to the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Show statistics for an alias
//! cargo run --bin admin -- stats Ab3dE6gH9j
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): prefix used when printing short links
//! - `CODE_MAX_ATTEMPTS` (optional): alias allocation attempts, 1-20, default 5

use url_shortener::application::services::{ShortenerService, ShortenerSettings};
use url_shortener::config::check_code_max_attempts;
use url_shortener::domain::repositories::UrlStore;
use url_shortener::infrastructure::persistence::PgUrlStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
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
    /// Create a short alias for a URL
    Shorten {
        /// Absolute URL to shorten
        url: String,
    },

    /// Show statistics for a short alias
    Stats {
        /// Short alias
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let store = Arc::new(
        PgUrlStore::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    let outcome = match cli.command {
        Commands::Shorten { url } => shorten(store.clone(), &url).await,
        Commands::Stats { code } => show_stats(store.clone(), &code).await,
        Commands::Db { action } => handle_db_action(action, store.as_ref()).await,
    };

    store.close().await;
    outcome
}

fn build_service(store: Arc<PgUrlStore>) -> Result<ShortenerService> {
    let max_attempts = match std::env::var("CODE_MAX_ATTEMPTS") {
        Ok(raw) => raw
            .parse::<usize>()
            .context("CODE_MAX_ATTEMPTS must be a positive integer")?,
        Err(_) => ShortenerSettings::default().max_attempts,
    };
    check_code_max_attempts(max_attempts)?;

    Ok(ShortenerService::new(
        store,
        ShortenerSettings {
            max_attempts,
            ..ShortenerSettings::default()
        },
    ))
}

/// Allocates an alias for `url` and prints the resulting short link.
async fn shorten(store: Arc<PgUrlStore>, url: &str) -> Result<()> {
    let service = build_service(store)?;

    let code = service
        .create(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "✅ Short link created".green().bold());
    println!();
    println!("  Alias:    {}", code.bright_yellow().bold());
    if let Ok(base) = std::env::var("BASE_URL") {
        println!(
            "  Link:     {}",
            service.short_url(&base, &code).bright_cyan()
        );
    }
    println!("  Original: {}", url.trim().bright_white());
    println!();

    Ok(())
}

/// Prints the stored record for `code` without counting a click.
async fn show_stats(store: Arc<PgUrlStore>, code: &str) -> Result<()> {
    let service = build_service(store)?;

    let record = service
        .details(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load stats for {}: {}", code, e))?;

    println!("{}", "📊 Link Statistics".bright_blue().bold());
    println!();
    println!("  Alias:    {}", record.short_code.bright_yellow());
    println!("  Original: {}", record.original_url.bright_white());
    println!(
        "  Created:  {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Clicks:   {}", record.clicks.to_string().cyan().bold());
    println!();

    Ok(())
}

/// Runs database diagnostics.
async fn handle_db_action(action: DbAction, store: &PgUrlStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(store.pool())
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(store.pool())
                .await?;
            let clicks: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
                .fetch_one(store.pool())
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().cyan());
            println!("  Clicks:     {}", clicks.to_string().cyan());
            println!();
        }
    }

    Ok(())
}
