//! CLI administration tool for shorturl.
//!
//! Inspects stored URLs and the short code codec without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Encode an identifier / decode a short code
//! cargo run --bin admin -- encode 125
//! cargo run --bin admin -- decode 21
//!
//! # Show a stored URL by short code or numeric id
//! cargo run --bin admin -- show 21
//! cargo run --bin admin -- show --id 125
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL` or `DB_PATH`.

use shorturl::application::services::UrlService;
use shorturl::config::Config;
use shorturl::domain::entities::ShortenedUrl;
use shorturl::infrastructure::persistence::{self, SqliteUrlRepository};
use shorturl::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Encode a numeric identifier as a short code
    Encode {
        /// Identifier to encode
        id: u64,
    },

    /// Decode a short code into its identifier
    Decode {
        /// Short code to decode
        code: String,
    },

    /// Show a stored URL
    Show {
        /// Short code (or identifier with --id)
        key: String,

        /// Treat the key as a numeric identifier
        #[arg(long)]
        id: bool,
    },

    /// Show statistics
    Stats,

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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => {
            println!("{}", base62::encode(id).bright_yellow().bold());
        }
        Commands::Decode { code } => {
            let id = base62::decode(&code).with_context(|| format!("Cannot decode '{code}'"))?;
            println!("{}", id.to_string().bright_yellow().bold());
            if !base62::is_canonical(&code) {
                println!(
                    "{} issued code for this id is '{}'",
                    "⚠️ ".yellow(),
                    base62::encode(id)
                );
            }
        }
        Commands::Show { key, id } => {
            let config = shorturl::config::load_from_env()?;
            let pool = open_pool(&config).await?;
            show_url(pool, &config, &key, id).await?;
        }
        Commands::Stats => {
            let config = shorturl::config::load_from_env()?;
            let pool = open_pool(&config).await?;
            handle_stats(&pool).await?;
        }
        Commands::Db { action } => {
            let config = shorturl::config::load_from_env()?;
            let pool = open_pool(&config).await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

/// Opens the configured database and applies pending migrations.
async fn open_pool(config: &Config) -> Result<Arc<SqlitePool>> {
    let pool = persistence::connect(config)
        .await
        .context("Failed to connect to database")?;

    Ok(Arc::new(pool))
}

/// Looks up a stored URL by code or id and prints it.
///
/// Lookup by id also finds rows whose code was never attached.
async fn show_url(pool: Arc<SqlitePool>, config: &Config, key: &str, by_id: bool) -> Result<()> {
    let repository = Arc::new(SqliteUrlRepository::new(pool));
    let service = UrlService::new(repository, config.base_host.as_str());

    let found = if by_id {
        let id: i64 = key
            .parse()
            .with_context(|| format!("'{key}' is not a numeric id"))?;
        service
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    } else {
        Some(
            service
                .resolve(key)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    let url = found.context("URL not found")?;
    print_url(&url, &service);

    Ok(())
}

fn print_url(url: &ShortenedUrl, service: &UrlService<SqliteUrlRepository>) {
    println!("{}", "🔗 Stored URL".bright_blue().bold());
    println!();
    println!("  ID:       {}", url.id.to_string().bright_black());
    println!("  Original: {}", url.original_url.cyan());

    match url.short_code.as_deref() {
        Some(code) => {
            println!("  Code:     {}", code.bright_yellow());
            println!("  Short:    {}", service.short_url(code).bright_white());
            if !url.is_consistent() {
                println!(
                    "  {}",
                    "⚠️  Stored code does not decode to this id".red().bold()
                );
            }
        }
        None => {
            println!(
                "  Code:     {}",
                "none (orphan row, code was never attached)".yellow()
            );
        }
    }

    println!(
        "  Created:  {}",
        url.created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of stored URLs
/// - Number of rows without a short code
/// - Highest issued identifier and its code
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE short_code IS NULL")
        .fetch_one(pool)
        .await?;

    let max_id: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM urls")
        .fetch_one(pool)
        .await?;

    println!("  URLs:          {}", total.to_string().bright_green().bold());

    let orphans_display = if orphans == 0 {
        orphans.to_string().bright_green().bold()
    } else {
        orphans.to_string().yellow().bold()
    };
    println!("  Without code:  {}", orphans_display);

    if let Some(id) = max_id.and_then(|id| u64::try_from(id).ok()) {
        println!(
            "  Latest code:   {} (id {})",
            base62::encode(id).bright_yellow(),
            id.to_string().bright_black()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:     {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
