//! CLI administration tool for shortly.
//!
//! Inspects the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Record and click totals
//! cargo run --bin admin -- stats
//!
//! # Show a single record without counting a click
//! cargo run --bin admin -- show aB3dE9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`):
//!   PostgreSQL connection
//! - `BASE_URL` (optional): prefix used when printing short URLs

use shortly::application::services::Registry;
use shortly::config::Config;
use shortly::domain::RegistryError;
use shortly::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shortly's store.
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
    /// Show record and click totals
    Stats,

    /// Show a single record (does not count as a click)
    Show {
        /// Short code to look up
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let registry = Registry::new(Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Stats => handle_stats(&registry).await?,
        Commands::Show { code } => handle_show(&registry, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays store totals.
async fn handle_stats(registry: &Registry<PgUrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = registry
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Links:  {}",
        summary.records.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints one record by code.
async fn handle_show(registry: &Registry<PgUrlRepository>, code: &str) -> Result<()> {
    let record = match registry.lookup(code).await {
        Ok(record) => record,
        Err(RegistryError::NotFound(_)) => {
            anyhow::bail!("No record for code '{}'", code);
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();
    println!("  Code:      {}", record.code.cyan());
    println!(
        "  Short URL: {}/{}",
        base_url.trim_end_matches('/'),
        record.code
    );
    println!("  Target:    {}", record.original_url.bright_white());
    println!("  Title:     {}", record.title);
    println!(
        "  Clicks:    {}",
        record.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .context("Failed to read migration history")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
