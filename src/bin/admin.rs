//! CLI administration tool for alias-shortener.
//!
//! Runs the same assignment, resolution and removal operations as the HTTP
//! API directly against the storage file, without requiring the server.
//!
//! # Usage
//!
//! ```bash
//! # Assign a generated alias
//! cargo run --bin admin -- assign https://example.com/page
//!
//! # Assign a custom alias
//! cargo run --bin admin -- assign https://example.com/page --alias docs
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve docs
//!
//! # Delete an alias (asks for confirmation unless -y)
//! cargo run --bin admin -- remove docs
//!
//! # Check storage
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite file path or `sqlite:` URL
//! - `ALIAS_LENGTH` (optional): length of generated aliases (default: 6)
//! - `ALIAS_GENERATION_ATTEMPTS` (optional): generated candidates tried (default: 1)

use alias_shortener::application::services::{
    AssignmentService, RemovalService, ResolutionService,
};
use alias_shortener::config;
use alias_shortener::domain::AliasError;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{
    PoolSettings, SqliteAliasRepository, connect_pool,
};
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing alias-shortener storage.
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
    /// Store a URL under a custom or generated alias
    Assign {
        /// Target URL
        url: String,

        /// Custom alias (generated when omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the target URL of an alias
    Resolve {
        alias: String,
    },

    /// Delete an alias
    Remove {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Storage diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the storage, ensure the schema and count records
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

    let pool = connect_pool(&storage_path, &PoolSettings::default())
        .await
        .context("Failed to open storage")?;

    let repo = Arc::new(SqliteAliasRepository::new(Arc::new(pool.clone())));
    repo.init().await.context("Failed to initialize storage")?;

    let result = match cli.command {
        Commands::Assign { url, alias } => assign(repo, url, alias).await,
        Commands::Resolve { alias } => resolve(repo, &alias).await,
        Commands::Remove { alias, yes } => remove(repo, &alias, yes).await,
        Commands::Db { action } => handle_db_action(action, repo, &storage_path).await,
    };

    pool.close().await;
    result
}

/// Assigns an alias and prints it.
async fn assign(repo: Arc<SqliteAliasRepository>, url: String, alias: Option<String>) -> Result<()> {
    let policy = config::alias_policy_from_env()?;
    let service = AssignmentService::new(repo, Arc::new(RandomAliasGenerator), policy);

    match service.assign(url.clone(), alias).await {
        Ok(alias) => {
            println!("{}", "Alias created".green().bold());
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            Ok(())
        }
        Err(AliasError::AliasExists(alias)) => anyhow::bail!("Alias already exists: {}", alias),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to assign alias")),
    }
}

/// Prints the target URL stored under `alias`.
async fn resolve(repo: Arc<SqliteAliasRepository>, alias: &str) -> Result<()> {
    let service = ResolutionService::new(repo);

    match service.resolve(alias).await {
        Ok(url) => {
            println!("{}", url);
            Ok(())
        }
        Err(AliasError::NotFound(_)) => anyhow::bail!("Alias not found: {}", alias),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to resolve alias")),
    }
}

/// Deletes `alias`, showing the record and asking for confirmation first.
///
/// Confirmation defaults to No.
async fn remove(repo: Arc<SqliteAliasRepository>, alias: &str, skip_confirm: bool) -> Result<()> {
    let record = repo
        .find(alias)
        .await
        .context("Failed to look up alias")?
        .with_context(|| format!("Alias not found: {}", alias))?;

    println!("  Alias: {}", record.alias.cyan());
    println!("  URL:   {}", record.target_url.bright_white());
    println!("  ID:    {}", record.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = RemovalService::new(repo);
    match service.remove(alias).await {
        Ok(()) => {
            println!("{}", "Alias deleted".green().bold());
            Ok(())
        }
        // Deleted concurrently between lookup and removal
        Err(AliasError::NotFound(_)) => anyhow::bail!("Alias not found: {}", alias),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to delete alias")),
    }
}

/// Handles storage diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: Arc<SqliteAliasRepository>,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking storage...".bright_blue());

            let count = repo.count().await.context("Storage check failed")?;

            println!("{}", "Storage OK".green().bold());
            println!("  Path:    {}", storage_path.bright_white());
            println!("  Aliases: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
