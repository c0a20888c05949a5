//! CLI administration tool for linkvault.
//!
//! Provides commands for managing accounts and viewing statistics directly
//! against the file stores, without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new account
//! cargo run --bin admin -- account create --id alice
//!
//! # List all accounts
//! cargo run --bin admin -- account list
//!
//! # Delete an account (cascades to its registered URLs)
//! cargo run --bin admin -- account delete alice
//!
//! # Show per-account URL statistics
//! cargo run --bin admin -- stats alice
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_DIR` (optional): root directory of the file stores (default: `data`)
//!
//! # Features
//!
//! - **Account Management**: Create, list, and delete accounts
//! - **Statistics**: View registration counts per URL
//! - **Interactive Prompts**: Confirmation dialogs for destructive actions
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use linkvault::application::services::{AccountService, StatsService};
use linkvault::domain::repositories::AccountRepository;
use linkvault::infrastructure::persistence::{FileAccountRepository, FileUrlRepository};
use linkvault::infrastructure::security::InMemorySessionRegistry;
use linkvault::state::SharedAccountRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing linkvault.
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
    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Show statistics for an account
    Stats {
        /// Account id to report on
        account_id: String,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Create a new account
    Create {
        /// Account id (e.g., "alice")
        #[arg(short, long)]
        id: String,
    },

    /// List all accounts
    List,

    /// Delete an account and every URL registered under it
    Delete {
        /// Account id to delete
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

struct Stores {
    accounts: Arc<SharedAccountRepository>,
    urls: Arc<FileUrlRepository>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_dir =
        PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    let stores = open_stores(&data_dir)?;

    match cli.command {
        Commands::Account { action } => handle_account_action(action, &stores).await?,
        Commands::Stats { account_id } => handle_stats(&account_id, &stores).await?,
    }

    Ok(())
}

/// Opens the file stores under the configured data directory.
fn open_stores(data_dir: &std::path::Path) -> Result<Stores> {
    let sessions = Arc::new(InMemorySessionRegistry::new());

    let accounts = Arc::new(
        FileAccountRepository::open(data_dir.join("accounts"), sessions)
            .context("Failed to open account store")?,
    );
    let urls = Arc::new(
        FileUrlRepository::open(data_dir.join("urls")).context("Failed to open URL store")?,
    );

    Ok(Stores { accounts, urls })
}

/// Dispatches account management commands.
async fn handle_account_action(action: AccountAction, stores: &Stores) -> Result<()> {
    match action {
        AccountAction::Create { id } => create_account(&id, stores).await?,
        AccountAction::List => list_accounts(stores).await?,
        AccountAction::Delete { id, yes } => delete_account(&id, yes, stores).await?,
    }

    Ok(())
}

/// Creates a new account and prints its generated password.
async fn create_account(id: &str, stores: &Stores) -> Result<()> {
    println!("{}", "Create account".bright_blue().bold());
    println!();

    let service = AccountService::new(stores.accounts.clone(), stores.urls.clone());
    let account = service
        .create_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!("{}", "Account created successfully!".green().bold());
    println!();
    println!("  Account: {}", account.id.cyan());
    println!("  Password: {}", account.password.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this password now! You won't be able to see it again."
            .red()
            .bold()
    );

    Ok(())
}

/// Lists all accounts with their registered URL counts.
async fn list_accounts(stores: &Stores) -> Result<()> {
    let accounts = stores
        .accounts
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if accounts.is_empty() {
        println!("{}", "No accounts found".yellow());
        return Ok(());
    }

    println!("{}", "Accounts:".bright_white().bold());
    for account in accounts {
        println!(
            "  {} ({} registered URL(s))",
            account.id.cyan(),
            account.redirects.len()
        );
    }

    Ok(())
}

/// Deletes an account after confirmation, cascading to its URLs.
async fn delete_account(id: &str, skip_confirm: bool, stores: &Stores) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete account '{}' and all URLs registered under it?",
                id
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = AccountService::new(stores.accounts.clone(), stores.urls.clone());
    service
        .delete_account(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete account: {}", e))?;

    println!("{}", "Account deleted".green().bold());

    Ok(())
}

/// Prints registration counts per URL for an account.
async fn handle_stats(account_id: &str, stores: &Stores) -> Result<()> {
    let service = StatsService::new(stores.accounts.clone(), stores.urls.clone());
    let counts = service
        .redirect_counts(account_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "{} {}",
        "Statistics for".bright_white().bold(),
        account_id.cyan()
    );

    if counts.is_empty() {
        println!("  {}", "No URLs registered".yellow());
        return Ok(());
    }

    for (url, count) in counts {
        println!("  {:>4}  {}", count.to_string().bright_yellow(), url);
    }

    Ok(())
}
