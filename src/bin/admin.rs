//! CLI administration tool for link-registry.
//!
//! Reads the JSON data file directly, without going through the HTTP API.
//! Run it against a stopped server or a copy of the file: nothing here
//! writes back.
//!
//! # Usage
//!
//! ```bash
//! # List every entry
//! cargo run --bin admin -- list
//!
//! # Show one code
//! cargo run --bin admin -- show gh
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Look for inconsistencies in the data file
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (default: `data.json`): JSON data file to inspect

use link_registry::application::services::StatsService;
use link_registry::domain::Registry;
use link_registry::domain::entities::Entry;
use link_registry::domain::repositories::EntryStore;
use link_registry::infrastructure::persistence::JsonFileStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CLI tool for inspecting a link-registry data file.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file (overrides `DATA_FILE`)
    #[arg(short, long)]
    file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every entry
    List,

    /// Show a single code
    Show {
        /// Short code
        code: String,
    },

    /// Show totals
    Stats,

    /// Report keys, empty records and URLs claimed by several codes
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .file
        .or_else(|| std::env::var("DATA_FILE").ok())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| "data.json".to_string());

    let store = Arc::new(JsonFileStore::new(&path));

    match cli.command {
        Commands::List => list_entries(store).await?,
        Commands::Show { code } => show_entry(store, &code).await?,
        Commands::Stats => handle_stats(store).await?,
        Commands::Check => check_file(store).await?,
    }

    Ok(())
}

async fn open_registry(store: Arc<JsonFileStore>) -> Result<Arc<Registry>> {
    let description = store.describe();
    let registry = Registry::load(store)
        .await
        .with_context(|| format!("Failed to load {description}"))?;
    Ok(Arc::new(registry))
}

/// Lists entries sorted by code.
///
/// # Output Format
///
/// ```text
/// Entries
///
///   Code        Mode   Redirects  Shortens  URL
///   ──────────────────────────────────────────────────────────────
///   gh          sub           42         3  https://github.com/meain
/// ```
async fn list_entries(store: Arc<JsonFileStore>) -> Result<()> {
    let registry = open_registry(store).await?;
    let entries = StatsService::new(registry).list().await;

    println!("{}", "Entries".bright_blue().bold());
    println!();

    if entries.is_empty() {
        println!("{}", "  No entries found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<6} {:>10} {:>9}  {}",
        "Code".bright_white().bold(),
        "Mode".bright_white().bold(),
        "Redirects".bright_white().bold(),
        "Shortens".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in &entries {
        println!(
            "  {:<12} {:<6} {:>10} {:>9}  {}",
            entry.code.cyan(),
            entry.mode.to_string(),
            entry.redirect_count,
            entry.shorten_count,
            entry.url.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_entry(store: Arc<JsonFileStore>, code: &str) -> Result<()> {
    let registry = open_registry(store).await?;
    let entry = StatsService::new(registry)
        .get(code)
        .await
        .map_err(|_| anyhow::anyhow!("Code '{}' not found", code))?;

    println!("{}", "Entry".bright_blue().bold());
    println!();
    println!("  Code:      {}", entry.code.cyan());
    println!("  URL:       {}", entry.url);
    println!("  Mode:      {}", entry.mode);
    println!(
        "  Redirects: {}",
        entry.redirect_count.to_string().bright_green().bold()
    );
    println!(
        "  Shortens:  {}",
        entry.shorten_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_stats(store: Arc<JsonFileStore>) -> Result<()> {
    let registry = open_registry(store).await?;
    let summary = StatsService::new(registry).summary().await;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Entries:   {}",
        summary.entries.to_string().bright_green().bold()
    );
    println!(
        "  Redirects: {}",
        summary.redirects.to_string().bright_green().bold()
    );
    println!(
        "  Shortens:  {}",
        summary.shortens.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Inspects the raw file, then the registry built from it.
async fn check_file(store: Arc<JsonFileStore>) -> Result<()> {
    println!("{}", "Checking data file".bright_blue().bold());
    println!("  {}", store.describe().bright_black());
    println!();

    let raw = store
        .load()
        .await
        .with_context(|| format!("Failed to read {}", store.describe()))?;

    let mut problems = 0usize;

    for (key, entry) in &raw {
        if entry.url.is_empty() || entry.code.is_empty() {
            problems += 1;
            println!(
                "  {} '{}' has an empty url or code and will be dropped",
                "WARN".yellow().bold(),
                key
            );
        } else if key != &entry.code {
            problems += 1;
            println!(
                "  {} key '{}' holds code '{}' and will be re-keyed",
                "WARN".yellow().bold(),
                key,
                entry.code
            );
        }
    }

    let registry = open_registry(store).await?;

    for (url, codes) in codes_by_url(registry.snapshot().await) {
        if codes.len() < 2 {
            continue;
        }
        let preferred = registry
            .get_by_url(&url)
            .await
            .map(|e| e.code)
            .unwrap_or_default();
        println!(
            "  {} {} is registered as {} (shortening returns '{}')",
            "INFO".bright_cyan().bold(),
            url,
            codes.join(", "),
            preferred
        );
    }

    println!();
    if problems == 0 {
        println!(
            "{} {} entries, no problems found",
            "OK".green().bold(),
            raw.len()
        );
    } else {
        println!(
            "{} {} problem(s) in {} records",
            "WARN".yellow().bold(),
            problems,
            raw.len()
        );
    }
    println!();

    Ok(())
}

fn codes_by_url(entries: Vec<Entry>) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.url).or_default().push(entry.code);
    }
    grouped
}
