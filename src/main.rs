//! Crease main entry point
//!
//! This is the command-line interface for the Crease cricket credit pipeline.

use clap::Parser;
use crease::config::load_config_with_hash;
use crease::lookup::{list_players, lookup_player, PlayerList, PlayerLookup};
use crease::scrape::run_pipeline;
use crease::storage::{open_storage, Storage};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Crease: a cricket player credit-point pipeline
///
/// Crease scrapes player match-statistics pages, scores each match under
/// a configurable credit policy, aggregates per-player averages, and
/// answers fuzzy name lookups against the stored results.
#[derive(Parser, Debug)]
#[command(name = "crease")]
#[command(version = "1.0.0")]
#[command(about = "A cricket player credit-point pipeline", long_about = None)]
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

    /// Validate config and show what would be scraped without scraping
    #[arg(long, conflicts_with_all = ["stats", "lookup", "players"])]
    dry_run: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with_all = ["dry_run", "lookup", "players"])]
    stats: bool,

    /// Look up one player's average credit by (fuzzy) name and exit
    #[arg(long, value_name = "NAME", conflicts_with_all = ["dry_run", "stats", "players"])]
    lookup: Option<String>,

    /// List all players with stored aggregates and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats", "lookup"])]
    players: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config)?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else if let Some(name) = &cli.lookup {
        handle_lookup(&config, name)?;
    } else if cli.players {
        handle_players(&config)?;
    } else {
        handle_scrape(&config, &config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crease=info,warn"),
            1 => EnvFilter::new("crease=debug,info"),
            2 => EnvFilter::new("crease=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &crease::Config) -> anyhow::Result<()> {
    println!("=== Crease Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  User agent: {}", config.scraper.user_agent);
    println!("  Request timeout: {}s", config.scraper.request_timeout_secs);
    println!("  Scoring policy: {}", config.scraper.scoring_policy);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\nPlayers ({}):", config.players.len());
    for entry in &config.players {
        match &entry.name {
            Some(name) => println!("  - {} ({})", name, entry.url),
            None => println!("  - {}", entry.url),
        }
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would scrape {} player pages", config.players.len());

    Ok(())
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &crease::Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.output.database_path);

    let storage = open_storage(Path::new(&config.output.database_path))?;

    println!("Match rows:    {}", storage.count_matches()?);
    println!("Point values:  {}", storage.count_points()?);
    println!("Players:       {}", storage.count_players()?);

    for (name, aggregate) in storage.all_aggregates()? {
        println!(
            "  {} — {} matches, avg credit {:.2}",
            name, aggregate.total_matches, aggregate.average_credit
        );
    }

    Ok(())
}

/// Handles the --lookup mode: fuzzy player lookup against stored aggregates
fn handle_lookup(config: &crease::Config, name: &str) -> anyhow::Result<()> {
    let storage = open_storage(Path::new(&config.output.database_path))?;

    match lookup_player(&storage, name)? {
        PlayerLookup::Found(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        PlayerLookup::NotFound => {
            eprintln!("No player matched '{}'", name);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Handles the --players mode: lists all players with stored aggregates
fn handle_players(config: &crease::Config) -> anyhow::Result<()> {
    let storage = open_storage(Path::new(&config.output.database_path))?;

    match list_players(&storage)? {
        PlayerList::Found(entries) => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        PlayerList::Empty => {
            eprintln!("No players stored yet; run a scrape first");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Handles the main scrape-score-aggregate operation
async fn handle_scrape(
    config: &crease::Config,
    config_hash: &str,
) -> anyhow::Result<()> {
    tracing::info!("Scraping {} player pages", config.players.len());

    let mut storage = open_storage(Path::new(&config.output.database_path))?;

    match run_pipeline(config, &mut storage, config_hash).await {
        Ok(report) => {
            tracing::info!("Pipeline completed successfully");
            println!(
                "Scraped {} players ({} failed); stored {} matches, {} points, {} aggregates",
                report.players_succeeded,
                report.players_failed,
                report.matches_stored,
                report.points_stored,
                report.aggregates_written
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            Err(e.into())
        }
    }
}
