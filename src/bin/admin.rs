//! CLI administration tool for shortenme.
//!
//! Inspects codes and the record store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Convert between numeric ids and short codes
//! cargo run --bin admin -- encode 125
//! cargo run --bin admin -- decode 21
//!
//! # Inspect a stored record
//! cargo run --bin admin -- lookup 21
//! cargo run --bin admin -- clicks http://localhost:8080/21
//!
//! # Check the Redis connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Store commands read the same Redis settings as the server (`REDIS_URL`
//! or `REDIS_ADDR` and friends, `REDIS_KEY_PREFIX`, `REDIS_TIMEOUT_MS`).
//! `encode` and `decode` need no configuration.

use shortenme::application::services::MetricsService;
use shortenme::config::{self, Config, mask_connection_string};
use shortenme::domain::codec;
use shortenme::domain::repositories::RecordStore;
use shortenme::infrastructure::store::RedisRecordStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting shortenme data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a numeric id as a short code
    Encode {
        /// Non-negative integer id
        value: u64,
    },

    /// Decode a short code back to its numeric id
    Decode {
        /// Short code (characters 0-9, a-z, A-Z)
        code: String,
    },

    /// Show the stored record of a code
    Lookup {
        /// Short code
        code: String,
    },

    /// Show the click count of a short URL or code
    Clicks {
        /// Full short URL or bare code
        short_url: String,
    },

    /// Check the Redis connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { value } => handle_encode(value),
        Commands::Decode { code } => handle_decode(&code)?,
        Commands::Lookup { code } => handle_lookup(&code).await?,
        Commands::Clicks { short_url } => handle_clicks(&short_url).await?,
        Commands::Ping => handle_ping().await?,
    }

    Ok(())
}

fn handle_encode(value: u64) {
    println!("{}", "Encode".bright_blue().bold());
    println!();
    println!("  Id:   {}", value.to_string().cyan());
    println!("  Code: {}", codec::encode(value).bright_yellow().bold());
}

/// Decodes a code, surfacing invalid characters and overflow as errors.
fn handle_decode(code: &str) -> Result<()> {
    println!("{}", "Decode".bright_blue().bold());
    println!();

    let value = codec::decode(code).with_context(|| format!("Cannot decode '{}'", code))?;

    println!("  Code: {}", code.cyan());
    println!("  Id:   {}", value.to_string().bright_yellow().bold());

    if !codec::is_canonical(code) {
        println!();
        println!(
            "  {} '{}' is a non-canonical spelling of '{}' and is never issued",
            "note:".yellow(),
            code,
            codec::encode(value)
        );
    }

    Ok(())
}

async fn handle_lookup(code: &str) -> Result<()> {
    println!("{}", "Record".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let store = connect_store(&config).await?;

    let record = store
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load record: {}", e))?;

    match record {
        Some(record) => {
            println!("  Code:      {}", code.cyan());
            println!("  Short URL: {}/{}", config.base_url, code);
            println!("  Target:    {}", record.original_url.bright_white());
            println!(
                "  Created:   {}",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string()
                    .bright_black()
            );
            println!(
                "  Clicks:    {}",
                record.click_count.to_string().bright_yellow().bold()
            );
        }
        None => println!("  {}", format!("No record for '{}'", code).yellow()),
    }

    Ok(())
}

async fn handle_clicks(short_url: &str) -> Result<()> {
    println!("{}", "Click count".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let store = connect_store(&config).await?;
    let metrics = MetricsService::new(store, config.base_url.as_str());

    let code = metrics.code_from_short_url(short_url);
    let count = metrics
        .click_count(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load click count: {}", e))?;

    match count {
        Some(count) => {
            println!("  Code:   {}", code.cyan());
            println!("  Clicks: {}", count.to_string().bright_yellow().bold());
        }
        None => println!("  {}", format!("No record for '{}'", code).yellow()),
    }

    Ok(())
}

async fn handle_ping() -> Result<()> {
    println!("{}", "Redis connection".bright_blue().bold());
    println!();

    let config = config::load_from_env()?;
    let store = connect_store(&config).await?;

    match store.health_check().await {
        Ok(()) => println!("  {}", "OK".green().bold()),
        Err(e) => {
            println!("  {} {}", "FAILED".red().bold(), e);
            anyhow::bail!("Redis is not reachable");
        }
    }

    Ok(())
}

/// Connects to the configured Redis store.
///
/// Unlike the server there is no in-memory fallback: an empty process-local
/// store has nothing to inspect.
async fn connect_store(config: &Config) -> Result<Arc<dyn RecordStore>> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("Redis is not configured; set REDIS_URL or REDIS_ADDR")?;

    println!(
        "  {} {}",
        "Store:".bright_black(),
        mask_connection_string(redis_url).bright_black()
    );
    println!();

    let store = RedisRecordStore::connect(
        redis_url,
        config.redis_key_prefix.clone(),
        config.redis_timeout(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to connect to Redis: {}", e))?;

    Ok(Arc::new(store))
}
