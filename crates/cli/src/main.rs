//! # Ferronote Server
//!
//! Main entry point for the notes API with its read-through cache.

use clap::Parser;
use ferronote_domain::CliOverrides;
use std::time::Instant;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ferronote")]
#[command(version)]
#[command(about = "Notes API with a Redis-backed read-through cache")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Cache backend URL
    #[arg(long)]
    cache_url: Option<String>,

    /// Run without the cache backend (degraded mode by choice)
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();
    let cli = Cli::parse();

    let overrides = CliOverrides {
        http_port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
        cache_url: cli.cache_url,
        cache_disabled: cli.no_cache,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    tracing::info!("Ferronote starting");

    // The database is required: startup fails once retries are exhausted.
    let pool = bootstrap::init_database(&config.database).await?;

    // The cache is optional: failure here means degraded (uncached) mode.
    let cache_store = bootstrap::init_cache(&config.cache).await;

    let state = di::build_state(&config, pool, cache_store, started_at);

    server::start_web_server(state, &config).await
}
