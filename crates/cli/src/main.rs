//! # Hazard Zone
//!
//! Flood hazard resolution service: HTTP API plus operator commands.

mod bootstrap;
mod commands;
mod di;
mod server;

use bootstrap::{init_database, init_logging, load_config};
use clap::{Parser, Subcommand};
use di::{Repositories, UseCases};
use hazard_zone_application::use_cases::hazard::DEFAULT_RECENT_LIMIT;
use hazard_zone_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hazard-zone")]
#[command(version)]
#[command(about = "Resolves coordinates to flood hazard tiers")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Cache store database file
    #[arg(long, global = true)]
    cache_db: Option<String>,

    /// Polygon store database file
    #[arg(long, global = true)]
    polygon_db: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// Web server port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Create the polygon store schema if missing
    Provision,
    /// Import a GeoJSON feature collection into the polygon store
    Import {
        path: PathBuf,
    },
    /// Provision the polygon store and load the built-in Auckland sample
    SeedSample,
    /// Resolve one coordinate and print the result as JSON
    Resolve {
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,

        #[arg(long, allow_hyphen_values = true)]
        longitude: String,

        #[arg(long)]
        parcel_id: Option<String>,
    },
    /// Print the latest cache entries as JSON
    Recent {
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, web_port) = match &cli.command {
        Command::Serve { bind, port } => (bind.clone(), *port),
        _ => (None, None),
    };
    let overrides = CliOverrides {
        bind_address,
        web_port,
        cache_path: cli.cache_db.clone(),
        polygon_path: cli.polygon_db.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    let (cache_pool, polygon_pool) = init_database(&config.database).await?;
    let repos = Repositories::new(cache_pool, polygon_pool);
    let use_cases = UseCases::new(&repos, &config);

    match cli.command {
        Command::Serve { .. } => {
            info!(
                bind = %config.server.bind_address,
                port = config.server.web_port,
                "Starting Hazard Zone server"
            );
            server::start_web_server(&config.server, use_cases.into_app_state()).await
        }
        Command::Provision => commands::provision(&use_cases).await,
        Command::Import { path } => commands::import(&use_cases, &path).await,
        Command::SeedSample => commands::seed_sample(&use_cases).await,
        Command::Resolve {
            latitude,
            longitude,
            parcel_id,
        } => commands::resolve(&use_cases, &latitude, &longitude, parcel_id.as_deref()).await,
        Command::Recent { limit } => commands::recent(&use_cases, limit).await,
    }
}
