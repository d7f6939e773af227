//! TrafficWatch API Server
//!
//! Run with: cargo run --bin trafficwatch
//!
//! Configuration is read from the first config.toml found in the default
//! locations (see [`Config::load_default`]) or from `--config`, then
//! overridden by `TRAFFICWATCH_*` environment variables and finally by
//! command-line flags.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trafficwatch::api::{serve, AppState};
use trafficwatch::config::{Config, LoadedConfig, LogFormat, LoggingConfig};
use trafficwatch::model::{CongestionModel, REFERENCE_SAMPLES};
use trafficwatch::simulation::TrafficSimulator;

#[derive(Parser)]
#[command(name = "trafficwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live traffic feed API for the TrafficWatch dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Fixed RNG seed for a reproducible feed
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let LoadedConfig {
        mut config,
        source,
        warnings,
    } = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }

    init_tracing(&config.logging);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    tracing::info!("Starting TrafficWatch API server v{}", env!("CARGO_PKG_VERSION"));

    let model = CongestionModel::train(&REFERENCE_SAMPLES)?;
    tracing::info!("Congestion model trained on {} samples", model.sample_count());

    let simulator = Arc::new(TrafficSimulator::new(&config.simulation, model)?);
    let state = AppState::new(simulator, config.api.clone());

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("TrafficWatch API server stopped");
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("trafficwatch={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
