//! # TrafficWatch
//!
//! Live traffic monitoring backend. Serves the feed polled by the
//! TrafficWatch dashboard.
//!
//! ## Modules
//!
//! - [`simulation`]: Sensor network, travel-time providers and feed generation
//! - [`model`]: Congestion risk model
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trafficwatch::model::CongestionModel;
//! use trafficwatch::simulation::{SimulationConfig, TrafficSimulator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let simulator = TrafficSimulator::new(&SimulationConfig::default(), CongestionModel::reference())?;
//!
//!     for record in simulator.generate_traffic().await {
//!         println!("{} -> {}: {:.1} km/h, risk {}", record.from, record.to, record.avg_speed_kmh, record.congestion_risk);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod model;
pub mod simulation;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoadedConfig, LogFormat, LoggingConfig};

pub use model::{CongestionModel, CongestionRisk, ModelError};

pub use simulation::{
    SignalState, SignalStatus, SimulationConfig, SimulationError, TrafficRecord, TrafficSimulator,
    TravelTimeProvider,
};
