//! Traffic Simulation
//!
//! Produces the live feed served by the API:
//! - Per-edge traffic samples between the fixed sensors
//! - Congestion risk for each sample via [`crate::model`]
//! - Signal phase status for each signalised junction

mod generator;
mod network;
mod provider;
mod types;

pub use generator::{compute_avg_speed_kmh, TrafficSimulator};
pub use network::{sensor, SENSORS, SENSOR_PAIRS, SIGNAL_SITES};
pub use provider::{SimulatedTravelTimes, TravelEstimate, TravelTimeProvider};
pub use types::{GeoPoint, Sensor, SignalSite, SignalState, SignalStatus, TrafficRecord};

use serde::Deserialize;

/// Simulation parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RNG seed for reproducible feeds
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_min_vehicles")]
    pub min_vehicles: u32,

    #[serde(default = "default_max_vehicles")]
    pub max_vehicles: u32,

    #[serde(default = "default_min_duration")]
    pub min_duration_s: u32,

    #[serde(default = "default_max_duration")]
    pub max_duration_s: u32,

    #[serde(default = "default_min_distance")]
    pub min_distance_m: u32,

    #[serde(default = "default_max_distance")]
    pub max_distance_m: u32,
}

fn default_min_vehicles() -> u32 {
    10
}

fn default_max_vehicles() -> u32 {
    50
}

fn default_min_duration() -> u32 {
    120
}

fn default_max_duration() -> u32 {
    600
}

fn default_min_distance() -> u32 {
    800
}

fn default_max_distance() -> u32 {
    3000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_vehicles: default_min_vehicles(),
            max_vehicles: default_max_vehicles(),
            min_duration_s: default_min_duration(),
            max_duration_s: default_max_duration(),
            min_distance_m: default_min_distance(),
            max_distance_m: default_max_distance(),
        }
    }
}

impl SimulationConfig {
    /// Reject empty sampling ranges
    pub fn validate(&self) -> Result<(), SimulationError> {
        let ranges = [
            ("vehicles", self.min_vehicles, self.max_vehicles),
            ("duration_s", self.min_duration_s, self.max_duration_s),
            ("distance_m", self.min_distance_m, self.max_distance_m),
        ];

        for (name, min, max) in ranges {
            if min > max {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} range is empty: min {} > max {}",
                    name, min, max
                )));
            }
        }

        Ok(())
    }
}

/// Simulation errors
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("Travel-time provider failed: {0}")]
    Provider(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = SimulationConfig {
            min_vehicles: 60,
            max_vehicles: 50,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("vehicles"));
    }
}
