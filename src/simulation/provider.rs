//! Travel-Time Providers
//!
//! A provider estimates how long it takes to drive between two sensors.
//! The simulated provider stands in for a routing service until one is wired in.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::types::GeoPoint;
use super::{SimulationConfig, SimulationError};

/// Travel time and road distance between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    pub duration_s: f64,
    pub distance_m: f64,
}

impl TravelEstimate {
    /// Estimate used when a provider fails for an edge
    pub const ZERO: TravelEstimate = TravelEstimate {
        duration_s: 0.0,
        distance_m: 0.0,
    };
}

/// Source of travel-time estimates
#[async_trait]
pub trait TravelTimeProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &str;

    /// Estimate travel between `origin` and `destination`
    async fn travel_time(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<TravelEstimate, SimulationError>;
}

/// Draws uniformly distributed durations and distances
pub struct SimulatedTravelTimes {
    rng: Mutex<StdRng>,
    duration_s: (u32, u32),
    distance_m: (u32, u32),
}

impl SimulatedTravelTimes {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng: Mutex::new(rng),
            duration_s: (config.min_duration_s, config.max_duration_s),
            distance_m: (config.min_distance_m, config.max_distance_m),
        }
    }
}

#[async_trait]
impl TravelTimeProvider for SimulatedTravelTimes {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn travel_time(
        &self,
        _origin: GeoPoint,
        _destination: GeoPoint,
    ) -> Result<TravelEstimate, SimulationError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| SimulationError::Provider(format!("rng lock poisoned: {}", e)))?;

        let duration = rng.gen_range(self.duration_s.0..=self.duration_s.1);
        let distance = rng.gen_range(self.distance_m.0..=self.distance_m.1);

        Ok(TravelEstimate {
            duration_s: duration as f64,
            distance_m: distance as f64,
        })
    }
}
