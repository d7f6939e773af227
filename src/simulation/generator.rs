//! Traffic Feed Generator
//!
//! Samples every monitored edge, scores it with the congestion model and
//! simulates adaptive signal phases.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use super::network::{sensor, SENSOR_PAIRS, SIGNAL_SITES};
use super::provider::{SimulatedTravelTimes, TravelEstimate, TravelTimeProvider};
use super::types::{SignalState, SignalStatus, TrafficRecord};
use super::{SimulationConfig, SimulationError};
use crate::model::CongestionModel;

/// Shortest phase a signal may be given
const MIN_SIGNAL_DURATION_S: i64 = 5;

/// Average speed in km/h, or 0.0 when no time elapsed
pub fn compute_avg_speed_kmh(distance_m: f64, duration_s: f64) -> f64 {
    if duration_s == 0.0 {
        return 0.0;
    }
    (distance_m / duration_s) * 3.6
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn iso_timestamp() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Generates the live traffic and signal feeds
pub struct TrafficSimulator {
    provider: Arc<dyn TravelTimeProvider>,
    model: CongestionModel,
    rng: Mutex<StdRng>,
    vehicles: (u32, u32),
}

impl TrafficSimulator {
    /// Create a simulator backed by [`SimulatedTravelTimes`]
    pub fn new(config: &SimulationConfig, model: CongestionModel) -> Result<Self, SimulationError> {
        config.validate()?;
        let provider = Arc::new(SimulatedTravelTimes::new(config));
        Self::with_provider(config, model, provider)
    }

    /// Create a simulator with a custom travel-time provider
    pub fn with_provider(
        config: &SimulationConfig,
        model: CongestionModel,
        provider: Arc<dyn TravelTimeProvider>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        // Offset the seed so vehicle draws don't mirror the provider's stream
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            provider = provider.name(),
            seeded = config.seed.is_some(),
            "Traffic simulator ready"
        );

        Ok(Self {
            provider,
            model,
            rng: Mutex::new(rng),
            vehicles: (config.min_vehicles, config.max_vehicles),
        })
    }

    pub fn model(&self) -> &CongestionModel {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Number of edges sampled per generation pass
    pub fn edge_count(&self) -> usize {
        SENSOR_PAIRS.len()
    }

    /// Sample every edge once
    pub async fn generate_traffic(&self) -> Vec<TrafficRecord> {
        let mut records = Vec::with_capacity(SENSOR_PAIRS.len());

        for (from, to) in SENSOR_PAIRS {
            let estimate = match self.edge_estimate(from, to).await {
                Ok(estimate) => estimate,
                Err(e) => {
                    tracing::warn!(from, to, error = %e, "Travel-time lookup failed, reporting zeros");
                    TravelEstimate::ZERO
                }
            };

            let avg_speed_kmh = round2(compute_avg_speed_kmh(
                estimate.distance_m,
                estimate.duration_s,
            ));
            let vehicle_count = self.draw_vehicle_count();
            let congestion_risk = self.model.predict(vehicle_count, avg_speed_kmh);

            records.push(TrafficRecord {
                from: from.to_string(),
                to: to.to_string(),
                distance_m: estimate.distance_m,
                duration_s: estimate.duration_s,
                avg_speed_kmh,
                vehicle_count,
                congestion_risk,
                timestamp: iso_timestamp(),
            });
        }

        tracing::debug!(records = records.len(), "Generated traffic sample");
        records
    }

    /// Simulate the current phase of every signal
    pub fn signal_status(&self) -> Vec<SignalStatus> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        SIGNAL_SITES
            .iter()
            .map(|site| {
                let state = SignalState::ALL[rng.gen_range(0..SignalState::ALL.len())];
                let adaptive = state.base_duration_s() + rng.gen_range(-10..=20);

                SignalStatus {
                    id: site.id.to_string(),
                    name: site.name.to_string(),
                    state,
                    duration_s: adaptive.max(MIN_SIGNAL_DURATION_S) as u32,
                    last_updated: iso_timestamp(),
                }
            })
            .collect()
    }

    async fn edge_estimate(&self, from: &str, to: &str) -> Result<TravelEstimate, SimulationError> {
        let origin = sensor(from).ok_or_else(|| SimulationError::UnknownSensor(from.to_string()))?;
        let destination =
            sensor(to).ok_or_else(|| SimulationError::UnknownSensor(to.to_string()))?;

        self.provider
            .travel_time(origin.location, destination.location)
            .await
    }

    fn draw_vehicle_count(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(self.vehicles.0..=self.vehicles.1)
    }
}
