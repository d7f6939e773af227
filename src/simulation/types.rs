//! Core data types for the sensor network
//!
//! Defines the sensor/signal topology and the records served to dashboards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::CongestionRisk;

/// A WGS84 coordinate (latitude, longitude in degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A roadside sensor measuring traffic along the edges it terminates
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub id: &'static str,
    pub location: GeoPoint,
}

/// A signalised junction
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSite {
    pub id: &'static str,
    pub name: &'static str,
    pub location: GeoPoint,
}

/// One observed traffic edge between two sensors.
///
/// Field names are the wire format of `GET /api/traffic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficRecord {
    pub from: String,
    pub to: String,
    pub distance_m: f64,
    pub duration_s: f64,
    pub avg_speed_kmh: f64,
    pub vehicle_count: u32,
    pub congestion_risk: CongestionRisk,
    /// ISO-8601 UTC time the sample was generated
    pub timestamp: String,
}

/// Phase a signal is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    Green,
    Red,
    Yellow,
}

impl SignalState {
    pub const ALL: [SignalState; 3] = [SignalState::Green, SignalState::Red, SignalState::Yellow];

    /// Nominal phase length before adaptive adjustment
    pub fn base_duration_s(&self) -> i64 {
        match self {
            SignalState::Green => 45,
            SignalState::Red => 60,
            SignalState::Yellow => 5,
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalState::Green => write!(f, "green"),
            SignalState::Red => write!(f, "red"),
            SignalState::Yellow => write!(f, "yellow"),
        }
    }
}

/// Current status of one signal, as served by `GET /api/signals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalStatus {
    pub id: String,
    pub name: String,
    pub state: SignalState,
    pub duration_s: u32,
    pub last_updated: String,
}
