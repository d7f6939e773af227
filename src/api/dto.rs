//! Data Transfer Objects
//!
//! Response types for the endpoints that aren't plain feed arrays.
//! The traffic and signal feeds serialize their simulation types directly.

use serde::{Deserialize, Serialize};

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Travel-time provider backing the feed
    pub provider: String,
    /// Edges sampled per traffic request
    pub edges: usize,
    /// Observations the congestion model was trained on
    pub model_samples: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
