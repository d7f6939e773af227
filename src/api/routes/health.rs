//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once the simulator has edges to sample and a trained model.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if feed_ready(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if feed_ready(&state) { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        provider: state.simulator.provider_name().to_string(),
        edges: state.simulator.edge_count(),
        model_samples: state.simulator.model().sample_count(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn feed_ready(state: &AppState) -> bool {
    state.simulator.edge_count() > 0 && state.simulator.model().sample_count() > 0
}
