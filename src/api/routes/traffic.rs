//! Traffic Routes
//!
//! - GET /api/traffic - Latest sample of every monitored edge

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::simulation::TrafficRecord;

/// GET /api/traffic
///
/// Samples every edge, scores congestion and returns the full set.
pub async fn get_traffic(State(state): State<Arc<AppState>>) -> Json<Vec<TrafficRecord>> {
    let records = state.simulator.generate_traffic().await;

    let incidents = records
        .iter()
        .filter(|r| r.congestion_risk.is_incident())
        .count();
    tracing::debug!(records = records.len(), incidents, "Served traffic sample");

    Json(records)
}
