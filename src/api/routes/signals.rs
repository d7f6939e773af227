//! Signal Routes
//!
//! - GET /api/signals - Current phase of every signalised junction

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::simulation::SignalStatus;

/// GET /api/signals
pub async fn get_signals(State(state): State<Arc<AppState>>) -> Json<Vec<SignalStatus>> {
    Json(state.simulator.signal_status())
}
