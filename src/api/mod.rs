//! TrafficWatch REST API
//!
//! HTTP API layer serving the live feed to dashboards, built with Axum.
//!
//! # Endpoints
//!
//! ## Feed
//! - `GET /api/traffic` - Latest sample of every monitored edge
//! - `GET /api/signals` - Current phase of every signal
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use trafficwatch::api::{serve, AppState};
//! use trafficwatch::config::Config;
//! use trafficwatch::model::CongestionModel;
//! use trafficwatch::simulation::TrafficSimulator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let simulator = TrafficSimulator::new(&config.simulation, CongestionModel::reference())?;
//!
//!     let state = AppState::new(Arc::new(simulator), config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{http::HeaderValue, http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/traffic", get(routes::traffic::get_traffic))
        .route("/signals", get(routes::signals::get_signals));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Any origin unless the config pins a list
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("TrafficWatch API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("TrafficWatch API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CongestionModel;
    use crate::simulation::{SimulationConfig, TrafficSimulator};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with(ApiConfig::default())
    }

    fn create_test_app_with(api: ApiConfig) -> Router {
        let config = SimulationConfig {
            seed: Some(11),
            ..Default::default()
        };
        let simulator = TrafficSimulator::new(&config, CongestionModel::reference()).unwrap();
        let state = AppState::new(Arc::new(simulator), api);
        build_router(state)
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<String> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/signals")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_traffic_feed() {
        let (status, body) = get_json(create_test_app(), "/api/traffic").await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().expect("array body");
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first["from"], "sensor_A");
        assert_eq!(first["to"], "sensor_B");
        assert!(first["distance_m"].is_number());
        assert!(first["duration_s"].is_number());
        assert!(first["avg_speed_kmh"].is_number());
        assert!(first["vehicle_count"].is_u64());
        assert!(first["timestamp"].is_string());

        let risk = first["congestion_risk"].as_u64().unwrap();
        assert!(risk <= 2);
    }

    #[tokio::test]
    async fn test_signals_feed() {
        let (status, body) = get_json(create_test_app(), "/api/signals").await;

        assert_eq!(status, StatusCode::OK);
        let signals = body.as_array().unwrap();
        assert_eq!(signals.len(), 3);

        for signal in signals {
            let state = signal["state"].as_str().unwrap();
            assert!(["green", "red", "yellow"].contains(&state));
            assert!(signal["duration_s"].as_u64().unwrap() >= 5);
        }
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get_json(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["provider"], "simulated");
        assert_eq!(body["edges"], 3);
        assert_eq!(body["model_samples"], 6);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json(create_test_app(), "/api/parking").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_cors_any_origin_by_default() {
        let allowed = allowed_origin(create_test_app(), "http://dashboard.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_cors_with_origins() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:8080".to_string()],
            ..Default::default()
        };

        let listed = allowed_origin(create_test_app_with(config.clone()), "http://localhost:8080").await;
        assert_eq!(listed.as_deref(), Some("http://localhost:8080"));

        let other = allowed_origin(create_test_app_with(config), "http://evil.example").await;
        assert_eq!(other, None);
    }
}
