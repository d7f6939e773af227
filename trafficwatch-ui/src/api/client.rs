//! HTTP API Client
//!
//! Functions for reading the TrafficWatch feed.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::error::FetchError;
use crate::state::TrafficRecord;

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key that overrides the API base URL
pub const API_BASE_STORAGE_KEY: &str = "trafficwatch_api_url";

pub const TRAFFIC_PATH: &str = "/api/traffic";
pub const SIGNALS_PATH: &str = "/api/signals";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());

    stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Join a base URL and an absolute path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Current phase of one signal, as served by `GET /api/signals`
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SignalStatus {
    pub id: String,
    pub name: String,
    pub state: String,
    pub duration_s: u32,
    pub last_updated: String,
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = join_url(&get_api_base(), path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_body(&body)
}

/// Fetch the latest sample of every monitored edge
pub async fn fetch_traffic() -> Result<Vec<TrafficRecord>, FetchError> {
    get_json(TRAFFIC_PATH).await
}

/// Fetch the current phase of every signal
pub async fn fetch_signals() -> Result<Vec<SignalStatus>, FetchError> {
    get_json(SIGNALS_PATH).await
}
