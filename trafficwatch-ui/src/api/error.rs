//! Fetch Errors

use thiserror::Error;

/// Message shown to the user for any failed traffic fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch traffic data";

/// Why a request to the backend did not produce usable data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// Transport, status and parse failures all read the same to the user
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
