//! Backend API
//!
//! HTTP access to the TrafficWatch feed endpoints.

pub mod client;
pub mod error;

pub use client::{fetch_signals, fetch_traffic, SignalStatus};
pub use error::FetchError;
