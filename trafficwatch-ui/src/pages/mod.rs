//! Pages
//!
//! One component per dashboard section.

pub mod analytics;
pub mod dashboard;
pub mod incidents;
pub mod parking;
pub mod routes;
pub mod signals;

pub use analytics::Analytics;
pub use dashboard::DashboardPage;
pub use incidents::AccidentDetection;
pub use parking::ParkingManagement;
pub use routes::RouteOptimization;
pub use signals::TrafficSignals;
