//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alerts;
pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod quick_access;
pub mod toast;
pub mod traffic_map;

pub use alerts::RecentAlerts;
pub use loading::{EmptyState, Loading};
pub use metric_card::MetricCard;
pub use nav::MobileNavigation;
pub use quick_access::QuickAccessCards;
pub use toast::Toast;
pub use traffic_map::TrafficMap;
