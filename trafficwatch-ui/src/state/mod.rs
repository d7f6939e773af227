//! State Management
//!
//! Traffic feed state, view selection, derived metrics and the poller.

pub mod aggregate;
pub mod global;
pub mod poller;
pub mod traffic;
pub mod view;

pub use aggregate::{CongestionLevel, DashboardMetrics};
pub use global::{provide_dashboard_state, DashboardState, NoticeKind};
pub use poller::start_polling;
pub use traffic::TrafficRecord;
pub use view::ViewState;
