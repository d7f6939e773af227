//! View Selection
//!
//! The dashboard shows one section at a time, chosen by a view identifier.
//! Every identifier is accepted; unknown ones select a placeholder.

use std::fmt;

/// Currently selected dashboard section
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Dashboard,
    Routes,
    Signals,
    Parking,
    Incidents,
    Analytics,
    /// Identifier with no section behind it
    Unrecognized(String),
}

impl ViewState {
    /// Sections reachable from the bottom navigation, in display order
    pub const NAVIGABLE: [ViewState; 6] = [
        ViewState::Dashboard,
        ViewState::Routes,
        ViewState::Signals,
        ViewState::Parking,
        ViewState::Incidents,
        ViewState::Analytics,
    ];

    /// Resolve a navigation identifier; never fails
    pub fn from_id(id: &str) -> Self {
        match id {
            "dashboard" => ViewState::Dashboard,
            "routes" => ViewState::Routes,
            "signals" => ViewState::Signals,
            "parking" => ViewState::Parking,
            "incidents" => ViewState::Incidents,
            "analytics" => ViewState::Analytics,
            other => ViewState::Unrecognized(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ViewState::Dashboard => "dashboard",
            ViewState::Routes => "routes",
            ViewState::Signals => "signals",
            ViewState::Parking => "parking",
            ViewState::Incidents => "incidents",
            ViewState::Analytics => "analytics",
            ViewState::Unrecognized(id) => id,
        }
    }

    /// Header title; empty for unrecognized views
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "Traffic Dashboard",
            ViewState::Routes => "Routes",
            ViewState::Signals => "Signals",
            ViewState::Parking => "Parking",
            ViewState::Incidents => "Incidents",
            ViewState::Analytics => "Analytics",
            ViewState::Unrecognized(_) => "",
        }
    }

    /// Short label for the bottom navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "Home",
            ViewState::Unrecognized(_) => "",
            other => other.title(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "🏠",
            ViewState::Routes => "🧭",
            ViewState::Signals => "🚦",
            ViewState::Parking => "🅿️",
            ViewState::Incidents => "🚨",
            ViewState::Analytics => "📈",
            ViewState::Unrecognized(_) => "❔",
        }
    }

}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
