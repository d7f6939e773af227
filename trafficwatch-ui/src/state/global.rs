//! Global Application State
//!
//! Reactive state shared by the dashboard, provided through context.

use leptos::*;

use super::traffic::TrafficSnapshot;
use super::view::ViewState;

const SUCCESS_TIMEOUT_MS: u32 = 3_000;
const ERROR_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message for the toast surface
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Records plus loading/error flags, updated once per poll
    pub traffic: RwSignal<TrafficSnapshot>,
    /// Section currently shown
    pub current_view: RwSignal<ViewState>,
    /// Toast message, cleared after a timeout
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        traffic: create_rw_signal(TrafficSnapshot::new()),
        current_view: create_rw_signal(ViewState::default()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl DashboardState {
    /// Switch section; unknown identifiers select the placeholder
    pub fn navigate(&self, view_id: &str) {
        self.current_view.set(ViewState::from_id(view_id));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.show_notice(message, NoticeKind::Success, SUCCESS_TIMEOUT_MS);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.show_notice(message, NoticeKind::Error, ERROR_TIMEOUT_MS);
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }

    fn show_notice(&self, message: &str, kind: NoticeKind, timeout_ms: u32) {
        let notice = Notice {
            message: message.to_string(),
            kind,
        };
        self.notice.set(Some(notice.clone()));

        // Only clear if nothing newer replaced it meanwhile
        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            if notice_signal.get_untracked().as_ref() == Some(&notice) {
                notice_signal.set(None);
            }
        })
        .forget();
    }
}
