//! Toast Notification Component
//!
//! Shows feed-health notices.

use leptos::*;

use crate::state::{DashboardState, NoticeKind};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.notice.get().map(|notice| {
                    let (icon, bg_class) = match notice.kind {
                        NoticeKind::Success => ("✓", "bg-green-600"),
                        NoticeKind::Error => ("✕", "bg-red-600"),
                    };

                    view! {
                        <div
                            class=format!(
                                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg cursor-pointer",
                                bg_class
                            )
                            on:click=move |_| state.clear_notice()
                        >
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
