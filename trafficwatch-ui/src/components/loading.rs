//! Loading Component
//!
//! Loading spinner and empty placeholder.

use leptos::*;

/// Full-section loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Centered icon and message for a section with nothing to show
#[component]
pub fn EmptyState(icon: &'static str, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-gray-400">
            <span class="text-4xl mb-3">{icon}</span>
            <p>{message}</p>
        </div>
    }
}
