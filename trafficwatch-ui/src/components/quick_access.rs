//! Quick Access Component
//!
//! Shortcut tiles to the other dashboard sections.

use leptos::*;

use crate::state::ViewState;

const SHORTCUTS: [(ViewState, &str); 4] = [
    (ViewState::Routes, "Plan around congestion"),
    (ViewState::Signals, "Signal phases"),
    (ViewState::Parking, "Find a space"),
    (ViewState::Incidents, "Active incidents"),
];

#[component]
pub fn QuickAccessCards(on_view_change: Callback<String>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <h2 class="text-lg font-semibold mb-3">"Quick Access"</h2>
            <div class="grid grid-cols-2 gap-3">
                {SHORTCUTS
                    .into_iter()
                    .map(|(view, hint)| {
                        let id = view.id().to_string();
                        view! {
                            <button
                                class="bg-gray-700 hover:bg-gray-600 rounded-lg p-3 text-left transition-colors"
                                on:click=move |_| on_view_change.call(id.clone())
                            >
                                <div class="text-xl">{view.icon()}</div>
                                <div class="font-medium">{view.title()}</div>
                                <div class="text-gray-400 text-xs">{hint}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
