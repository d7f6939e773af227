//! App Root Component
//!
//! Provides dashboard state, owns the poller and renders the selected view.

use leptos::*;

use crate::components::{EmptyState, MobileNavigation, Toast};
use crate::pages::{
    AccidentDetection, Analytics, DashboardPage, ParkingManagement, RouteOptimization,
    TrafficSignals,
};
use crate::state::{provide_dashboard_state, start_polling, DashboardState, ViewState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    // Poller lives as long as the root; dropping it cancels the timer
    let poller = start_polling(state);
    on_cleanup(move || drop(poller));

    let on_view_change = Callback::new(move |view_id: String| state.navigate(&view_id));
    let current_view = Signal::derive(move || state.current_view.get());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-6 pb-24">
                {move || match current_view.get() {
                    ViewState::Dashboard => view! { <DashboardPage on_view_change=on_view_change /> }.into_view(),
                    ViewState::Routes => view! { <RouteOptimization /> }.into_view(),
                    ViewState::Signals => view! { <TrafficSignals /> }.into_view(),
                    ViewState::Parking => view! { <ParkingManagement /> }.into_view(),
                    ViewState::Incidents => view! { <AccidentDetection /> }.into_view(),
                    ViewState::Analytics => view! { <Analytics /> }.into_view(),
                    ViewState::Unrecognized(_) => {
                        view! { <EmptyState icon="🚧" message="View not implemented yet" /> }.into_view()
                    }
                }}
            </main>

            <MobileNavigation current_view=current_view on_view_change=on_view_change />

            <Toast />
        </div>
    }
}

/// Title bar with live indicator and last update time
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let last_updated = move || {
        state
            .traffic
            .with(|s| s.last_updated)
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|t| {
                t.with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
                    .to_string()
            })
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">"🚦"</span>
                    <h1 class="text-xl font-bold">{move || state.current_view.get().title()}</h1>
                </div>

                <div class="flex items-center space-x-3 text-sm">
                    {move || last_updated().map(|t| view! {
                        <span class="text-gray-400">{format!("Updated {}", t)}</span>
                    })}
                    <span class="flex items-center space-x-1 text-green-400">
                        <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                        <span>"Live"</span>
                    </span>
                </div>
            </div>
        </header>
    }
}
