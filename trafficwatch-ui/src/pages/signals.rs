//! Traffic Signals Page

use leptos::*;

use crate::api::{self, FetchError, SignalStatus};
use crate::components::{EmptyState, Loading};

/// Current phase of every signal, fetched when the page opens
#[component]
pub fn TrafficSignals() -> impl IntoView {
    let signals = create_local_resource(|| (), |_| async move { api::fetch_signals().await });

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Signals"</h2>
            {move || match signals.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(e)) => signal_error(e).into_view(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <EmptyState icon="🚦" message="No signals reported" /> }.into_view()
                }
                Some(Ok(list)) => list
                    .into_iter()
                    .map(|signal| view! { <SignalRow signal=signal /> })
                    .collect_view(),
            }}
        </div>
    }
}

fn signal_error(e: FetchError) -> impl IntoView {
    web_sys::console::error_1(&format!("Error fetching signals: {}", e).into());
    view! { <EmptyState icon="⚠️" message="Failed to fetch signal data" /> }
}

#[component]
fn SignalRow(signal: SignalStatus) -> impl IntoView {
    let dot = match signal.state.as_str() {
        "green" => "bg-green-500",
        "yellow" => "bg-yellow-400",
        "red" => "bg-red-500",
        _ => "bg-gray-500",
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 flex items-center justify-between">
            <div class="flex items-center space-x-3">
                <span class=format!("w-3 h-3 rounded-full {}", dot) />
                <span class="font-medium">{signal.name}</span>
            </div>
            <span class="text-sm text-gray-400">
                {format!("{} · {}s", signal.state, signal.duration_s)}
            </span>
        </div>
    }
}
