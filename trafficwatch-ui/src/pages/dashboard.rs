//! Dashboard Page
//!
//! Live map, summary cards, alerts and shortcuts.

use leptos::*;

use crate::components::{MetricCard, QuickAccessCards, RecentAlerts, TrafficMap};
use crate::state::{CongestionLevel, DashboardMetrics, DashboardState};

/// Dashboard page component
#[component]
pub fn DashboardPage(on_view_change: Callback<String>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let metrics = create_memo(move |_| state.traffic.with(DashboardMetrics::from_snapshot));
    let records = Signal::derive(move || state.traffic.with(|s| s.records.clone()));
    let error = move || state.traffic.with(|s| s.error.clone());

    let congestion_color = move || match metrics.get().congestion.as_str() {
        "Low" => CongestionLevel::Low.text_class(),
        "Medium" => CongestionLevel::Medium.text_class(),
        "High" => CongestionLevel::High.text_class(),
        _ => "text-white",
    };

    view! {
        <div class="space-y-6">
            <TrafficMap records=records />

            <div class="grid grid-cols-2 gap-4">
                <MetricCard
                    label="Congestion"
                    value=Signal::derive(move || metrics.get().congestion)
                    color=Signal::derive(congestion_color)
                />
                <MetricCard
                    label="Incidents"
                    value=Signal::derive(move || metrics.get().incidents)
                    color="text-red-400"
                />
                <MetricCard
                    label="Avg Speed"
                    value=Signal::derive(move || metrics.get().avg_speed)
                    color="text-blue-400"
                />
                <MetricCard
                    label="Signals"
                    value=Signal::derive(move || metrics.get().signals)
                    color="text-green-400"
                />
            </div>

            <RecentAlerts />

            <QuickAccessCards on_view_change=on_view_change />

            {move || error().map(|e| view! {
                <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-3">
                    {format!("Error fetching traffic data: {}", e)}
                </div>
            })}
        </div>
    }
}
