//! Traffic Map Component
//!
//! Schematic of the monitored edges, coloured by congestion.

use leptos::*;

use crate::components::EmptyState;
use crate::state::{CongestionLevel, TrafficRecord};

#[component]
pub fn TrafficMap(
    #[prop(into)]
    records: Signal<Vec<TrafficRecord>>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <h2 class="text-lg font-semibold mb-3">"Live Traffic"</h2>
            {move || {
                let records = records.get();
                if records.is_empty() {
                    return view! { <EmptyState icon="🗺️" message="Waiting for traffic data" /> }
                        .into_view();
                }

                records
                    .into_iter()
                    .map(|record| view! { <EdgeRow record=record /> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn EdgeRow(record: TrafficRecord) -> impl IntoView {
    let level = CongestionLevel::classify(record.congestion_risk);

    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
            <div class="flex items-center space-x-2">
                <span class=format!("w-3 h-3 rounded-full {}", level.bg_class()) />
                <span>{format!("{} → {}", record.from, record.to)}</span>
                {record.is_incident().then(|| view! {
                    <span class="text-red-400 text-xs">"incident"</span>
                })}
            </div>
            <div class="text-sm text-gray-400">
                {format!("{:.1} km/h · {} vehicles", record.avg_speed_kmh, record.vehicle_count)}
            </div>
            <span class=format!("text-sm {}", level.text_class())>{level.to_string()}</span>
        </div>
    }
}
