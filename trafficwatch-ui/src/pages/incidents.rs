//! Accident Detection Page

use leptos::*;

use crate::api;
use crate::components::{EmptyState, Loading};
use crate::state::TrafficRecord;

/// Edges currently flagged as incidents. Fetched when the page opens.
#[component]
pub fn AccidentDetection() -> impl IntoView {
    let traffic = create_local_resource(|| (), |_| async move { api::fetch_traffic().await });

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Incidents"</h2>
            {move || match traffic.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("Error fetching incidents: {}", e).into());
                    view! { <EmptyState icon="⚠️" message=e.user_message() /> }.into_view()
                }
                Some(Ok(records)) => {
                    let incidents = active_incidents(records);
                    if incidents.is_empty() {
                        return view! { <EmptyState icon="✅" message="No active incidents" /> }.into_view();
                    }
                    incidents
                        .into_iter()
                        .map(|record| view! { <IncidentRow record=record /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

fn active_incidents(records: Vec<TrafficRecord>) -> Vec<TrafficRecord> {
    records.into_iter().filter(TrafficRecord::is_incident).collect()
}

#[component]
fn IncidentRow(record: TrafficRecord) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-lg p-4">
            <div class="font-medium">{format!("{} → {}", record.from, record.to)}</div>
            <div class="text-sm text-red-200">
                {format!("{} vehicles at {:.1} km/h", record.vehicle_count, record.avg_speed_kmh)}
            </div>
            <div class="text-xs text-gray-400">{record.timestamp}</div>
        </div>
    }
}
