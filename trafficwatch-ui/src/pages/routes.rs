//! Route Optimization Page

use leptos::*;

use crate::api;
use crate::components::{EmptyState, Loading};
use crate::state::{CongestionLevel, TrafficRecord};

/// Monitored corridors, ordered fastest first. Fetched when the page opens.
#[component]
pub fn RouteOptimization() -> impl IntoView {
    let traffic = create_local_resource(|| (), |_| async move { api::fetch_traffic().await });

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Corridors"</h2>
            {move || match traffic.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("Error fetching corridors: {}", e).into());
                    view! { <EmptyState icon="⚠️" message=e.user_message() /> }.into_view()
                }
                Some(Ok(records)) => fastest_first(records)
                    .into_iter()
                    .map(|record| view! { <CorridorRow record=record /> })
                    .collect_view(),
            }}
        </div>
    }
}

fn fastest_first(mut records: Vec<TrafficRecord>) -> Vec<TrafficRecord> {
    records.sort_by(|a, b| b.avg_speed_kmh.total_cmp(&a.avg_speed_kmh));
    records
}

#[component]
fn CorridorRow(record: TrafficRecord) -> impl IntoView {
    let level = CongestionLevel::classify(record.congestion_risk);

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 flex justify-between">
            <div>
                <div class="font-medium">{format!("{} → {}", record.from, record.to)}</div>
                <div class="text-sm text-gray-400">
                    {format!("{:.1} km in {:.0} min", record.distance_m / 1000.0, record.duration_s / 60.0)}
                </div>
            </div>
            <div class="text-right">
                <div>{format!("{:.1} km/h", record.avg_speed_kmh)}</div>
                <div class=format!("text-sm {}", level.text_class())>{level.to_string()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::traffic::record;

    #[test]
    fn test_fastest_first() {
        let sorted = fastest_first(vec![
            record("sensor_A", "sensor_B", 20.0, 1.0),
            record("sensor_B", "sensor_C", 45.0, 0.0),
            record("sensor_C", "sensor_A", 12.5, 2.0),
        ]);

        let speeds: Vec<f64> = sorted.iter().map(|r| r.avg_speed_kmh).collect();
        assert_eq!(speeds, vec![45.0, 20.0, 12.5]);
    }
}
