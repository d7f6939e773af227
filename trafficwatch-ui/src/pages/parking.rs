//! Parking Management Page

use leptos::*;

use crate::components::EmptyState;

#[component]
pub fn ParkingManagement() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Parking"</h2>
            <EmptyState icon="🅿️" message="No parking feed connected" />
        </div>
    }
}
