//! Analytics Page

use leptos::*;

use crate::components::EmptyState;

#[component]
pub fn Analytics() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Analytics"</h2>
            <EmptyState icon="📈" message="Historical analytics are not available yet" />
        </div>
    }
}
