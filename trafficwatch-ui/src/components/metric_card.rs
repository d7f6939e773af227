//! Metric Card Component
//!
//! One summary figure with its label.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Card label
    label: &'static str,
    /// Text to display, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Tailwind text colour for the value
    #[prop(into, default = "text-white".into())]
    color: MaybeSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class=move || format!("text-2xl font-bold mt-2 {}", color.get())>
                {move || value.get()}
            </div>
        </div>
    }
}
