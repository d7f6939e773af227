//! Recent Alerts Component

use leptos::*;

#[derive(Clone, Copy)]
enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    fn dot_class(self) -> &'static str {
        match self {
            Severity::Critical => "bg-red-500",
            Severity::Warning => "bg-amber-500",
            Severity::Info => "bg-blue-500",
        }
    }
}

const ALERTS: [(Severity, &str, &str); 3] = [
    (Severity::Critical, "Multi-vehicle accident on MG Road", "2 min ago"),
    (Severity::Warning, "Construction delays on NH-48", "15 min ago"),
    (Severity::Info, "Weather advisory: Light rain", "1 hr ago"),
];

/// Fixed list of recent alerts
#[component]
pub fn RecentAlerts() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <h2 class="text-lg font-semibold mb-3">"Recent Alerts"</h2>
            <ul class="space-y-3">
                {ALERTS
                    .into_iter()
                    .map(|(severity, message, age)| view! {
                        <li class="flex items-start space-x-3">
                            <span class=format!("mt-1.5 w-2 h-2 rounded-full {}", severity.dot_class()) />
                            <div>
                                <div class="text-sm">{message}</div>
                                <div class="text-xs text-gray-500">{age}</div>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
