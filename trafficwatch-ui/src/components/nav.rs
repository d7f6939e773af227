//! Navigation Component
//!
//! Bottom navigation bar for switching dashboard sections.

use leptos::*;

use crate::state::ViewState;

/// Bottom navigation with one button per section
#[component]
pub fn MobileNavigation(
    #[prop(into)]
    current_view: Signal<ViewState>,
    on_view_change: Callback<String>,
) -> impl IntoView {
    view! {
        <nav class="fixed bottom-0 inset-x-0 bg-gray-800 border-t border-gray-700 z-40">
            <div class="flex justify-around h-16">
                {ViewState::NAVIGABLE
                    .into_iter()
                    .map(|view| view! {
                        <NavButton view=view current_view=current_view on_view_change=on_view_change />
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn NavButton(
    view: ViewState,
    current_view: Signal<ViewState>,
    on_view_change: Callback<String>,
) -> impl IntoView {
    let id = view.id().to_string();
    let target = view.clone();
    let is_active = create_memo(move |_| current_view.get() == target);

    view! {
        <button
            class="flex flex-col items-center justify-center flex-1 text-xs transition-colors"
            class=("text-primary-400", move || is_active.get())
            class=("text-gray-400", move || !is_active.get())
            on:click=move |_| on_view_change.call(id.clone())
        >
            <span class="text-lg">{view.icon()}</span>
            <span>{view.nav_label()}</span>
        </button>
    }
}
