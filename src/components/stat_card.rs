//! Stat Card Component

use leptos::prelude::*;

/// One colored dashboard statistic; the value tracks its signal.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] icon: String,
    #[prop(into)] bg_color: String,
) -> impl IntoView {
    view! {
        <div class=format!(
            "p-6 rounded-lg shadow-md flex items-center justify-between {} text-white",
            bg_color,
        )>
            <div>
                <h3 class="text-lg font-semibold mb-2">{title}</h3>
                <p class="text-2xl font-bold">{move || value.get()}</p>
            </div>
            <div class="text-4xl opacity-75">{icon}</div>
        </div>
    }
}
