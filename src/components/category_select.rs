//! Category Dropdown Component

use leptos::prelude::*;

use crate::context::ThemeColor;
use crate::models::Category;

/// Category filter dropdown with an "All Categories" entry. `selected` is
/// `None` for "All"; changes are reported through `on_change`.
#[component]
pub fn CategorySelect(
    selected: Signal<Option<Category>>,
    #[prop(into)] on_change: Callback<Option<Category>>,
    color: ThemeColor,
) -> impl IntoView {
    view! {
        <select
            class=format!(
                "p-3 border border-gray-300 rounded-md focus:outline-none focus:ring-2 {} w-full lg:w-48 bg-white",
                color.focus_ring_classes(),
            )
            prop:value=move || {
                selected
                    .get()
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| "All".to_string())
            }
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_change.run(Category::parse(&value));
            }
        >
            <option value="All">"All Categories"</option>
            {Category::ALL
                .iter()
                .map(|category| {
                    view! { <option value=category.label()>{category.label()}</option> }
                })
                .collect_view()}
        </select>
    }
}
