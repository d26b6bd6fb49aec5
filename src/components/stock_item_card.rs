//! Stock Item Card Component

use leptos::prelude::*;

use crate::format::{format_currency, format_date_time, format_optional};
use crate::models::StockItem;

/// One inventory entry: category icon, low-stock badge, quantity/price
/// details, and the edit/delete actions.
#[component]
pub fn StockItemCard(
    item: StockItem,
    #[prop(into)] on_edit: Callback<StockItem>,
    /// Receives `(id, name)` for the confirm dialog.
    #[prop(into)] on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let low_stock = item.is_low_stock();
    let created = format_optional(item.created_at, format_date_time);

    let edit_item = item.clone();
    let delete_id = item.id.clone();
    let delete_name = item.name.clone();

    view! {
        <div class=format!(
            "bg-white border rounded-lg p-5 shadow-sm hover:shadow-md transition-shadow duration-200 ease-in-out {}",
            if low_stock { "border-red-400 ring-1 ring-red-400" } else { "border-gray-200" },
        )>
            <div class="flex justify-between items-start mb-3">
                <h3 class="text-xl font-bold text-gray-800 flex items-center">
                    {item.category.icon()}
                    <span class="ml-2">{item.name.clone()}</span>
                </h3>
                <Show when=move || low_stock>
                    <span class="text-red-500 text-sm font-semibold">"⚠ Low Stock!"</span>
                </Show>
            </div>

            <div class="space-y-2 text-gray-700 mb-4">
                <p>
                    <strong class="font-semibold">"Category: "</strong>
                    {item.category.label()}
                </p>
                <p>
                    <strong class="font-semibold">"Quantity: "</strong>
                    <span class=if low_stock { "text-red-600 font-bold" } else { "" }>
                        {item.quantity}
                    </span>
                    " (Min: " {item.min_stock} ")"
                </p>
                <p>
                    <strong class="font-semibold">"Price: "</strong>
                    {format_currency(item.price)}
                </p>
                <Show when={
                    let has_supplier = !item.supplier.is_empty();
                    move || has_supplier
                }>
                    <p>
                        <strong class="font-semibold">"Supplier: "</strong>
                        {item.supplier.clone()}
                    </p>
                </Show>
                <p class="text-[12px] italic">
                    <strong class="font-semibold">"Created On: "</strong>
                    {created.clone()}
                </p>
                <Show when={
                    let has_description = !item.description.is_empty();
                    move || has_description
                }>
                    <p class="text-sm italic">{item.description.clone()}</p>
                </Show>
            </div>

            <div class="flex justify-end space-x-2">
                <button
                    class="cursor-pointer px-4 py-2 bg-yellow-500 text-white rounded-md hover:bg-yellow-600 transition duration-200 ease-in-out"
                    on:click=move |_| on_edit.run(edit_item.clone())
                >
                    "Edit"
                </button>
                <button
                    class="cursor-pointer px-4 py-2 bg-red-500 text-white rounded-md hover:bg-red-600 transition duration-200 ease-in-out"
                    on:click=move |_| on_delete.run((delete_id.clone(), delete_name.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
