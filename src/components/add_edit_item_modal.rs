//! Add / Edit Stock Item Modal
//!
//! One form for both creating and editing. Validation happens entirely here;
//! the backend accepts whatever it is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::api::use_api;
use crate::components::Spinner;
use crate::context::{use_app_context, ThemeColor};
use crate::models::{Category, StockItem, StockItemInput};
use crate::toast::use_toast;
use crate::validate::{parse_price, parse_quantity};

#[component]
pub fn AddEditItemModal(
    open: Signal<bool>,
    /// `Some` puts the form in edit mode.
    item_to_edit: Signal<Option<StockItem>>,
    #[prop(into)] on_close: Callback<()>,
    color: ThemeColor,
) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toast = use_toast();
    let query = use_query_map();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(Category::Electronics);
    let (quantity, set_quantity) = signal(String::new());
    let (min_stock, set_min_stock) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (supplier, set_supplier) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (form_error, set_form_error) = signal(String::new());

    // Category selected in the URL seeds new items.
    let query_category = move || {
        query
            .with(|q| q.get("category"))
            .and_then(|c| Category::parse(&c))
    };

    // Reset the form whenever the modal opens or switches target.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match item_to_edit.get() {
            Some(item) => {
                set_name.set(item.name);
                set_category.set(item.category);
                set_quantity.set(item.quantity.to_string());
                set_min_stock.set(item.min_stock.to_string());
                set_price.set(item.price.to_string());
                set_supplier.set(item.supplier);
                set_description.set(item.description);
            }
            None => {
                set_name.set(String::new());
                set_category.set(query_category().unwrap_or(Category::Electronics));
                set_quantity.set(String::new());
                set_min_stock.set(String::new());
                set_price.set(String::new());
                set_supplier.set(String::new());
                set_description.set(String::new());
            }
        }
        set_form_error.set(String::new());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(String::new());

        if name.get().trim().is_empty() {
            set_form_error.set("Item Name is required.".to_string());
            return;
        }
        let quantity_raw = quantity.get();
        let min_stock_raw = min_stock.get();
        let price_raw = price.get();
        if quantity_raw.trim().is_empty()
            || min_stock_raw.trim().is_empty()
            || price_raw.trim().is_empty()
        {
            set_form_error.set("Quantity, Minimum Stock, and Price are required.".to_string());
            return;
        }
        let (Some(quantity), Some(min_stock), Some(price)) = (
            parse_quantity(&quantity_raw),
            parse_quantity(&min_stock_raw),
            parse_price(&price_raw),
        ) else {
            set_form_error.set(
                "Quantity, Minimum Stock, and Price must be valid non-negative numbers."
                    .to_string(),
            );
            return;
        };

        let input = StockItemInput {
            name: name.get(),
            category: category.get(),
            quantity,
            min_stock,
            price,
            supplier: supplier.get(),
            description: description.get(),
        };
        let editing = item_to_edit.get();

        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            let result = match &editing {
                Some(item) => api.update_item(&item.id, &input).await,
                None => api.create_item(&input).await,
            };
            set_busy.set(false);
            match result {
                Ok(()) => {
                    toast.success(if editing.is_some() {
                        "Item updated successfully! 🎉"
                    } else {
                        "Item added successfully! ✨"
                    });
                    ctx.reload();
                    on_close.run(());
                }
                Err(err) => {
                    let message = format!("Failed to save item: {err}");
                    set_form_error.set(message.clone());
                    toast.error(message);
                }
            }
        });
    };

    let input_classes = "mt-1 block w-full p-3 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 transition duration-150";

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-[rgba(17,24,39,0.8)] flex items-center justify-center z-50 p-4 animate-fade-in">
                <div class="bg-white rounded-lg shadow-2xl w-full max-w-md p-6 md:p-8 relative">
                    <button
                        class="cursor-pointer absolute top-4 right-4 text-gray-500 hover:text-gray-900 text-3xl font-bold transition-colors duration-200"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    <h2 class="text-2xl font-bold text-gray-800 mb-6 text-center">
                        {move || {
                            if item_to_edit.get().is_some() {
                                "Edit Stock Item"
                            } else {
                                "Add New Stock Item"
                            }
                        }}
                    </h2>

                    <Show when=move || !form_error.get().is_empty()>
                        <p class="text-red-600 bg-red-100 border border-red-300 rounded-md p-3 mb-4 text-center text-sm">
                            {move || form_error.get()}
                        </p>
                    </Show>

                    <form class="space-y-4" on:submit=submit.clone()>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Item Name " <span class="text-red-500">"*"</span>
                            </label>
                            <input
                                type="text"
                                placeholder="e.g., Apple iPhone 15"
                                class=input_classes
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Category " <span class="text-red-500">"*"</span>
                            </label>
                            <select
                                class=format!("{} bg-white", input_classes)
                                prop:value=move || category.get().label().to_string()
                                on:change=move |ev| {
                                    if let Some(parsed) = Category::parse(&event_target_value(&ev)) {
                                        set_category.set(parsed);
                                    }
                                }
                            >
                                {Category::ALL
                                    .iter()
                                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700">
                                    "Current Quantity " <span class="text-red-500">"*"</span>
                                </label>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="0"
                                    class=input_classes
                                    prop:value=move || quantity.get()
                                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700">
                                    "Minimum Stock Level " <span class="text-red-500">"*"</span>
                                </label>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="10"
                                    class=input_classes
                                    prop:value=move || min_stock.get()
                                    on:input=move |ev| set_min_stock.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Price per unit " <span class="text-red-500">"*"</span>
                            </label>
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                placeholder="0.00"
                                class=input_classes
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Supplier (Optional)"
                            </label>
                            <input
                                type="text"
                                placeholder="e.g., Tech Distributor Inc."
                                class=input_classes
                                prop:value=move || supplier.get()
                                on:input=move |ev| set_supplier.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Description (Optional)"
                            </label>
                            <textarea
                                rows="3"
                                placeholder="Add a detailed description of the item."
                                class=input_classes
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class=format!(
                                "{} cursor-pointer w-full py-3 px-4 text-white font-semibold rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 transition duration-200 ease-in-out disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center",
                                color.button_classes(),
                            )
                            disabled=move || busy.get()
                        >
                            <Show when=move || busy.get()>
                                <Spinner/>
                            </Show>
                            {move || {
                                if item_to_edit.get().is_some() { "Update Item" } else { "Add Item" }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
