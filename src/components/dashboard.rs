//! Dashboard Component
//!
//! Overview stats over the live inventory snapshot, plus the
//! browse-by-category grid. Stat cards navigate into the inventory view
//! with the matching URL filter.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::components::{LoadingIndicator, StatCard};
use crate::context::use_app_context;
use crate::format::format_currency;
use crate::models::{Category, StockItem};
use crate::stats::InventoryStats;

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (stock_items, set_stock_items) = signal(Vec::<StockItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let subscription = api.watch_inventory(move |snapshot| match snapshot {
            Ok(items) => {
                set_stock_items.set(items);
                set_loading.set(false);
            }
            Err(err) => {
                web_sys::console::error_1(
                    &format!("[dashboard] snapshot failed: {err}").into(),
                );
                set_loading.set(false);
            }
        });
        on_cleanup(move || subscription.unsubscribe());
    });

    let stats = Memo::new(move |_| InventoryStats::compute(&stock_items.get()));

    let go_all = {
        let navigate = navigate.clone();
        move |_| navigate("/inventory?filter=all", Default::default())
    };
    let go_low_stock = {
        let navigate = navigate.clone();
        move |_| navigate("/inventory?filter=low-stock", Default::default())
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingIndicator label="Loading Dashboard..."/> }
        >
            <div class="rounded-lg px-4 py-8">
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    <div
                        class="cursor-pointer transition-transform duration-200 ease-in-out hover:scale-[1.02]"
                        on:click=go_all.clone()
                    >
                        <StatCard
                            title="Total Items"
                            value=Signal::derive(move || stats.get().total_items.to_string())
                            icon="📦"
                            bg_color="bg-blue-600"
                        />
                    </div>
                    <div
                        class="cursor-pointer transition-transform duration-200 ease-in-out hover:scale-[1.02]"
                        on:click=go_low_stock.clone()
                    >
                        <StatCard
                            title="Low Stock Alerts"
                            value=Signal::derive(move || stats.get().low_stock_count.to_string())
                            icon="🚨"
                            bg_color="bg-red-600"
                        />
                    </div>
                    <StatCard
                        title="Inventory Value"
                        value=Signal::derive(move || format_currency(stats.get().total_value))
                        icon="💰"
                        bg_color="bg-green-600"
                    />
                    <StatCard
                        title="Unique Categories"
                        value=Signal::derive(move || stats.get().unique_categories.to_string())
                        icon="🏷️"
                        bg_color="bg-purple-600"
                    />
                </div>

                <div class="bg-white/40 p-6 rounded-lg shadow-lg">
                    <h3 class="text-2xl font-semibold text-gray-700 mb-4 text-center">
                        "Browse by Category"
                    </h3>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                let category = *category;
                                let navigate = navigate.clone();
                                view! {
                                    <div
                                        class="flex flex-col items-center justify-center p-4 bg-gray-50 border border-gray-200 rounded-lg cursor-pointer hover:bg-gray-100 hover:shadow-md transition-all duration-200 ease-in-out"
                                        on:click=move |_| {
                                            navigate(
                                                &format!("/inventory?category={}", category.label()),
                                                Default::default(),
                                            )
                                        }
                                    >
                                        <div class="text-blue-600 text-3xl mb-2">{category.icon()}</div>
                                        <span class="text-lg font-medium text-gray-800 text-center">
                                            {category.label()}
                                        </span>
                                        <span class="text-sm text-gray-500 mt-1">
                                            {move || format!("({} items)", stats.get().count_for(category))}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
