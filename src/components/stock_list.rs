//! Stock List Component
//!
//! The inventory view: live snapshot of the user's items, search box,
//! category dropdown, low-stock filter from the URL, and the add/edit and
//! delete-confirm modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::use_api;
use crate::components::{
    AddEditItemModal, CategorySelect, DeleteConfirmModal, LoadingIndicator, StockItemCard,
};
use crate::context::use_app_context;
use crate::models::{Category, StockItem};
use crate::stats::StockFilter;
use crate::toast::use_toast;

#[component]
pub fn StockList() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toast = use_toast();
    let query = use_query_map();
    let navigate = use_navigate();

    let color = ctx.theme.with_untracked(|t| t.inventory_color());

    let (all_items, set_all_items) = signal(Vec::<StockItem>::new());
    let (loading, set_loading) = signal(true);
    let (search_term, set_search_term) = signal(String::new());
    let (selected_category, set_selected_category) = signal::<Option<Category>>(None);

    let (modal_open, set_modal_open) = signal(false);
    let (item_to_edit, set_item_to_edit) = signal::<Option<StockItem>>(None);

    let (delete_open, set_delete_open) = signal(false);
    let (item_to_delete, set_item_to_delete) = signal::<Option<(String, String)>>(None);
    let (deleting, set_deleting) = signal(false);

    // Seed local filter state from the URL on every query change.
    Effect::new(move |_| {
        let (filter_param, category_param) =
            query.with(|q| (q.get("filter"), q.get("category")));
        match filter_param.as_deref() {
            Some("low-stock") | Some("all") => {
                set_search_term.set(String::new());
                set_selected_category.set(None);
            }
            _ => match category_param.and_then(|c| Category::parse(&c)) {
                Some(category) => {
                    set_selected_category.set(Some(category));
                    set_search_term.set(String::new());
                }
                None => set_selected_category.set(None),
            },
        }
    });

    // Live inventory snapshot; re-subscribes after local writes.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let subscription = api.watch_inventory(move |snapshot| match snapshot {
                Ok(items) => {
                    set_all_items.set(items);
                    set_loading.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[inventory] snapshot failed: {err}").into(),
                    );
                    set_loading.set(false);
                }
            });
            on_cleanup(move || subscription.unsubscribe());
        });
    }

    // The three predicates compose as independent ANDs.
    let filtered_items = Memo::new(move |_| {
        let (filter_param, category_param) =
            query.with(|q| (q.get("filter"), q.get("category")));
        let filter = StockFilter {
            category: category_param
                .and_then(|c| Category::parse(&c))
                .or_else(|| selected_category.get()),
            search: search_term.get(),
            low_stock_only: filter_param.as_deref() == Some("low-stock"),
        };
        (filter.apply(&all_items.get()), filter.is_active())
    });

    let open_add_modal = move |_| {
        set_item_to_edit.set(None);
        set_modal_open.set(true);
    };

    let edit_item = Callback::new(move |item: StockItem| {
        set_item_to_edit.set(Some(item));
        set_modal_open.set(true);
    });

    let request_delete = Callback::new(move |(id, name): (String, String)| {
        set_item_to_delete.set(Some((id, name)));
        set_delete_open.set(true);
    });

    let confirm_delete = {
        let api = api.clone();
        Callback::new(move |_| {
            let Some((id, _)) = item_to_delete.get_untracked() else {
                return;
            };
            set_deleting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.delete_item(&id).await {
                    Ok(()) => {
                        set_delete_open.set(false);
                        set_item_to_delete.set(None);
                        ctx.reload();
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[inventory] delete failed: {err}").into(),
                        );
                        toast.error(format!("Failed to delete item: {err}"));
                    }
                }
                set_deleting.set(false);
            });
        })
    };

    let change_category = {
        let navigate = navigate.clone();
        Callback::new(move |category: Option<Category>| {
            set_selected_category.set(category);
            set_search_term.set(String::new());
            let target = match category {
                Some(c) => format!("/inventory?category={}", c.label()),
                None => "/inventory".to_string(),
            };
            navigate(&target, Default::default());
        })
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingIndicator label="Loading Stock..."/> }
        >
            <div>
                <div class="flex flex-col lg:flex-row justify-between items-center mb-6 space-y-4 lg:space-y-0 lg:space-x-4">
                    <h2 class="text-2xl font-bold text-gray-800">"Inventory List"</h2>
                    <div class="flex flex-col lg:flex-row space-y-4 lg:space-y-0 lg:space-x-4 w-full lg:w-auto">
                        <input
                            type="text"
                            placeholder="Search by name, category, or supplier..."
                            class=format!(
                                "transition duration-200 focus:ring-2 {} p-3 border border-gray-300 rounded-md focus:outline-none w-full lg:w-80",
                                color.focus_ring_classes(),
                            )
                            prop:value=move || search_term.get()
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        />
                        <CategorySelect
                            selected=selected_category.into()
                            on_change=change_category
                            color=color
                        />
                        <button
                            class=format!(
                                "{} cursor-pointer text-sm flex items-center justify-center px-6 py-3 text-white font-semibold rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 transition duration-200 ease-in-out w-full lg:w-auto",
                                color.button_classes(),
                            )
                            on:click=open_add_modal
                        >
                            "+ Add New Item"
                        </button>
                    </div>
                </div>

                {move || {
                    let (items, filters_active) = filtered_items.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-gray-600 text-center text-lg py-10">
                                {if filters_active {
                                    "No items match your current filters."
                                } else {
                                    "No stock items found. Click \"Add New Item\" to get started!"
                                }}
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <StockItemCard
                                                item=item
                                                on_edit=edit_item
                                                on_delete=request_delete
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                <AddEditItemModal
                    open=modal_open.into()
                    item_to_edit=item_to_edit.into()
                    on_close=Callback::new(move |_| set_modal_open.set(false))
                    color=color
                />

                <DeleteConfirmModal
                    open=delete_open.into()
                    target_name=Signal::derive(move || {
                        item_to_delete.get().map(|(_, name)| name).unwrap_or_default()
                    })
                    busy=deleting.into()
                    on_confirm=confirm_delete
                    on_close=Callback::new(move |_| {
                        set_delete_open.set(false);
                        set_item_to_delete.set(None);
                    })
                />
            </div>
        </Show>
    }
}
