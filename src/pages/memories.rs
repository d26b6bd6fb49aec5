//! Memories Page
//!
//! Live list of memories, newest first. Clicking a card opens its event
//! timeline; each card can also be deleted after confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{AddMemoryModal, DeleteConfirmModal, EventModal, LoadingIndicator};
use crate::context::use_app_context;
use crate::format::{format_long_date, format_optional};
use crate::models::Memory;
use crate::toast::use_toast;

#[component]
pub fn MemoriesPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toast = use_toast();

    let (memories, set_memories) = signal(Vec::<Memory>::new());
    let (loading, set_loading) = signal(true);

    let (add_open, set_add_open) = signal(false);
    let (selected_memory, set_selected_memory) = signal::<Option<Memory>>(None);

    let (delete_open, set_delete_open) = signal(false);
    let (memory_to_delete, set_memory_to_delete) = signal::<Option<Memory>>(None);
    let (deleting, set_deleting) = signal(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let subscription = api.watch_memories(move |snapshot| match snapshot {
                Ok(loaded) => {
                    set_memories.set(loaded);
                    set_loading.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[memories] snapshot failed: {err}").into(),
                    );
                    toast.error("Failed to load memories.");
                    set_loading.set(false);
                }
            });
            on_cleanup(move || subscription.unsubscribe());
        });
    }

    let confirm_delete = {
        let api = api.clone();
        Callback::new(move |_| {
            let Some(memory) = memory_to_delete.get_untracked() else {
                return;
            };
            set_deleting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.delete_memory(&memory.id).await {
                    Ok(()) => {
                        toast.success("Memory deleted successfully! 🗑️");
                        ctx.reload();
                        set_delete_open.set(false);
                        set_memory_to_delete.set(None);
                    }
                    Err(err) => toast.error(format!("Error deleting memory: {err}")),
                }
                set_deleting.set(false);
            });
        })
    };

    let color = move || ctx.theme.get().memories_color();

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="bg-white rounded-lg shadow-xl p-6 md:p-8">
                <div class="flex flex-col sm:flex-row justify-between items-center mb-6 gap-4">
                    <h1 class="text-3xl font-bold text-gray-800">"Memories 💭"</h1>
                    <button
                        class=move || {
                            format!(
                                "{} cursor-pointer px-6 py-3 text-white font-semibold rounded-md shadow-md transition duration-200 ease-in-out",
                                color().button_classes(),
                            )
                        }
                        on:click=move |_| set_add_open.set(true)
                    >
                        "+ Add Memory"
                    </button>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingIndicator label="Loading Memories..."/> }
                >
                    {move || {
                        let memories = memories.get();
                        if memories.is_empty() {
                            return view! {
                                <p class="text-center text-gray-600 py-10">
                                    "No memories added yet. Start by adding one!"
                                </p>
                            }
                                .into_any();
                        }
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {memories
                                    .into_iter()
                                    .map(|memory| {
                                        let open_target = memory.clone();
                                        let delete_target = memory.clone();
                                        view! {
                                            <div
                                                class="bg-green-50 border border-green-200 rounded-lg shadow-md p-5 cursor-pointer hover:shadow-lg hover:scale-[1.01] transition-all duration-200 ease-in-out relative"
                                                on:click=move |_| {
                                                    set_selected_memory.set(Some(open_target.clone()))
                                                }
                                            >
                                                <button
                                                    class="cursor-pointer absolute top-3 right-3 text-red-500 hover:text-red-700 text-sm font-semibold"
                                                    on:click=move |ev: web_sys::MouseEvent| {
                                                        ev.stop_propagation();
                                                        set_memory_to_delete.set(Some(delete_target.clone()));
                                                        set_delete_open.set(true);
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                                <h2 class="text-xl font-bold text-gray-800 mb-2 pr-14">
                                                    {memory.name.clone()}
                                                </h2>
                                                <Show when={
                                                    let has_description = !memory.description.is_empty();
                                                    move || has_description
                                                }>
                                                    <p class="text-gray-600 text-sm mb-3 line-clamp-3">
                                                        {memory.description.clone()}
                                                    </p>
                                                </Show>
                                                <p class="text-xs text-gray-400">
                                                    "Created: "
                                                    {format_optional(memory.created_at, format_long_date)}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                </Show>
            </div>

            <AddMemoryModal
                open=add_open.into()
                on_close=Callback::new(move |_| set_add_open.set(false))
                color=color()
            />

            {move || {
                selected_memory
                    .get()
                    .map(|memory| {
                        view! {
                            <EventModal
                                open=Signal::derive(move || {
                                    selected_memory.with(|selected| selected.is_some())
                                })
                                memory=memory
                                on_close=Callback::new(move |_| set_selected_memory.set(None))
                                color=color()
                            />
                        }
                    })
            }}

            <DeleteConfirmModal
                open=delete_open.into()
                target_name=Signal::derive(move || {
                    memory_to_delete
                        .get()
                        .map(|memory| memory.name)
                        .unwrap_or_else(|| "this memory".to_string())
                })
                busy=deleting.into()
                on_confirm=confirm_delete
                on_close=Callback::new(move |_| {
                    set_delete_open.set(false);
                    set_memory_to_delete.set(None);
                })
            />
        </div>
    }
}
