//! Event Timeline Modal
//!
//! Events for one memory: a live, date-descending timeline plus the
//! add-event form. The newest event is highlighted; today's and past dates
//! get their own styling.

use chrono::{NaiveDate, NaiveTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{DeleteConfirmModal, Spinner};
use crate::context::{use_app_context, ThemeColor};
use crate::format::format_event_date;
use crate::models::{day_status, DayStatus, EventInput, Memory, MemoryEvent};
use crate::toast::use_toast;

#[component]
pub fn EventModal(
    open: Signal<bool>,
    memory: Memory,
    #[prop(into)] on_close: Callback<()>,
    color: ThemeColor,
) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toast = use_toast();

    let (events, set_events) = signal(Vec::<MemoryEvent>::new());
    let (loading_events, set_loading_events) = signal(true);
    let (event_date, set_event_date) = signal(String::new());
    let (event_description, set_event_description) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(String::new());

    let (delete_open, set_delete_open) = signal(false);
    let (event_to_delete, set_event_to_delete) = signal::<Option<MemoryEvent>>(None);
    let (deleting, set_deleting) = signal(false);

    let memory_id = memory.id.clone();
    let memory_name = memory.name.clone();
    let memory_description = memory.description.clone();

    // Nested live subscription, active only while the modal is open.
    {
        let api = api.clone();
        let memory_id = memory_id.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            if !open.get() {
                return;
            }
            let subscription =
                api.watch_events(memory_id.clone(), move |snapshot| match snapshot {
                    Ok(loaded) => {
                        set_events.set(loaded);
                        set_loading_events.set(false);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[events] snapshot failed: {err}").into(),
                        );
                        toast.error("Failed to load events.");
                        set_loading_events.set(false);
                    }
                });
            on_cleanup(move || subscription.unsubscribe());
        });
    }

    let add_event = {
        let api = api.clone();
        let memory_id = memory_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error.set(String::new());

            let Ok(date) = NaiveDate::parse_from_str(event_date.get().trim(), "%Y-%m-%d") else {
                set_error.set("Event Date is required.".to_string());
                return;
            };
            let input = EventInput {
                date: date.and_time(NaiveTime::MIN).and_utc(),
                description: event_description.get(),
            };

            set_busy.set(true);
            let api = api.clone();
            let memory_id = memory_id.clone();
            spawn_local(async move {
                match api.create_event(&memory_id, &input).await {
                    Ok(()) => {
                        toast.success("Event added successfully! 🎉");
                        ctx.reload();
                        set_event_date.set(String::new());
                        set_event_description.set(String::new());
                    }
                    Err(err) => {
                        let message = format!("Failed to add event: {err}");
                        set_error.set(message.clone());
                        toast.error(message);
                    }
                }
                set_busy.set(false);
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        let memory_id = memory_id.clone();
        Callback::new(move |_| {
            let Some(event) = event_to_delete.get_untracked() else {
                return;
            };
            set_deleting.set(true);
            let api = api.clone();
            let memory_id = memory_id.clone();
            spawn_local(async move {
                match api.delete_event(&memory_id, &event.id).await {
                    Ok(()) => {
                        toast.success("Event deleted successfully! 🗑️");
                        ctx.reload();
                        set_delete_open.set(false);
                        set_event_to_delete.set(None);
                    }
                    Err(err) => toast.error(format!("Error deleting event: {err}")),
                }
                set_deleting.set(false);
            });
        })
    };

    let input_classes = "mt-1 block w-full p-3 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 transition duration-150";

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-[rgba(17,24,39,0.8)] flex items-center justify-center z-50 p-4 animate-fade-in">
                <div class="bg-white rounded-lg shadow-2xl w-full max-w-lg p-6 md:p-8 relative">
                    <button
                        class="cursor-pointer absolute top-4 right-4 text-gray-500 hover:text-gray-900 text-3xl font-bold transition-colors duration-200"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    <h2 class="text-2xl font-bold text-gray-800 mb-4 text-center">
                        "Events for \"" {memory_name.clone()} "\""
                    </h2>
                    <p class="text-gray-600 text-center mb-6">{memory_description.clone()}</p>

                    <Show when=move || !error.get().is_empty()>
                        <p class="text-red-600 bg-red-100 border border-red-300 rounded-md p-3 mb-4 text-center text-sm">
                            {move || error.get()}
                        </p>
                    </Show>

                    <form class="space-y-4 border-b pb-4 mb-4" on:submit=add_event.clone()>
                        <h3 class="text-lg font-semibold text-gray-700">"Add New Event"</h3>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Event Date " <span class="text-red-500">"*"</span>
                            </label>
                            <input
                                type="date"
                                class=input_classes
                                prop:value=move || event_date.get()
                                on:input=move |ev| set_event_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Description (Optional)"
                            </label>
                            <textarea
                                rows="2"
                                placeholder="e.g., Rode Space Mountain"
                                class=input_classes
                                prop:value=move || event_description.get()
                                on:input=move |ev| set_event_description.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class=format!(
                                "{} cursor-pointer w-full py-2 px-4 text-white font-semibold rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 transition duration-200 ease-in-out disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center",
                                color.button_classes(),
                            )
                            disabled=move || busy.get()
                        >
                            <Show when=move || busy.get()>
                                <Spinner/>
                            </Show>
                            "Add Event"
                        </button>
                    </form>

                    <h3 class="text-lg font-semibold text-gray-700 mb-3">"Timeline of Events"</h3>
                    {move || {
                        if loading_events.get() {
                            return view! {
                                <p class="text-center text-gray-500 mt-4">"Loading..."</p>
                            }
                                .into_any();
                        }
                        let events = events.get();
                        if events.is_empty() {
                            return view! {
                                <p class="text-center text-gray-600 mt-4">
                                    "No events recorded for this memory yet."
                                </p>
                            }
                                .into_any();
                        }

                        // Events arrive date-descending, so the first is the newest.
                        let newest_id = events.first().map(|e| e.id.clone());
                        let today = Utc::now().date_naive();
                        view! {
                            <div class="space-y-4 py-2 max-h-60 overflow-y-auto pr-2">
                                {events
                                    .into_iter()
                                    .map(|event| {
                                        let status = day_status(event.date.date_naive(), today);
                                        let is_newest = newest_id.as_deref() == Some(event.id.as_str());
                                        let highlight = if is_newest {
                                            "bg-green-100 border-green-500"
                                        } else {
                                            match status {
                                                DayStatus::Today => "bg-yellow-100 border-yellow-400",
                                                DayStatus::Past => {
                                                    "bg-gray-50 border-gray-300 text-gray-500"
                                                }
                                                DayStatus::Upcoming => "bg-blue-50 border-blue-300",
                                            }
                                        };
                                        let delete_target = event.clone();
                                        view! {
                                            <div class=format!(
                                                "border-l-4 p-3 rounded-md shadow-sm relative {}",
                                                highlight,
                                            )>
                                                <div class="flex justify-between items-center">
                                                    <p class="text-sm font-semibold">
                                                        {format_event_date(&event.date)}
                                                        <Show when=move || status == DayStatus::Today>
                                                            <span class="ml-2 text-xs font-bold text-yellow-700">
                                                                "(Today!)"
                                                            </span>
                                                        </Show>
                                                    </p>
                                                    <button
                                                        class="cursor-pointer text-red-500 hover:text-red-700 text-sm font-semibold"
                                                        on:click=move |_| {
                                                            set_event_to_delete.set(Some(delete_target.clone()));
                                                            set_delete_open.set(true);
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                                <Show when={
                                                    let has_description = !event.description.is_empty();
                                                    move || has_description
                                                }>
                                                    <p class="text-gray-700 text-sm mt-1">
                                                        {event.description.clone()}
                                                    </p>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                </div>

                <DeleteConfirmModal
                    open=delete_open.into()
                    target_name=Signal::derive(move || {
                        event_to_delete
                            .get()
                            .map(|e| {
                                if e.description.is_empty() {
                                    format_event_date(&e.date)
                                } else {
                                    e.description
                                }
                            })
                            .unwrap_or_else(|| "this event".to_string())
                    })
                    busy=deleting.into()
                    on_confirm=confirm_delete
                    on_close=Callback::new(move |_| {
                        set_delete_open.set(false);
                        set_event_to_delete.set(None);
                    })
                />
            </div>
        </Show>
    }
}
