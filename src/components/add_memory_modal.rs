//! Add Memory Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::Spinner;
use crate::context::{use_app_context, ThemeColor};
use crate::models::MemoryInput;
use crate::toast::use_toast;

#[component]
pub fn AddMemoryModal(
    open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    color: ThemeColor,
) -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let toast = use_toast();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        if name.get().trim().is_empty() {
            set_error.set("Memory Name is required.".to_string());
            return;
        }

        let input = MemoryInput {
            name: name.get(),
            description: description.get(),
        };

        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_memory(&input).await {
                Ok(()) => {
                    toast.success("Memory added successfully! 🎉");
                    ctx.reload();
                    set_name.set(String::new());
                    set_description.set(String::new());
                    on_close.run(());
                }
                Err(err) => {
                    let message = format!("Failed to add memory: {err}");
                    set_error.set(message.clone());
                    toast.error(message);
                }
            }
            set_busy.set(false);
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
                    <h2 class="text-2xl font-bold text-gray-800 mb-6 text-center">"Add New Memory"</h2>

                    <Show when=move || !error.get().is_empty()>
                        <p class="text-red-600 bg-red-100 border border-red-300 rounded-md p-3 mb-4 text-center text-sm">
                            {move || error.get()}
                        </p>
                    </Show>

                    <form class="space-y-4" on:submit=submit.clone()>
                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Memory Name " <span class="text-red-500">"*"</span>
                            </label>
                            <input
                                type="text"
                                placeholder="e.g., Disney Trip"
                                class=input_classes
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-700">
                                "Description (Optional)"
                            </label>
                            <textarea
                                rows="3"
                                placeholder="A brief description of this memory."
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
                            "Add Memory"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
