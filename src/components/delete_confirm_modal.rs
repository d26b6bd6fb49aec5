//! Delete Confirmation Modal
//!
//! Shared name-echoing confirm dialog used by the inventory list, the
//! memories page, and the event timeline.

use leptos::prelude::*;

use crate::components::Spinner;

#[component]
pub fn DeleteConfirmModal(
    open: Signal<bool>,
    /// Name of the thing about to be deleted, echoed in the prompt.
    #[prop(into)] target_name: Signal<String>,
    busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-[rgba(17,24,39,0.8)] flex items-center justify-center z-50 p-4 animate-fade-in">
                <div class="bg-white rounded-lg shadow-2xl w-full max-w-sm p-6 relative">
                    <h2 class="text-xl font-bold text-gray-800 mb-4 text-center">"Confirm Deletion"</h2>
                    <p class="text-gray-700 text-center mb-6">
                        "Are you sure you want to delete \"" {move || target_name.get()} "\"? "
                        "This cannot be undone."
                    </p>
                    <div class="flex justify-center space-x-4">
                        <button
                            class="cursor-pointer px-5 py-2 bg-gray-200 text-gray-800 rounded-md hover:bg-gray-300 transition duration-200"
                            disabled=move || busy.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="cursor-pointer px-5 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition duration-200 disabled:opacity-50 flex items-center"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            <Show when=move || busy.get()>
                                <Spinner/>
                            </Show>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
