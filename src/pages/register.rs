//! Register Page
//!
//! New-account form with live validation: the password rules show as a
//! checklist that updates while typing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::components::Spinner;
use crate::context::{use_auth, AuthState};
use crate::firebase::auth::describe_auth_error;
use crate::firebase::error::FirebaseError;
use crate::validate::{email_error, name_error, password_failures};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let password_checks = Memo::new(move |_| password_failures(&password.get()));

    let submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error.set(String::new());

            let name_value = name.get_untracked();
            let email_value = email.get_untracked();
            if let Some(message) = name_error(&name_value) {
                set_error.set(message.to_string());
                return;
            }
            if let Some(message) = email_error(&email_value) {
                set_error.set(message.to_string());
                return;
            }
            if !password_checks.get_untracked().is_empty() {
                set_error.set("Password does not meet the requirements.".to_string());
                return;
            }

            set_busy.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api
                    .register(
                        name_value.trim(),
                        email_value.trim(),
                        &password.get_untracked(),
                    )
                    .await;
                match result {
                    Ok(()) => navigate("/", Default::default()),
                    Err(FirebaseError::Api { message, .. }) => {
                        set_error.set(describe_auth_error(&message))
                    }
                    Err(err) => set_error.set(err.to_string()),
                }
                set_busy.set(false);
            });
        }
    };

    let auth_state = auth.state();
    let input_classes = "mt-1 block w-full p-3 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 transition duration-150";

    view! {
        {move || {
            matches!(auth_state.get(), AuthState::SignedIn(_))
                .then(|| view! { <Redirect path="/"/> })
        }}
        <div class="min-h-screen flex items-center justify-center px-4 py-12">
            <div class="bg-white rounded-lg shadow-2xl w-full max-w-md p-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-6 text-center">
                    "Create an Account"
                </h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="text-red-600 bg-red-100 border border-red-300 rounded-md p-3 mb-4 text-center text-sm">
                        {move || error.get()}
                    </p>
                </Show>

                <form class="space-y-4" on:submit=submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Display Name"</label>
                        <input
                            type="text"
                            placeholder="Your name"
                            class=input_classes
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            class=input_classes
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">"Password"</label>
                        <input
                            type="password"
                            placeholder="••••••••"
                            class=input_classes
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <Show when=move || !password.get().is_empty()>
                            <ul class="mt-2 text-sm space-y-1">
                                {move || {
                                    let failures = password_checks.get();
                                    [
                                        "At least 6 characters long",
                                        "At least one uppercase letter",
                                        "At least one number",
                                    ]
                                        .into_iter()
                                        .map(|rule| {
                                            let failed = failures.contains(&rule);
                                            view! {
                                                <li class=if failed {
                                                    "text-red-500"
                                                } else {
                                                    "text-green-600"
                                                }>
                                                    {if failed { "✗ " } else { "✓ " }}
                                                    {rule}
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </div>
                    <button
                        type="submit"
                        class="cursor-pointer w-full py-3 px-4 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transition duration-200 ease-in-out disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center"
                        disabled=move || busy.get()
                    >
                        <Show when=move || busy.get()>
                            <Spinner/>
                        </Show>
                        "Register"
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600 mt-6">
                    "Already have an account? "
                    <a href="/login" class="text-blue-600 hover:underline font-semibold">
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
