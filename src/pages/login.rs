//! Login Page
//!
//! Email/password sign-in plus the Google redirect flow. Returning from
//! Google lands back here with the ID token in the URL fragment, which is
//! exchanged for a session on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::api::use_api;
use crate::components::Spinner;
use crate::context::{use_auth, AuthState};
use crate::firebase::auth::{describe_auth_error, fragment_param, google_oauth_url};
use crate::firebase::error::FirebaseError;

fn readable_auth_error(err: &FirebaseError) -> String {
    match err {
        FirebaseError::Api { message, .. } => describe_auth_error(message),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (google_busy, set_google_busy) = signal(false);

    // Finish the Google redirect flow if we arrived with a token fragment.
    {
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let hash = window.location().hash().unwrap_or_default();
            let Some(token) = fragment_param(&hash, "id_token") else {
                return;
            };
            let _ = window.location().set_hash("");
            set_google_busy.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api.sign_in_with_google(&token).await {
                    Ok(()) => navigate("/", Default::default()),
                    Err(err) => set_error.set(readable_auth_error(&err)),
                }
                set_google_busy.set(false);
            });
        });
    }

    let submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error.set(String::new());
            set_busy.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api.sign_in(email.get_untracked().trim(), &password.get_untracked()).await {
                    Ok(()) => navigate("/", Default::default()),
                    Err(err) => set_error.set(readable_auth_error(&err)),
                }
                set_busy.set(false);
            });
        }
    };

    let google_sign_in = {
        let api = api.clone();
        move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let origin = window.location().origin().unwrap_or_default();
            let nonce = format!("{}", js_sys::Date::now() as u64);
            let url = google_oauth_url(
                api.config.google_client_id,
                &format!("{origin}/login"),
                &nonce,
            );
            let _ = window.location().set_href(&url);
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
                <h1 class="text-3xl font-bold text-gray-800 mb-6 text-center">"Welcome Back"</h1>

                <Show when=move || !error.get().is_empty()>
                    <p class="text-red-600 bg-red-100 border border-red-300 rounded-md p-3 mb-4 text-center text-sm">
                        {move || error.get()}
                    </p>
                </Show>

                <form class="space-y-4" on:submit=submit>
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
                    </div>
                    <button
                        type="submit"
                        class="cursor-pointer w-full py-3 px-4 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transition duration-200 ease-in-out disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center"
                        disabled=move || busy.get() || google_busy.get()
                    >
                        <Show when=move || busy.get()>
                            <Spinner/>
                        </Show>
                        "Sign In"
                    </button>
                </form>

                <div class="flex items-center my-6">
                    <div class="flex-grow border-t border-gray-300"></div>
                    <span class="mx-4 text-gray-400 text-sm">"or"</span>
                    <div class="flex-grow border-t border-gray-300"></div>
                </div>

                <button
                    class="cursor-pointer w-full py-3 px-4 bg-white border border-gray-300 text-gray-700 font-semibold rounded-md hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-gray-300 focus:ring-offset-2 transition duration-200 ease-in-out disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2"
                    disabled=move || busy.get() || google_busy.get()
                    on:click=google_sign_in.clone()
                >
                    {move || if google_busy.get() { "Signing in..." } else { "Continue with Google" }}
                </button>

                <p class="text-center text-sm text-gray-600 mt-6">
                    "Don't have an account? "
                    <a href="/register" class="text-blue-600 hover:underline font-semibold">
                        "Register"
                    </a>
                </p>
            </div>
        </div>
    }
}
