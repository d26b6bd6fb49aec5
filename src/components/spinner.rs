//! Loading Indicators
//!
//! Button spinner, in-page loading placeholder, and the full-screen overlay
//! used while the stored session is being validated.

use leptos::prelude::*;

/// Small spinner shown inside busy buttons.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin -ml-1 mr-3 h-5 w-5 text-white"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"
            ></path>
        </svg>
    }
}

/// Centered placeholder while a view waits for its first snapshot.
#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="text-center py-8 text-gray-600">
            <div class="inline-block w-10 h-10 border-4 border-gray-300 border-t-blue-500 rounded-full animate-spin"></div>
            <p class="mt-3 animate-pulse">{label}</p>
        </div>
    }
}

/// Full-screen backdrop shown while the auth state is still unknown.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex flex-col items-center justify-center bg-black/60 backdrop-blur-sm z-[9999]">
            <div class="w-16 h-16 border-4 border-gray-400 border-t-white rounded-full animate-spin"></div>
            <p class="text-white mt-4 text-lg font-medium animate-pulse">"Loading ..."</p>
        </div>
    }
}
