//! Navbar Component
//!
//! Fixed top navigation: brand, the three section links with per-section
//! active colors, the signed-in user's name, and sign-out. Collapses behind
//! a hamburger on small screens.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::use_api;
use crate::context::{use_app_context, use_auth, AuthState};

#[component]
pub fn Navbar() -> impl IntoView {
    let api = use_api();
    let ctx = use_app_context();
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);

    let auth_state = auth.state();
    let signed_in = move || matches!(auth_state.get(), AuthState::SignedIn(_));
    let display_name = move || match auth_state.get() {
        AuthState::SignedIn(session) => Some(session.display_label().to_string()),
        _ => None,
    };

    const NORMAL_LINK: &str =
        "text-gray-300 hover:bg-gray-700 hover:text-white px-3 py-2 rounded-md";

    let pathname = location.pathname;
    let link_classes = move |path: &'static str| {
        let active = pathname.get() == path;
        if !active {
            return NORMAL_LINK.to_string();
        }
        let theme = ctx.theme.get();
        let color = match path {
            "/inventory" => theme.inventory_color(),
            "/memories" => theme.memories_color(),
            _ => theme.dashboard_color(),
        };
        color.menu_classes().to_string()
    };

    let sign_out = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |_| {
            api.sign_out();
            set_menu_open.set(false);
            navigate("/login", Default::default());
        }
    };

    view! {
        <nav class="fixed top-0 left-0 w-full bg-gray-800 p-4 shadow-lg z-50">
            <div class="container mx-auto flex items-center justify-between flex-wrap">
                <a
                    href="/"
                    class="text-2xl font-bold text-white mr-6 flex items-center gap-2"
                    on:click=move |_| set_menu_open.set(false)
                >
                    <span>"StockPilot"</span>
                    <span class="text-3xl">"🛩️"</span>
                </a>

                <div class="block lg:hidden">
                    <button
                        class="flex items-center px-3 py-2 border-2 rounded text-gray-200 border-gray-400 hover:text-white hover:border-white"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                <div class=move || {
                    format!(
                        "{} w-full lg:flex lg:items-center lg:w-auto",
                        if menu_open.get() { "block" } else { "hidden" },
                    )
                }>
                    <Show when=signed_in>
                        <div class="text-sm lg:flex-grow lg:flex lg:space-x-2 mt-4 lg:mt-0 space-y-2 lg:space-y-0">
                            <a
                                href="/"
                                class=move || link_classes("/")
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Dashboard"
                            </a>
                            <a
                                href="/inventory"
                                class=move || link_classes("/inventory")
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Inventory"
                            </a>
                            <a
                                href="/memories"
                                class=move || link_classes("/memories")
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Memories"
                            </a>
                        </div>
                    </Show>

                    <div class="mt-4 lg:mt-0 flex items-center space-x-3">
                        {move || {
                            display_name()
                                .map(|name| {
                                    view! {
                                        <span class="text-gray-300 text-sm">{name}</span>
                                    }
                                })
                        }}
                        <Show when=signed_in>
                            <button
                                class="cursor-pointer text-sm px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 transition duration-200"
                                on:click=sign_out.clone()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}
