//! Application Root
//!
//! Wires up the shared contexts, restores the persisted session, and lays
//! out the router. All data views sit behind the auth guard; the login and
//! register pages stay public.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::api::Api;
use crate::components::{Navbar, RequireAuth};
use crate::config::FirebaseConfig;
use crate::context::{page_background_for_path, AppContext, AuthContext};
use crate::pages::{DashboardPage, InventoryPage, LoginPage, MemoriesPage, RegisterPage};
use crate::toast::{ToastContext, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    let api = Api::new(FirebaseConfig::from_env(), auth);

    provide_context(AppContext::new());
    provide_context(ToastContext::new());
    provide_context(auth);
    provide_context(api.clone());

    // Resolve the persisted session before anything renders behind the guard.
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            api.restore_session().await;
        });
    });

    view! {
        <Router>
            <Shell/>
        </Router>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let background = move || {
        format!(
            "min-h-screen pt-20 transition-colors duration-300 {}",
            page_background_for_path(&location.pathname.get()),
        )
    };

    view! {
        <Navbar/>
        <ToastHost/>
        <main class=background>
            <Routes fallback=|| {
                view! {
                    <p class="text-center text-2xl text-gray-500 py-20">"404 Not found . . ."</p>
                }
            }>
                <Route
                    path=path!("/")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=path!("/inventory")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <InventoryPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=path!("/memories")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <MemoriesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
            </Routes>
        </main>
    }
}
