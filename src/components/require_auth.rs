//! Route Guard
//!
//! Wraps protected routes. While the restored session is still being
//! validated the guard shows the full-screen loader; once the state is
//! known, signed-out visitors are redirected to the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::LoadingOverlay;
use crate::context::{use_auth, AuthState};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    view! {
        {move || match state.get() {
            AuthState::Unknown => view! { <LoadingOverlay/> }.into_any(),
            AuthState::SignedOut => view! { <Redirect path="/login"/> }.into_any(),
            AuthState::SignedIn(_) => children().into_any(),
        }}
    }
}
