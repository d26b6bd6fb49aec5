//! Dashboard Page

use leptos::prelude::*;

use crate::components::Dashboard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-4xl font-extrabold text-gray-800 mb-2 text-center">
                "Overview & Analytics"
            </h1>
            <p class="text-center text-gray-600 mb-8">
                "A live summary of everything in stock."
            </p>
            <Dashboard/>
        </div>
    }
}
