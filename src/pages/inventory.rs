//! Inventory Page

use leptos::prelude::*;

use crate::components::StockList;

#[component]
pub fn InventoryPage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="bg-white rounded-lg shadow-xl p-6 md:p-8">
                <StockList/>
            </div>
        </div>
    }
}
