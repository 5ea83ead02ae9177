use dioxus::prelude::*;
use crate::Route;
use super::use_store;

const NAV: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/suppliers", "Suppliers"),
    ("/products", "Products"),
    ("/categories", "Categories"),
    ("/purchase-orders", "Purchase Orders"),
    ("/inventory", "Inventory"),
    ("/inventory/low-stock", "Low Stock"),
];

#[component]
pub fn Layout() -> Element {
    let store = use_store();
    let dismiss = store.clone();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            header {
                class: "bg-gray-900 text-white",
                nav {
                    class: "max-w-7xl mx-auto px-4 flex items-center gap-6 h-14",
                    span { class: "font-bold", "Stockroom" }
                    for (to, label) in NAV.iter() {
                        Link { to: *to, class: "text-sm hover:text-gray-300", "{label}" }
                    }
                    if store.loading() {
                        span { class: "ml-auto text-xs animate-pulse", "Loading..." }
                    }
                }
            }

            if let Some(message) = store.error() {
                div {
                    class: "bg-red-50 border-b border-red-200 text-red-800 px-4 py-2 flex justify-between",
                    span { "{message}" }
                    button {
                        class: "text-sm underline",
                        onclick: move |_| dismiss.dismiss_error(),
                        "Dismiss"
                    }
                }
            }

            main {
                class: "max-w-7xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
