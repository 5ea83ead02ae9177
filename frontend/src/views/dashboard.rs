use dioxus::prelude::*;
use stockroom_core::{inventory_dashboard, purchase_order_dashboard, Resource};

use super::{use_fetch, use_store};
use crate::api::AppStore;
use crate::components::format_money;

#[component]
pub fn Dashboard() -> Element {
    use_fetch(Resource::LowStock);
    let store = use_store();
    let backend_store = use_context::<AppStore>();

    let summaries = use_resource(move || {
        let store = backend_store.clone();
        async move {
            futures::join!(
                purchase_order_dashboard(store.backend()),
                inventory_dashboard(store.backend())
            )
        }
    });

    let low_stock = store.low_stock().len();

    rsx! {
        h1 { class: "text-2xl font-bold mb-6", "Dashboard" }

        match &*summaries.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading summaries..." } },
            Some((orders, stock)) => rsx! {
                div {
                    class: "grid grid-cols-2 gap-6",
                    match orders {
                        Ok(orders) => rsx! {
                            Card { title: "Purchase orders",
                                Stat { label: "Total", value: orders.total_orders.to_string() }
                                Stat { label: "Pending", value: orders.pending_orders.to_string() }
                                Stat { label: "Approved", value: orders.approved_orders.to_string() }
                                Stat { label: "Shipped", value: orders.shipped_orders.to_string() }
                                Stat { label: "This month", value: orders.monthly_orders.to_string() }
                                Stat { label: "Total amount", value: format_money(orders.total_amount) }
                            }
                        },
                        Err(e) => rsx! { Card { title: "Purchase orders", p { "{e}" } } },
                    }
                    match stock {
                        Ok(stock) => rsx! {
                            Card { title: "Inventory",
                                Stat { label: "Products", value: stock.total_products.to_string() }
                                Stat { label: "Low stock", value: stock.low_stock_products.to_string() }
                                Stat { label: "Stock value", value: format_money(stock.total_stock_value) }
                            }
                        },
                        Err(e) => rsx! { Card { title: "Inventory", p { "{e}" } } },
                    }
                }
            },
        }

        if low_stock > 0 {
            div {
                class: "mt-6 bg-yellow-50 border border-yellow-200 rounded p-4",
                "{low_stock} items are at or below their minimum stock level. "
                Link { to: "/inventory/low-stock", class: "underline", "Review" }
            }
        }
    }
}

#[component]
fn Card(title: &'static str, children: Element) -> Element {
    rsx! {
        section {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold mb-4", "{title}" }
            dl { class: "space-y-2", {children} }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between",
            dt { class: "text-gray-500", "{label}" }
            dd { class: "font-medium", "{value}" }
        }
    }
}
