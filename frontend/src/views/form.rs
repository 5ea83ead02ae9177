use dioxus::prelude::*;
use stockroom_core::{Resource, View};

use super::{use_fetch, use_store};
use crate::components::{format_money, format_optional, StatusBadge};

/// Read-only record card for the add and edit routes.
#[component]
pub fn RecordForm(view: View, #[props(!optional)] id: Option<String>) -> Element {
    let resource = view.resource().unwrap_or(Resource::Suppliers);
    use_fetch(resource);
    let store = use_store();
    let back = resource.endpoint().trim_end_matches('/').to_string();

    let Some(raw) = id else {
        return rsx! {
            Card { title: format!("New {}", view.title()), back,
                p { class: "text-gray-500", "Records are created through the inventory API." }
            }
        };
    };

    let Ok(id) = raw.parse::<u64>() else {
        return rsx! {
            Card { title: view.title().to_string(), back,
                p { class: "text-red-700", "\"{raw}\" is not a record id." }
            }
        };
    };

    let fields: Option<Vec<(&'static str, String)>> = match view {
        View::SupplierForm => store.suppliers().into_iter().find(|s| s.id == id).map(|s| {
            vec![
                ("Name", s.name),
                ("Contact", s.contact_person),
                ("Phone", s.phone),
                ("Email", s.email),
                ("Address", s.address),
            ]
        }),
        View::ProductForm => store.products().into_iter().find(|p| p.id == id).map(|p| {
            vec![
                ("SKU", p.sku.clone()),
                ("Name", p.name.clone()),
                ("Category", p.category_name.clone()),
                ("Supplier", p.supplier_name.clone()),
                ("Unit price", format_money(p.unit_price)),
                ("Stock", p.stock_quantity.to_string()),
                ("Minimum stock", p.min_stock_level.to_string()),
                ("Description", p.description),
            ]
        }),
        View::PurchaseOrderForm => {
            return rsx! { OrderCard { id, back } };
        }
        _ => None,
    };

    let title = format!("{} #{id}", view.title());
    rsx! {
        Card { title, back,
            match fields {
                Some(fields) => rsx! { Fields { fields } },
                None if store.is_loading(resource) => rsx! { p { class: "text-gray-500", "Loading..." } },
                None => rsx! { p { class: "text-gray-500", "No record with id {id}." } },
            }
        }
    }
}

#[component]
fn OrderCard(id: u64, back: String) -> Element {
    let store = use_store();
    let order = store.purchase_orders().into_iter().find(|o| o.id == id);

    let Some(order) = order else {
        return rsx! {
            Card { title: format!("Purchase Order #{id}"), back,
                if store.is_loading(Resource::PurchaseOrders) {
                    p { class: "text-gray-500", "Loading..." }
                } else {
                    p { class: "text-gray-500", "No record with id {id}." }
                }
            }
        };
    };

    let fields = vec![
        ("Supplier", order.supplier_name.clone()),
        ("Ordered", format_optional(order.order_date)),
        ("Expected", format_optional(order.expected_delivery_date)),
        ("Created by", order.created_by_name.clone()),
        ("Total", format_money(order.total_amount)),
        ("Notes", order.notes.clone()),
    ];

    rsx! {
        Card { title: format!("Purchase Order {}", order.order_number), back,
            div { class: "mb-4", StatusBadge { status: order.status } }
            Fields { fields }
            if !order.items.is_empty() {
                h3 { class: "font-semibold mt-6 mb-2", "Items" }
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    tbody {
                        for item in order.items.iter() {
                            tr {
                                td { class: "px-4 py-2 text-sm", "{item.product_sku}" }
                                td { class: "px-4 py-2 text-sm", "{item.product_name}" }
                                td { class: "px-4 py-2 text-sm", "{item.quantity}" }
                                td { class: "px-4 py-2 text-sm", {format_money(item.unit_price)} }
                                td { class: "px-4 py-2 text-sm", {format_money(item.total_price)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Card(title: String, back: String, children: Element) -> Element {
    rsx! {
        section {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 max-w-2xl",
            div {
                class: "flex items-center justify-between mb-4",
                h1 { class: "text-2xl font-bold", "{title}" }
                Link { to: back, class: "text-blue-600 hover:underline", "Back to list" }
            }
            {children}
        }
    }
}

#[component]
fn Fields(fields: Vec<(&'static str, String)>) -> Element {
    rsx! {
        dl {
            class: "grid grid-cols-3 gap-y-2",
            for (label, value) in fields {
                dt { class: "text-gray-500", "{label}" }
                dd { class: "col-span-2", "{value}" }
            }
        }
    }
}
