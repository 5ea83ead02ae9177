use dioxus::prelude::*;
use stockroom_core::{href, InventoryItem, Resource};

use super::{use_fetch, use_store};
use crate::components::{format_money, format_optional, Row, StatusBadge, Table};

#[component]
fn ListHeader(title: &'static str, #[props(!optional)] add: Option<&'static str>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between mb-4",
            h1 { class: "text-2xl font-bold", "{title}" }
            if let Some(to) = add {
                Link { to: to, class: "px-3 py-2 bg-blue-600 text-white rounded", "Add" }
            }
        }
    }
}

fn edit_link(route: &str, id: u64) -> Option<String> {
    href(route, &[("id", &id.to_string())])
}

#[component]
pub fn SupplierList() -> Element {
    use_fetch(Resource::Suppliers);
    let store = use_store();

    let rows = store
        .suppliers()
        .into_iter()
        .map(|s| Row {
            href: edit_link("SupplierEdit", s.id),
            cells: vec![s.name, s.contact_person, s.phone, s.email],
        })
        .collect::<Vec<_>>();

    rsx! {
        ListHeader { title: "Suppliers", add: Some("/suppliers/add") }
        Table {
            headers: vec!["Name", "Contact", "Phone", "Email"],
            rows,
            empty: "No suppliers yet.",
        }
    }
}

#[component]
pub fn ProductList() -> Element {
    use_fetch(Resource::Products);
    let store = use_store();

    let rows = store
        .products()
        .into_iter()
        .map(|p| Row {
            href: edit_link("ProductEdit", p.id),
            cells: vec![
                p.sku.clone(),
                p.name.clone(),
                p.category_name.clone(),
                p.supplier_name.clone(),
                format_money(p.unit_price),
                if p.is_low_stock() {
                    format!("{} (low)", p.stock_quantity)
                } else {
                    p.stock_quantity.to_string()
                },
            ],
        })
        .collect::<Vec<_>>();

    rsx! {
        ListHeader { title: "Products", add: Some("/products/add") }
        Table {
            headers: vec!["SKU", "Name", "Category", "Supplier", "Unit price", "Stock"],
            rows,
            empty: "No products yet.",
        }
    }
}

#[component]
pub fn CategoryList() -> Element {
    use_fetch(Resource::Categories);
    let store = use_store();

    let rows = store
        .categories()
        .into_iter()
        .map(|c| Row {
            href: None,
            cells: vec![c.name, c.description],
        })
        .collect::<Vec<_>>();

    rsx! {
        ListHeader { title: "Categories", add: None }
        Table {
            headers: vec!["Name", "Description"],
            rows,
            empty: "No categories yet.",
        }
    }
}

#[component]
pub fn PurchaseOrderList() -> Element {
    use_fetch(Resource::PurchaseOrders);
    let store = use_store();
    let orders = store.purchase_orders();

    rsx! {
        ListHeader { title: "Purchase Orders", add: Some("/purchase-orders/add") }
        if orders.is_empty() {
            p { class: "text-gray-500 py-8 text-center", "No purchase orders yet." }
        } else {
            table {
                class: "min-w-full divide-y divide-gray-200",
                thead {
                    tr {
                        for header in ["Order", "Supplier", "Ordered", "Expected", "Status", "Total", ""] {
                            th { class: "px-4 py-2 text-left text-sm font-semibold", "{header}" }
                        }
                    }
                }
                tbody {
                    for order in orders {
                        tr {
                            td { class: "px-4 py-2 text-sm", "{order.order_number}" }
                            td { class: "px-4 py-2 text-sm", "{order.supplier_name}" }
                            td { class: "px-4 py-2 text-sm", {format_optional(order.order_date)} }
                            td { class: "px-4 py-2 text-sm", {format_optional(order.expected_delivery_date)} }
                            td { class: "px-4 py-2 text-sm", StatusBadge { status: order.status } }
                            td { class: "px-4 py-2 text-sm", {format_money(order.total_amount)} }
                            td {
                                if let Some(to) = edit_link("PurchaseOrderEdit", order.id) {
                                    Link { to: to, class: "text-blue-600 hover:underline", "Edit" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn stock_rows(items: Vec<InventoryItem>) -> Vec<Row> {
    items
        .into_iter()
        .map(|i| Row {
            href: None,
            cells: vec![
                i.product_sku,
                i.product_name,
                i.current_stock.to_string(),
                i.reserved_stock.to_string(),
                i.available_stock.to_string(),
                format_optional(i.last_updated.map(|t| t.format("%Y-%m-%d %H:%M"))),
            ],
        })
        .collect()
}

const STOCK_HEADERS: [&str; 6] = ["SKU", "Product", "Current", "Reserved", "Available", "Updated"];

#[component]
pub fn InventoryList() -> Element {
    use_fetch(Resource::Inventory);
    let store = use_store();

    rsx! {
        ListHeader { title: "Inventory", add: None }
        Table {
            headers: STOCK_HEADERS.to_vec(),
            rows: stock_rows(store.inventory()),
            empty: "No inventory records yet.",
        }
    }
}

#[component]
pub fn LowStockList() -> Element {
    use_fetch(Resource::LowStock);
    let store = use_store();

    rsx! {
        ListHeader { title: "Low Stock", add: None }
        Table {
            headers: STOCK_HEADERS.to_vec(),
            rows: stock_rows(store.low_stock()),
            empty: "Every item is above its minimum stock level.",
        }
    }
}
