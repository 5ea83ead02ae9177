use dioxus::prelude::*;
use stockroom_core::{resolve, View};

use super::dashboard::Dashboard;
use super::form::RecordForm;
use super::lists::{
    CategoryList, InventoryList, LowStockList, ProductList, PurchaseOrderList, SupplierList,
};

#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    let Some(matched) = resolve(&path) else {
        return rsx! { NotFound { path } };
    };

    let id = matched.param("id").map(str::to_string);
    let body = match matched.view {
        View::Dashboard => rsx! { Dashboard {} },
        View::SupplierList => rsx! { SupplierList {} },
        View::ProductList => rsx! { ProductList {} },
        View::CategoryList => rsx! { CategoryList {} },
        View::PurchaseOrderList => rsx! { PurchaseOrderList {} },
        View::InventoryList => rsx! { InventoryList {} },
        View::LowStockList => rsx! { LowStockList {} },
        View::SupplierForm | View::ProductForm | View::PurchaseOrderForm => {
            rsx! { RecordForm { key: "{path}", view: matched.view, id } }
        }
    };

    rsx! {
        if matched.redirected_from.is_some() {
            Redirect { to: matched.path.clone() }
        }
        {body}
    }
}

/// Swap the address bar to `to` once mounted.
#[component]
fn Redirect(to: String) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        navigator.replace(to.clone());
    });
    rsx! {}
}

#[component]
fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-gray-500 mt-2", "Nothing lives at {path}." }
            Link {
                to: "/dashboard",
                class: "text-blue-600 hover:underline",
                "Back to the dashboard"
            }
        }
    }
}
