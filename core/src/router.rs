//! Path table for the front end.
//!
//! The table is plain data; [`resolve`] walks it in order and the first
//! pattern that fits wins. Patterns are `/`-separated literals with `:name`
//! segments binding one path segment each. Literals ignore ASCII case and
//! bound values are percent-decoded.

use crate::model::RecordId;
use crate::resource::Resource;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::collections::BTreeMap;

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Dashboard,
    SupplierList,
    SupplierForm,
    ProductList,
    ProductForm,
    CategoryList,
    PurchaseOrderList,
    PurchaseOrderForm,
    InventoryList,
    LowStockList,
}

impl View {
    /// Collection the view reads from the store, if any.
    pub fn resource(self) -> Option<Resource> {
        match self {
            View::Dashboard => None,
            View::SupplierList | View::SupplierForm => Some(Resource::Suppliers),
            View::ProductList | View::ProductForm => Some(Resource::Products),
            View::CategoryList => Some(Resource::Categories),
            View::PurchaseOrderList | View::PurchaseOrderForm => Some(Resource::PurchaseOrders),
            View::InventoryList => Some(Resource::Inventory),
            View::LowStockList => Some(Resource::LowStock),
        }
    }

    pub fn is_form(self) -> bool {
        matches!(
            self,
            View::SupplierForm | View::ProductForm | View::PurchaseOrderForm
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::SupplierList => "Suppliers",
            View::SupplierForm => "Supplier",
            View::ProductList => "Products",
            View::ProductForm => "Product",
            View::CategoryList => "Categories",
            View::PurchaseOrderList => "Purchase Orders",
            View::PurchaseOrderForm => "Purchase Order",
            View::InventoryList => "Inventory",
            View::LowStockList => "Low Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View { name: &'static str, view: View },
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub target: Target,
}

const fn view(path: &'static str, name: &'static str, view: View) -> RouteDef {
    RouteDef {
        path,
        target: Target::View { name, view },
    }
}

static ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        target: Target::Redirect("/dashboard"),
    },
    view("/dashboard", "Dashboard", View::Dashboard),
    view("/suppliers", "SupplierList", View::SupplierList),
    view("/suppliers/add", "SupplierAdd", View::SupplierForm),
    view("/suppliers/edit/:id", "SupplierEdit", View::SupplierForm),
    view("/products", "ProductList", View::ProductList),
    view("/products/add", "ProductAdd", View::ProductForm),
    view("/products/edit/:id", "ProductEdit", View::ProductForm),
    view("/categories", "CategoryList", View::CategoryList),
    view("/purchase-orders", "PurchaseOrderList", View::PurchaseOrderList),
    view("/purchase-orders/add", "PurchaseOrderAdd", View::PurchaseOrderForm),
    view("/purchase-orders/edit/:id", "PurchaseOrderEdit", View::PurchaseOrderForm),
    view("/inventory", "InventoryList", View::InventoryList),
    view("/inventory/low-stock", "LowStockList", View::LowStockList),
];

pub fn routes() -> &'static [RouteDef] {
    ROUTES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub name: &'static str,
    pub view: View,
    /// Normalized path of the matched route, after any redirect.
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub redirected_from: Option<String>,
}

impl RouteMatch {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The `:id` segment as a backend record id.
    pub fn record_id(&self) -> Option<RecordId> {
        self.param("id")?.parse().ok()
    }
}

/// Resolve a location (path, optionally with query/fragment) to a view.
pub fn resolve(location: &str) -> Option<RouteMatch> {
    let original = normalize(location);
    let mut current = original.clone();

    for _ in 0..=MAX_REDIRECTS {
        let segments = split(&current);
        let (def, params) = ROUTES
            .iter()
            .find_map(|def| match_pattern(def.path, &segments).map(|p| (def, p)))?;

        match def.target {
            Target::Redirect(to) => current = normalize(to),
            Target::View { name, view } => {
                let redirected_from = (current != original).then_some(original);
                return Some(RouteMatch {
                    name,
                    view,
                    path: current,
                    params,
                    redirected_from,
                });
            }
        }
    }

    tracing::warn!(path = %original, "redirect limit reached");
    None
}

/// Build the path of a named route, filling its `:param` segments.
pub fn href(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let def = ROUTES
        .iter()
        .find(|def| matches!(def.target, Target::View { name: n, .. } if n == name))?;

    let mut out = String::new();
    for segment in split(def.path) {
        let value = match segment.strip_prefix(':') {
            Some(key) => params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .filter(|v| !v.is_empty() && !v.contains('/'))?,
            None => segment,
        };
        out.push('/');
        out.push_str(value);
    }

    if out.is_empty() {
        out.push('/');
    }
    Some(out)
}

fn normalize(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let joined = split(path).join("/");
    format!("/{joined}")
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let parts = split(pattern);
    if parts.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (part, segment) in parts.iter().zip(segments) {
        match part.strip_prefix(':') {
            Some(key) => {
                let value = percent_decode_str(segment).decode_utf8_lossy();
                params.insert(key.to_string(), value.into_owned());
            }
            None if part.eq_ignore_ascii_case(segment) => {}
            None => return None,
        }
    }
    Some(params)
}
