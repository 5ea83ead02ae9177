use dioxus::prelude::*;
use stockroom_core::OrderStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<String>,
    /// Edit route for the record, when the resource has one.
    pub href: Option<String>,
}

#[component]
pub fn Table(headers: Vec<&'static str>, rows: Vec<Row>, empty: &'static str) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "text-gray-500 py-8 text-center", "{empty}" }
        };
    }

    rsx! {
        table {
            class: "min-w-full divide-y divide-gray-200",
            thead {
                tr {
                    for header in headers.iter() {
                        th { class: "px-4 py-2 text-left text-sm font-semibold", "{header}" }
                    }
                    th {}
                }
            }
            tbody {
                for row in rows {
                    tr {
                        for cell in row.cells {
                            td { class: "px-4 py-2 text-sm", "{cell}" }
                        }
                        td {
                            if let Some(href) = row.href {
                                Link { to: href, class: "text-blue-600 hover:underline", "Edit" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> Element {
    let color = match status {
        OrderStatus::Pending => "bg-yellow-100 text-yellow-800",
        OrderStatus::Approved => "bg-blue-100 text-blue-800",
        OrderStatus::Shipped => "bg-indigo-100 text-indigo-800",
        OrderStatus::Received => "bg-green-100 text-green-800",
        OrderStatus::Cancelled => "bg-gray-100 text-gray-600",
    };

    rsx! {
        span { class: "px-2 py-1 rounded text-xs font-medium {color}", "{status}" }
    }
}

pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
