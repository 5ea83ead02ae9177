//! Typed records for each collection the backend serves.
//!
//! Identity fields are required; everything else defaults when absent so a
//! trimmed-down payload still decodes. Decimal fields arrive as strings
//! (`"12.50"`) from the backend and are accepted as numbers too.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecordId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub category: Option<RecordId>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub supplier: Option<RecordId>,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub unit_price: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub min_stock_level: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Same threshold the backend's low-stock endpoints use.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.min_stock_level
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Shipped,
    Received,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Received => "Received",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Orders that still expect a delivery.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Approved | OrderStatus::Shipped
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub id: RecordId,
    #[serde(default)]
    pub purchase_order: Option<RecordId>,
    pub product: RecordId,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: RecordId,
    pub order_number: String,
    #[serde(default)]
    pub supplier: Option<RecordId>,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub expected_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub status_display: String,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_by: Option<RecordId>,
    #[serde(default)]
    pub created_by_name: String,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub product: RecordId,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub reserved_stock: i64,
    #[serde(default)]
    pub available_stock: i64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn is_depleted(&self) -> bool {
        self.available_stock <= 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDashboard {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub approved_orders: u64,
    #[serde(default)]
    pub shipped_orders: u64,
    #[serde(default)]
    pub monthly_orders: u64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub total_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDashboard {
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub low_stock_products: u64,
    #[serde(default, deserialize_with = "decimal::deserialize")]
    pub total_stock_value: f64,
}

mod decimal {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}
