use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A collection the store knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    Suppliers,
    Categories,
    Products,
    PurchaseOrders,
    Inventory,
    LowStock,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Suppliers,
        Resource::Categories,
        Resource::Products,
        Resource::PurchaseOrders,
        Resource::Inventory,
        Resource::LowStock,
    ];

    /// Collection endpoint, relative to the API base URL.
    pub fn endpoint(self) -> &'static str {
        match self {
            Resource::Suppliers => "/suppliers/",
            Resource::Categories => "/categories/",
            Resource::Products => "/products/",
            Resource::PurchaseOrders => "/purchase-orders/",
            Resource::Inventory => "/inventory/",
            Resource::LowStock => "/inventory/low_stock/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Suppliers => "suppliers",
            Resource::Categories => "categories",
            Resource::Products => "products",
            Resource::PurchaseOrders => "purchase-orders",
            Resource::Inventory => "inventory",
            Resource::LowStock => "low-stock",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == normalized)
            .or(match normalized.as_str() {
                "orders" | "purchaseorders" => Some(Resource::PurchaseOrders),
                "lowstock" => Some(Resource::LowStock),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown resource: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Resource::Suppliers.endpoint(), "/suppliers/");
        assert_eq!(Resource::PurchaseOrders.endpoint(), "/purchase-orders/");
        assert_eq!(Resource::LowStock.endpoint(), "/inventory/low_stock/");
    }

    #[test]
    fn test_parse() {
        assert_eq!("purchase_orders".parse::<Resource>(), Ok(Resource::PurchaseOrders));
        assert_eq!("Inventory".parse::<Resource>(), Ok(Resource::Inventory));
        assert_eq!("orders".parse::<Resource>(), Ok(Resource::PurchaseOrders));
        assert!("widgets".parse::<Resource>().is_err());
    }
}
