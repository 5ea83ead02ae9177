use crate::error::ApiError;
use crate::model::{InventoryDashboard, Product, PurchaseOrderDashboard, Supplier};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Read access to the REST API.
///
/// `path` is relative to the API root and starts with `/`, e.g.
/// `/suppliers/` or `/products/search/?q=bolt`. Implementations return the
/// decoded JSON body of a successful response.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn get(&self, path: &str) -> Result<Value, ApiError>;
}

impl<B: Backend> Backend for Arc<B> {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        (**self).get(path).await
    }
}

impl<B: Backend> Backend for &B {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        (**self).get(path).await
    }
}

pub async fn get_as<T, B>(backend: &B, path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Backend,
{
    let value = backend.get(path).await?;
    Ok(serde_json::from_value(value)?)
}

pub async fn purchase_order_dashboard<B: Backend>(
    backend: &B,
) -> Result<PurchaseOrderDashboard, ApiError> {
    get_as(backend, "/purchase-orders/dashboard/").await
}

pub async fn inventory_dashboard<B: Backend>(
    backend: &B,
) -> Result<InventoryDashboard, ApiError> {
    get_as(backend, "/inventory/dashboard/").await
}

/// Products at or below their minimum stock level.
pub async fn low_stock_products<B: Backend>(backend: &B) -> Result<Vec<Product>, ApiError> {
    get_as(backend, "/products/low_stock/").await
}

/// Name, contact person or phone containing `query`.
pub async fn search_suppliers<B: Backend>(
    backend: &B,
    query: &str,
) -> Result<Vec<Supplier>, ApiError> {
    get_as(backend, &search_path("/suppliers/search/", query)).await
}

/// Name, SKU or description containing `query`.
pub async fn search_products<B: Backend>(
    backend: &B,
    query: &str,
) -> Result<Vec<Product>, ApiError> {
    get_as(backend, &search_path("/products/search/", query)).await
}

fn search_path(endpoint: &str, query: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("{endpoint}?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    struct Recording {
        seen: Mutex<Vec<String>>,
        reply: Value,
    }

    impl Backend for Recording {
        async fn get(&self, path: &str) -> Result<Value, ApiError> {
            self.seen.lock().push(path.to_string());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn test_search_path_encoding() {
        assert_eq!(search_path("/products/search/", "m8 bolt"), "/products/search/?q=m8+bolt");
        assert_eq!(search_path("/suppliers/search/", "a&b"), "/suppliers/search/?q=a%26b");
    }

    #[tokio::test]
    async fn test_search_suppliers() {
        let backend = Recording {
            seen: Mutex::new(Vec::new()),
            reply: json!([{"id": 2, "name": "Bolt Co"}]),
        };
        let found = search_suppliers(&backend, "bolt").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bolt Co");
        assert_eq!(*backend.seen.lock(), vec!["/suppliers/search/?q=bolt".to_string()]);
    }

    #[tokio::test]
    async fn test_dashboard_shape_mismatch() {
        let backend = Recording {
            seen: Mutex::new(Vec::new()),
            reply: json!([1, 2, 3]),
        };
        let err = inventory_dashboard(&backend).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_arc_backend() {
        let backend = Arc::new(Recording {
            seen: Mutex::new(Vec::new()),
            reply: json!({
                "total_products": 4,
                "low_stock_products": 1,
                "total_stock_value": "120.00"
            }),
        });
        let dashboard = inventory_dashboard(&backend).await.unwrap();
        assert_eq!(dashboard.total_products, 4);
        assert_eq!(dashboard.total_stock_value, 120.0);
    }
}
