//! Router table and resource store behind the Stockroom inventory front end.
//!
//! The [`router`] maps URL paths to named views. The [`Store`] fetches each
//! collection through a [`Backend`] and keeps what came back, along with
//! which requests are in flight and the last failure message.

pub mod backend;
#[cfg(feature = "http")]
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod resource;
pub mod router;
pub mod store;

pub use backend::{
    get_as, inventory_dashboard, low_stock_products, purchase_order_dashboard, search_products,
    search_suppliers, Backend,
};
#[cfg(feature = "http")]
pub use client::HttpBackend;
pub use config::ApiConfig;
pub use error::ApiError;
pub use model::{
    Category, InventoryDashboard, InventoryItem, OrderStatus, Product, PurchaseOrder,
    PurchaseOrderDashboard, PurchaseOrderItem, RecordId, Supplier,
};
pub use resource::Resource;
pub use router::{href, resolve, routes, RouteDef, RouteMatch, Target, View};
pub use store::{FetchFailure, State, Store};
