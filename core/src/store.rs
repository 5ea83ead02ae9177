//! Resource store shared by the views.
//!
//! One [`Store`] is constructed at startup and handed to whoever renders.
//! Each fetch action marks its resource in flight, asks the backend for the
//! collection, commits either the records or the failure message, and
//! clears the in-flight mark last. Nothing is returned to the caller; the
//! outcome is read back through the getters.

use crate::backend::{get_as, Backend};
use crate::model::{Category, InventoryItem, Product, PurchaseOrder, Supplier};
use crate::resource::Resource;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub resource: Resource,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct State {
    pub suppliers: Vec<Supplier>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub inventory: Vec<InventoryItem>,
    pub low_stock: Vec<InventoryItem>,
    /// Requests currently awaiting the backend, per resource.
    pub in_flight: BTreeMap<Resource, usize>,
    pub error: Option<FetchFailure>,
}

impl State {
    pub fn loading(&self) -> bool {
        self.in_flight.values().any(|n| *n > 0)
    }

    pub fn is_loading(&self, resource: Resource) -> bool {
        self.in_flight.get(&resource).is_some_and(|n| *n > 0)
    }

    pub fn count(&self, resource: Resource) -> usize {
        match resource {
            Resource::Suppliers => self.suppliers.len(),
            Resource::Categories => self.categories.len(),
            Resource::Products => self.products.len(),
            Resource::PurchaseOrders => self.purchase_orders.len(),
            Resource::Inventory => self.inventory.len(),
            Resource::LowStock => self.low_stock.len(),
        }
    }
}

pub struct Store<B> {
    backend: Arc<B>,
    state: Arc<RwLock<State>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl<B> Clone for Store<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<B> PartialEq for Store<B> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl<B: Backend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            state: Arc::new(RwLock::new(State::default())),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a callback run after every state change.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.write().push(Arc::new(listener));
    }

    pub async fn fetch_suppliers(&self) {
        self.fetch(Resource::Suppliers).await
    }

    pub async fn fetch_categories(&self) {
        self.fetch(Resource::Categories).await
    }

    pub async fn fetch_products(&self) {
        self.fetch(Resource::Products).await
    }

    pub async fn fetch_purchase_orders(&self) {
        self.fetch(Resource::PurchaseOrders).await
    }

    pub async fn fetch_inventory(&self) {
        self.fetch(Resource::Inventory).await
    }

    pub async fn fetch_low_stock(&self) {
        self.fetch(Resource::LowStock).await
    }

    pub async fn fetch(&self, resource: Resource) {
        match resource {
            Resource::Suppliers => self.load(resource, |s, v| s.suppliers = v).await,
            Resource::Categories => self.load(resource, |s, v| s.categories = v).await,
            Resource::Products => self.load(resource, |s, v| s.products = v).await,
            Resource::PurchaseOrders => self.load(resource, |s, v| s.purchase_orders = v).await,
            Resource::Inventory => self.load(resource, |s, v| s.inventory = v).await,
            Resource::LowStock => self.load(resource, |s, v| s.low_stock = v).await,
        }
    }

    /// Fetch every collection concurrently.
    pub async fn fetch_all(&self) {
        futures::future::join_all(Resource::ALL.map(|r| self.fetch(r))).await;
    }

    async fn load<T, F>(&self, resource: Resource, replace: F)
    where
        T: DeserializeOwned,
        F: FnOnce(&mut State, Vec<T>),
    {
        let _in_flight = self.begin(resource);
        debug!(%resource, endpoint = resource.endpoint(), "fetching");

        match get_as::<Vec<T>, _>(self.backend.as_ref(), resource.endpoint()).await {
            Ok(records) => {
                info!(%resource, count = records.len(), "fetched");
                self.commit(|state| {
                    replace(state, records);
                    if state.error.as_ref().is_some_and(|e| e.resource == resource) {
                        state.error = None;
                    }
                });
            }
            Err(err) => {
                warn!(%resource, error = %err, "fetch failed");
                self.commit(|state| {
                    state.error = Some(FetchFailure {
                        resource,
                        message: err.to_string(),
                    });
                });
            }
        }
    }

    fn begin(&self, resource: Resource) -> InFlight<'_, B> {
        self.commit(|state| *state.in_flight.entry(resource).or_default() += 1);
        InFlight {
            store: self,
            resource,
        }
    }
}

impl<B> Store<B> {
    fn commit(&self, mutate: impl FnOnce(&mut State)) {
        mutate(&mut *self.state.write());
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn suppliers(&self) -> Vec<Supplier> {
        self.state.read().suppliers.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.read().categories.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.read().products.clone()
    }

    pub fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        self.state.read().purchase_orders.clone()
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.state.read().inventory.clone()
    }

    pub fn low_stock(&self) -> Vec<InventoryItem> {
        self.state.read().low_stock.clone()
    }

    /// True while any fetch is awaiting the backend.
    pub fn loading(&self) -> bool {
        self.state.read().loading()
    }

    pub fn is_loading(&self, resource: Resource) -> bool {
        self.state.read().is_loading(resource)
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.as_ref().map(|e| e.message.clone())
    }

    pub fn error_source(&self) -> Option<Resource> {
        self.state.read().error.as_ref().map(|e| e.resource)
    }

    /// Forget the current error, e.g. when the user closes the banner.
    pub fn dismiss_error(&self) {
        self.commit(|state| state.error = None);
    }

    pub fn snapshot(&self) -> State {
        self.state.read().clone()
    }
}

/// Holds a resource's in-flight mark; dropping it clears the mark, so a
/// fetch future dropped mid-request does not leave the resource loading.
struct InFlight<'a, B> {
    store: &'a Store<B>,
    resource: Resource,
}

impl<B> Drop for InFlight<'_, B> {
    fn drop(&mut self) {
        let resource = self.resource;
        self.store.commit(|state| {
            if let Some(n) = state.in_flight.get_mut(&resource) {
                *n = n.saturating_sub(1);
                if *n == 0 {
                    state.in_flight.remove(&resource);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{oneshot, Semaphore};

    type Reply = Result<Value, ApiError>;

    /// Answers each path with a canned reply. A gated path parks the request
    /// until the test releases it, adding an `entered` permit on arrival.
    struct Scripted {
        replies: Mutex<HashMap<String, Reply>>,
        gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
        entered: Semaphore,
    }

    impl Default for Scripted {
        fn default() -> Self {
            Self {
                replies: Mutex::new(HashMap::new()),
                gates: Mutex::new(HashMap::new()),
                entered: Semaphore::new(0),
            }
        }
    }

    impl Scripted {
        fn reply(self, path: &str, reply: Reply) -> Self {
            self.replies.lock().insert(path.to_string(), reply);
            self
        }

        fn gate(&self, path: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().insert(path.to_string(), rx);
            tx
        }

        /// Wait until one gated request has arrived.
        async fn wait_entered(&self) {
            self.entered.acquire().await.unwrap().forget();
        }
    }

    impl Backend for Scripted {
        async fn get(&self, path: &str) -> Result<Value, ApiError> {
            let gate = self.gates.lock().remove(path);
            if let Some(gate) = gate {
                self.entered.add_permits(1);
                let _ = gate.await;
            }
            self.replies
                .lock()
                .get(path)
                .cloned()
                .unwrap_or(Err(ApiError::Status { status: 404 }))
        }
    }

    fn acme() -> Value {
        json!([{"id": 1, "name": "Acme"}])
    }

    #[tokio::test]
    async fn test_initial_state() {
        let store = Store::new(Scripted::default());
        assert!(store.suppliers().is_empty());
        assert!(!store.loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.snapshot(), State::default());
    }

    #[tokio::test]
    async fn test_fetch_suppliers_scenario() {
        let store = Store::new(Scripted::default().reply("/suppliers/", Ok(acme())));
        store.fetch_suppliers().await;

        let suppliers = store.suppliers();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].id, 1);
        assert_eq!(suppliers[0].name, "Acme");
        assert!(!store.loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_every_resource_replaces_its_collection() {
        let backend = Scripted::default()
            .reply("/suppliers/", Ok(acme()))
            .reply(
                "/categories/",
                Ok(json!([{"id": 1, "name": "Hardware"}, {"id": 2, "name": "Paint"}])),
            )
            .reply("/products/", Ok(json!([{"id": 5, "name": "Bolt", "unit_price": "0.25"}])))
            .reply("/purchase-orders/", Ok(json!([{"id": 9, "order_number": "PO-9"}])))
            .reply("/inventory/", Ok(json!([{"id": 3, "product": 5, "current_stock": 40}])))
            .reply("/inventory/low_stock/", Ok(json!([])));
        let store = Store::new(backend);

        store.fetch_all().await;

        let state = store.snapshot();
        assert_eq!(state.count(Resource::Suppliers), 1);
        assert_eq!(state.count(Resource::Categories), 2);
        assert_eq!(state.products[0].unit_price, 0.25);
        assert_eq!(state.purchase_orders[0].order_number, "PO-9");
        assert_eq!(state.inventory[0].current_stock, 40);
        assert!(state.low_stock.is_empty());
        assert!(!state.loading());
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_success_replaces_not_merges() {
        let store = Store::new(
            Scripted::default().reply("/categories/", Ok(json!([{"id": 1, "name": "A"}]))),
        );
        store.fetch_categories().await;
        store.backend().replies.lock().insert(
            "/categories/".to_string(),
            Ok(json!([{"id": 2, "name": "B"}])),
        );
        store.fetch_categories().await;

        let categories = store.categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "B");
    }

    #[tokio::test]
    async fn test_failure_keeps_collection_and_records_message() {
        let store = Store::new(Scripted::default().reply("/suppliers/", Ok(acme())));
        store.fetch_suppliers().await;

        store.backend().replies.lock().insert(
            "/suppliers/".to_string(),
            Err(ApiError::Transport("connection refused".to_string())),
        );
        store.fetch_suppliers().await;

        assert_eq!(store.suppliers().len(), 1);
        assert_eq!(store.error().as_deref(), Some("Network Error: connection refused"));
        assert_eq!(store.error_source(), Some(Resource::Suppliers));
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_status_failure_message() {
        let store = Store::new(Scripted::default());
        store.fetch_products().await;
        assert_eq!(store.error().as_deref(), Some("Request failed with status code 404"));
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_a_failure() {
        let store = Store::new(
            Scripted::default().reply("/inventory/", Ok(json!({"results": []}))),
        );
        store.fetch_inventory().await;
        let message = store.error().unwrap();
        assert!(message.starts_with("Failed to parse response"), "{message}");
        assert!(store.inventory().is_empty());
    }

    #[tokio::test]
    async fn test_success_clears_only_its_own_error() {
        let store = Store::new(
            Scripted::default()
                .reply("/suppliers/", Err(ApiError::Status { status: 500 }))
                .reply("/products/", Ok(json!([]))),
        );
        store.fetch_suppliers().await;
        store.fetch_products().await;
        assert_eq!(store.error().as_deref(), Some("Request failed with status code 500"));

        store
            .backend()
            .replies
            .lock()
            .insert("/suppliers/".to_string(), Ok(acme()));
        store.fetch_suppliers().await;
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_later_failure_replaces_error() {
        let store = Store::new(
            Scripted::default()
                .reply("/suppliers/", Err(ApiError::Status { status: 500 }))
                .reply("/categories/", Err(ApiError::Status { status: 403 })),
        );
        store.fetch_suppliers().await;
        store.fetch_categories().await;
        assert_eq!(store.error().as_deref(), Some("Request failed with status code 403"));
        assert_eq!(store.error_source(), Some(Resource::Categories));

        store.dismiss_error();
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_loading_during_call() {
        for resource in Resource::ALL {
            let other = if resource == Resource::Products {
                Resource::Suppliers
            } else {
                Resource::Products
            };

            for reply in [Ok(json!([])), Err(ApiError::Status { status: 502 })] {
                let backend = Scripted::default().reply(resource.endpoint(), reply);
                let release = backend.gate(resource.endpoint());
                let store = Store::new(backend);

                tokio::join!(store.fetch(resource), async {
                    store.backend().wait_entered().await;
                    assert!(store.loading(), "{resource}");
                    assert!(store.is_loading(resource), "{resource}");
                    assert!(!store.is_loading(other), "{resource}");
                    release.send(()).unwrap();
                });

                assert!(!store.loading(), "{resource}");
                assert!(!store.is_loading(resource), "{resource}");
            }
        }
    }

    #[tokio::test]
    async fn test_overlapping_fetches_keep_loading_until_last() {
        let backend = Scripted::default()
            .reply("/suppliers/", Ok(acme()))
            .reply("/products/", Ok(json!([{"id": 5, "name": "Bolt"}])));
        let release_suppliers = backend.gate("/suppliers/");
        let release_products = backend.gate("/products/");
        let store = Store::new(backend);

        tokio::join!(store.fetch_suppliers(), store.fetch_products(), async {
            store.backend().wait_entered().await;
            store.backend().wait_entered().await;
            assert!(store.is_loading(Resource::Suppliers));
            assert!(store.is_loading(Resource::Products));

            // Products answer first.
            release_products.send(()).unwrap();
            while store.is_loading(Resource::Products) {
                tokio::task::yield_now().await;
            }
            assert_eq!(store.products().len(), 1);
            assert!(!store.is_loading(Resource::Products));
            assert!(store.loading());
            assert!(store.suppliers().is_empty());

            release_suppliers.send(()).unwrap();
        });

        assert_eq!(store.suppliers()[0].name, "Acme");
        assert_eq!(store.products()[0].name, "Bolt");
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_dropped_fetch_clears_loading() {
        let backend = Scripted::default().reply("/products/", Ok(json!([])));
        let _release = backend.gate("/products/");
        let store = Store::new(backend);

        tokio::select! {
            _ = store.fetch_products() => panic!("gated fetch finished"),
            _ = store.backend().wait_entered() => {}
        }

        assert!(!store.loading());
        assert!(store.products().is_empty());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_listeners_see_each_commit() {
        let store = Store::new(Scripted::default().reply("/suppliers/", Ok(acme())));
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.fetch_suppliers().await;

        // begin, records, end
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::new(Scripted::default().reply("/suppliers/", Ok(acme())));
        let view = store.clone();
        store.fetch_suppliers().await;
        assert_eq!(view.suppliers().len(), 1);
        assert!(view == store);
    }
}
