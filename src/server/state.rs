use std::sync::Arc;
use crate::server::store::OrderStore;

#[derive(Clone)]
pub(crate) struct AppState {
    store: Arc<OrderStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(OrderStore::new()))
    }

    pub fn with_store(store: Arc<OrderStore>) -> Self {
        Self { store }
    }

    pub fn get_store(&self) -> Arc<OrderStore> {
        self.store.clone()
    }
}
