use tokio::sync::{Mutex, MutexGuard};
use crate::server::model::order::Order;

/// Orders kept in insertion order. Not synchronized on its own, see [`OrderStore`].
#[derive(Debug, Default)]
pub(crate) struct Orders {
    orders: Vec<Order>,
}

impl Orders {
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// position of the first order with `id`, duplicates are allowed
    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.orders.iter().position(|o| o.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Overwrites every field of the order at `index`.
    ///
    /// Panics if `index` is out of bounds, callers take it from `find_index_by_id`
    /// under the same lock.
    pub fn replace_at(&mut self, index: usize, order: Order) {
        self.orders[index] = order;
    }

    /// Removes the order at `index`, keeping the relative order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Order {
        self.orders.remove(index)
    }
}

/// In-memory order storage shared by all workers.
///
/// Every request holds the lock for its whole scan and mutation, so concurrent
/// requests are applied one after another.
#[derive(Debug, Default)]
pub(crate) struct OrderStore {
    inner: Mutex<Orders>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, Orders> {
        self.inner.lock().await
    }
}
