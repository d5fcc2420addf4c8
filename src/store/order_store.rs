//! # Order Store
//!
//! The authoritative, session-lifetime collection of placed orders. It starts empty and
//! lives only as long as the process.

use chrono::Datelike;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

use crate::framework::{Clock, ResourceStore, Subscription, SystemClock};
use crate::model::{Order, OrderId, OrderNumber};

/// Handle to the order collection. Clones share the same orders.
#[derive(Clone)]
pub struct OrderStore {
    inner: ResourceStore<Order>,
    prefix: Rc<str>,
    clock: Rc<dyn Clock>,
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStore")
            .field("prefix", &self.prefix)
            .field("inner", &self.inner)
            .finish()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new("POT", Rc::new(SystemClock))
    }
}

impl OrderStore {
    pub fn new(prefix: impl Into<Rc<str>>, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: ResourceStore::new(),
            prefix: prefix.into(),
            clock,
        }
    }

    /// Appends a placed order.
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub fn add(&self, order: Order) {
        self.inner.add(order);
    }

    /// Replaces the order with the given id; does nothing if there is none.
    #[instrument(skip(self, order))]
    pub fn update(&self, id: &OrderId, order: Order) -> bool {
        self.inner.update(id, order)
    }

    /// Removes the order with the given id; does nothing if there is none.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &OrderId) -> bool {
        self.inner.delete(id)
    }

    pub fn get_by_id(&self, id: &OrderId) -> Option<Order> {
        self.inner.get(id)
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }

    /// Read-only snapshot of the orders in placement order.
    pub fn orders(&self) -> Rc<Vec<Order>> {
        self.inner.snapshot()
    }

    /// Number the next order would get: `PREFIX-<year>-<count + 1>`.
    ///
    /// The sequence is derived from the current count rather than a stored counter,
    /// so after a delete a number that was already issued can come up again.
    pub fn next_order_number(&self) -> OrderNumber {
        let year = self.clock.now().year();
        let number = OrderNumber::new(&self.prefix, year, self.count() + 1);
        debug!(%number, "Next order number");
        number
    }

    pub fn subscribe(&self, observer: impl Fn(&Rc<Vec<Order>>) + 'static) -> Subscription {
        self.inner.subscribe(observer)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.inner.unsubscribe(subscription)
    }
}
