//! # Order List
//!
//! Read-only view over the placed orders, with a detail selection and
//! delete-after-confirmation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, info, instrument};

use crate::clients::{ConfirmationRequest, Confirmer, Notification, Notifier};
use crate::model::{Order, OrderStatus};
use crate::store::OrderStore;

/// Colour class a status tag is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSeverity {
    Success,
    Info,
    Warn,
}

pub fn status_severity(status: OrderStatus) -> TagSeverity {
    match status {
        OrderStatus::Brewing => TagSeverity::Warn,
        OrderStatus::Ready => TagSeverity::Success,
        OrderStatus::Delivered => TagSeverity::Info,
    }
}

pub fn status_icon(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Brewing => "⚗️",
        OrderStatus::Ready => "✅",
        OrderStatus::Delivered => "🚚",
    }
}

/// `dd/mm/yyyy`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// The prompt shown before an order is deleted.
pub fn delete_confirmation(order: &Order) -> ConfirmationRequest {
    ConfirmationRequest {
        header: "Delete Confirmation".to_string(),
        message: format!(
            "Are you sure you want to delete potion {}?",
            order.order_number
        ),
    }
}

pub struct OrderList {
    store: OrderStore,
    notifier: Rc<dyn Notifier>,
    selected: Option<Order>,
}

impl std::fmt::Debug for OrderList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderList")
            .field("store", &self.store)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl OrderList {
    pub fn new(store: OrderStore, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            selected: None,
        }
    }

    pub fn orders(&self) -> Rc<Vec<Order>> {
        self.store.orders()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn view_details(&mut self, order: &Order) {
        debug!(order_id = %order.id, "View details");
        self.selected = Some(order.clone());
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    /// Asks `confirmer` before deleting `order`. Returns whether the order was deleted.
    ///
    /// The store is only touched from the confirmer's accept callback.
    #[instrument(skip(self, order, confirmer), fields(order_number = %order.order_number))]
    pub fn request_delete(&mut self, order: &Order, confirmer: &dyn Confirmer) -> bool {
        let request = delete_confirmation(order);
        let mut deleted = false;
        confirmer.confirm(&request, &mut || {
            deleted = self.store.delete(&order.id);
            self.notifier.notify(Notification::success(
                "Deleted",
                format!("Potion {} has been removed", order.order_number),
            ));
        });

        if deleted {
            info!(order_id = %order.id, remaining = self.store.count(), "Order deleted");
            if self.selected.as_ref().is_some_and(|s| s.id == order.id) {
                self.selected = None;
            }
        } else {
            debug!(order_id = %order.id, "Delete not carried out");
        }
        deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::Severity;
    use crate::framework::mock::{FixedClock, RecordingNotifier, ScriptedConfirmer};
    use crate::model::{DeliveryMethod, Ingredient, OrderId, OrderNumber, PaymentMethod, Unit};
    use chrono::{Duration, TimeZone};

    fn order(id: &str, seq: usize) -> Order {
        let now = Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap();
        Order {
            id: OrderId::from(id),
            order_number: OrderNumber::new("POT", 2025, seq),
            ordered_by: "Morgana".into(),
            order_date: now,
            ready_date: now + Duration::days(2),
            delivery_address: "Misty Isle".into(),
            delivery_method: DeliveryMethod::Dragon,
            payment_method: PaymentMethod::Barter,
            ingredients: vec![Ingredient::new("Nightshade", 1.0, Unit::Pinch, 5.0)],
            total_cost: 5.0,
            status: OrderStatus::Brewing,
        }
    }

    fn list() -> (OrderStore, RecordingNotifier, OrderList) {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap());
        let store = OrderStore::new("POT", Rc::new(clock));
        let notifier = RecordingNotifier::new();
        let list = OrderList::new(store.clone(), Rc::new(notifier.clone()));
        (store, notifier, list)
    }

    #[test]
    fn test_accepted_delete_removes_order() {
        let (store, notifier, mut list) = list();
        let first = order("pot-1", 1);
        store.add(first.clone());
        store.add(order("pot-2", 2));

        let confirmer = ScriptedConfirmer::new().then_answer(true);
        assert!(list.request_delete(&first, &confirmer));

        assert_eq!(list.count(), 1);
        assert_eq!(list.orders()[0].id, OrderId::from("pot-2"));
        assert_eq!(
            confirmer.asked()[0].message,
            "Are you sure you want to delete potion POT-2025-0001?"
        );
        let note = notifier.verify_last(Severity::Success);
        assert_eq!(note.detail, "Potion POT-2025-0001 has been removed");
        confirmer.verify();
    }

    #[test]
    fn test_rejected_delete_keeps_order() {
        let (store, notifier, mut list) = list();
        let first = order("pot-1", 1);
        store.add(first.clone());

        let confirmer = ScriptedConfirmer::new().then_answer(false);
        assert!(!list.request_delete(&first, &confirmer));

        assert_eq!(list.count(), 1);
        assert!(notifier.received().is_empty());
    }

    #[test]
    fn test_deleting_selected_order_closes_details() {
        let (store, _notifier, mut list) = list();
        let first = order("pot-1", 1);
        store.add(first.clone());

        list.view_details(&first);
        assert_eq!(list.selected().map(|o| &o.id), Some(&first.id));

        list.request_delete(&first, &ScriptedConfirmer::new().then_answer(true));
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(status_severity(OrderStatus::Brewing), TagSeverity::Warn);
        assert_eq!(status_severity(OrderStatus::Ready), TagSeverity::Success);
        assert_eq!(status_severity(OrderStatus::Delivered), TagSeverity::Info);
        assert_eq!(status_icon(OrderStatus::Delivered), "🚚");

        let date = Utc.with_ymd_and_hms(2025, 2, 3, 23, 59, 0).unwrap();
        assert_eq!(format_date(date), "03/02/2025");
    }
}
