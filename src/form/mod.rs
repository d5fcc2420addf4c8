//! # Order Form
//!
//! The draft a customer fills in before a potion order exists.
//!
//! ## Lifecycle
//!
//! 1. **Init**: the draft takes its order number from the store and its order date from
//!    the clock. Both stay fixed for the life of the draft.
//! 2. **Edit**: header setters and [`OrderForm::ingredients_mut`] change the draft.
//!    Errors for a field become visible once it is touched (see [`OrderForm::touch`]).
//! 3. **Submit**: a valid draft becomes an [`Order`] in the [`OrderStore`] and the form
//!    starts over with a fresh draft. An invalid one stays put with every field touched.
//!
//! The ingredient list is an embedded [`FormField`]; the form registers its listeners on
//! the set when the draft is created.

mod field;

pub use field::*;

use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, instrument, trace, warn};

use crate::clients::{Notification, Notifier};
use crate::config::ShopConfig;
use crate::framework::{Clock, FormField};
use crate::ingredient_set::IngredientSet;
use crate::model::{self, DeliveryMethod, Ingredient, Order, OrderId, OrderNumber, OrderStatus, PaymentMethod};
use crate::store::OrderStore;
use crate::validation::{self, most_relevant, ValidationError};

/// Returned by a rejected [`OrderForm::submit`]: every field that failed, with all of
/// its errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Please fill in all required fields correctly.")]
pub struct InvalidForm {
    pub errors: BTreeMap<OrderField, Vec<ValidationError>>,
}

/// Header fields of the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub order_number: OrderNumber,
    pub ordered_by: String,
    pub order_date: DateTime<Utc>,
    pub ready_date: Option<DateTime<Utc>>,
    pub delivery_address: String,
    pub delivery_method: Option<DeliveryMethod>,
    pub payment_method: Option<PaymentMethod>,
}

pub struct OrderForm {
    store: OrderStore,
    notifier: Rc<dyn Notifier>,
    clock: Rc<dyn Clock>,
    config: ShopConfig,
    draft: Draft,
    ingredients: IngredientSet,
    touched: Rc<RefCell<HashSet<OrderField>>>,
    submitted: bool,
}

impl std::fmt::Debug for OrderForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderForm")
            .field("draft", &self.draft)
            .field("ingredients", &self.ingredients)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

impl OrderForm {
    pub fn new(
        store: OrderStore,
        notifier: Rc<dyn Notifier>,
        clock: Rc<dyn Clock>,
        config: &ShopConfig,
    ) -> Self {
        let draft = Self::blank_draft(&store, clock.as_ref(), config);
        let touched = Rc::new(RefCell::new(HashSet::new()));
        let ingredients = Self::ingredient_field(config, &touched);
        Self {
            store,
            notifier,
            clock,
            config: config.clone(),
            draft,
            ingredients,
            touched,
            submitted: false,
        }
    }

    fn blank_draft(store: &OrderStore, clock: &dyn Clock, config: &ShopConfig) -> Draft {
        let order_date = clock.now();
        let ready_date = Duration::try_days(config.ready_lead_days)
            .and_then(|lead| order_date.checked_add_signed(lead));
        Draft {
            order_number: store.next_order_number(),
            ordered_by: String::new(),
            order_date,
            ready_date,
            delivery_address: String::new(),
            delivery_method: Some(DeliveryMethod::default()),
            payment_method: Some(PaymentMethod::default()),
        }
    }

    /// Builds the embedded ingredient field and registers the form's listeners on it.
    fn ingredient_field(
        config: &ShopConfig,
        touched: &Rc<RefCell<HashSet<OrderField>>>,
    ) -> IngredientSet {
        let mut set = IngredientSet::with_min_items(config.min_ingredients);
        set.register_on_change(Box::new(|items: &Vec<Ingredient>| {
            trace!(lines = items.len(), total_cost = model::total_cost(items), "Ingredients changed");
        }));
        let touched = Rc::clone(touched);
        set.register_on_touched(Box::new(move || {
            touched.borrow_mut().insert(OrderField::Ingredients);
        }));
        set
    }

    // --- Draft access ---

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    pub fn ingredients_mut(&mut self) -> &mut IngredientSet {
        &mut self.ingredients
    }

    pub fn set_ordered_by(&mut self, value: impl Into<String>) {
        self.draft.ordered_by = value.into();
    }

    pub fn set_ready_date(&mut self, value: Option<DateTime<Utc>>) {
        self.draft.ready_date = value;
    }

    pub fn set_delivery_address(&mut self, value: impl Into<String>) {
        self.draft.delivery_address = value.into();
    }

    pub fn set_delivery_method(&mut self, value: Option<DeliveryMethod>) {
        self.draft.delivery_method = value;
    }

    pub fn set_payment_method(&mut self, value: Option<PaymentMethod>) {
        self.draft.payment_method = value;
    }

    // --- Interaction state ---

    /// Marks a field as visited by the user, which makes its errors visible.
    pub fn touch(&mut self, field: OrderField) {
        self.touched.borrow_mut().insert(field);
    }

    pub fn is_touched(&self, field: OrderField) -> bool {
        self.touched.borrow().contains(&field)
    }

    /// True once a submit was attempted on the current draft.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    // --- Validation ---

    /// Every error the field currently has, in no particular order.
    pub fn field_errors(&self, field: OrderField) -> Vec<ValidationError> {
        let draft = &self.draft;
        let config = &self.config;
        match field {
            OrderField::OrderedBy => validation::text_field(
                &draft.ordered_by,
                config.ordered_by_min_len,
                config.ordered_by_max_len,
            ),
            OrderField::ReadyDate => match draft.ready_date {
                None => vec![ValidationError::Required],
                Some(ready) => validation::future_date(ready, draft.order_date)
                    .err()
                    .into_iter()
                    .collect(),
            },
            OrderField::DeliveryAddress => validation::text_field(
                &draft.delivery_address,
                config.address_min_len,
                config.address_max_len,
            ),
            OrderField::DeliveryMethod => validation::required(draft.delivery_method.as_ref())
                .err()
                .into_iter()
                .collect(),
            OrderField::PaymentMethod => validation::required(draft.payment_method.as_ref())
                .err()
                .into_iter()
                .collect(),
            OrderField::Ingredients => {
                let mut errors = Vec::new();
                if self.ingredients.is_empty() {
                    errors.push(ValidationError::Required);
                }
                if let Err(e) = FormField::validate(&self.ingredients) {
                    errors.push(e);
                }
                errors
            }
        }
    }

    /// Failing fields only.
    pub fn errors(&self) -> BTreeMap<OrderField, Vec<ValidationError>> {
        OrderField::ALL
            .into_iter()
            .map(|field| (field, self.field_errors(field)))
            .filter(|(_, errors)| !errors.is_empty())
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        OrderField::ALL
            .into_iter()
            .all(|field| self.field_errors(field).is_empty())
    }

    pub fn is_field_invalid(&self, field: OrderField) -> bool {
        self.errors_visible(field) && !self.field_errors(field).is_empty()
    }

    /// Message to show under a field, if any.
    ///
    /// Nothing is shown until the field is touched or a submit was attempted. When a field
    /// has several errors the most basic one wins (required before length, and so on).
    pub fn error_for(&self, field: OrderField) -> Option<String> {
        if !self.errors_visible(field) {
            return None;
        }
        let errors = self.field_errors(field);
        most_relevant(&errors).map(|error| match error {
            ValidationError::Required => format!("{} is required", field.label()),
            other => other.to_string(),
        })
    }

    fn errors_visible(&self, field: OrderField) -> bool {
        self.submitted || self.is_touched(field)
    }

    // --- Submission ---

    /// Places the order if the draft is valid.
    ///
    /// On success the order is added to the store, a success notification is sent and
    /// the form is reset to a fresh draft. On failure nothing is stored, an error
    /// notification is sent and every field is marked touched.
    #[instrument(skip(self), fields(order_number = %self.draft.order_number))]
    pub fn submit(&mut self) -> Result<Order, InvalidForm> {
        self.submitted = true;
        let errors = self.errors();

        let order = match self.build_order() {
            Some(order) if errors.is_empty() => order,
            _ => {
                warn!(invalid_fields = ?errors.keys().collect::<Vec<_>>(), "Submit rejected");
                self.notifier.notify(Notification::error(
                    "Invalid Form",
                    "Please fill in all required fields correctly.",
                ));
                self.touch_all();
                return Err(InvalidForm { errors });
            }
        };

        info!(order_id = %order.id, total_cost = order.total_cost, "Order placed");
        self.store.add(order.clone());
        self.notifier.notify(Notification::success(
            "Potion Created!",
            format!("Potion {} is now brewing!", order.order_number),
        ));
        self.reset();
        Ok(order)
    }

    fn build_order(&self) -> Option<Order> {
        let draft = &self.draft;
        Some(Order {
            id: OrderId::generate(),
            order_number: draft.order_number.clone(),
            ordered_by: draft.ordered_by.clone(),
            order_date: draft.order_date,
            ready_date: draft.ready_date?,
            delivery_address: draft.delivery_address.clone(),
            delivery_method: draft.delivery_method?,
            payment_method: draft.payment_method?,
            ingredients: self.ingredients.value(),
            total_cost: self.ingredients.total_cost(),
            status: OrderStatus::Brewing,
        })
    }

    fn touch_all(&mut self) {
        self.touched.borrow_mut().extend(OrderField::ALL);
    }

    /// Discards the draft and starts a new one with a fresh order number and order date.
    pub fn reset(&mut self) {
        self.submitted = false;
        self.touched.borrow_mut().clear();
        self.draft = Self::blank_draft(&self.store, self.clock.as_ref(), &self.config);
        self.ingredients = Self::ingredient_field(&self.config, &self.touched);
        debug!(order_number = %self.draft.order_number, "Draft reset");
    }
}
