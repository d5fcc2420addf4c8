//! # Ingredient Set
//!
//! The editable list of ingredient lines inside an order draft.
//!
//! The set keeps every line's total consistent with its amounts, derives the grand
//! total, and validates itself as one composite form field. Two checks are reported
//! separately so the form can show the specific cause:
//!
//! 1. **Existence**: at least `min_items` lines ([`ValidationError::MinIngredients`]).
//! 2. **Content**: every line filled in ([`ValidationError::InvalidIngredient`]).
//!
//! Edits made by the user ([`add`](IngredientSet::add), [`remove`](IngredientSet::remove),
//! [`update`](IngredientSet::update)) notify the host form's change and touched listeners.
//! A value pushed in by the host ([`write_value`](FormField::write_value)) does not.

use std::fmt;
use tracing::{debug, trace};

use crate::framework::{ChangeListener, FormField, TouchedListener};
use crate::model::{self, Ingredient, IngredientId, Unit};
use crate::validation::ValidationError;

/// Fewest lines an order may have unless configured otherwise.
pub const DEFAULT_MIN_INGREDIENTS: usize = 3;

/// One field edit on an ingredient line.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientChange {
    Name(String),
    Quantity(f64),
    Unit(Option<Unit>),
    PricePerUnit(f64),
}

impl IngredientChange {
    fn affects_total(&self) -> bool {
        matches!(self, IngredientChange::Quantity(_) | IngredientChange::PricePerUnit(_))
    }

    fn apply(self, line: &mut Ingredient) {
        match self {
            IngredientChange::Name(name) => line.name = name,
            IngredientChange::Quantity(quantity) => line.quantity = quantity,
            IngredientChange::Unit(unit) => line.unit = unit,
            IngredientChange::PricePerUnit(price) => line.price_per_unit = price,
        }
    }
}

pub struct IngredientSet {
    items: Vec<Ingredient>,
    min_items: usize,
    disabled: bool,
    on_change: Option<ChangeListener<Vec<Ingredient>>>,
    on_touched: Option<TouchedListener>,
}

impl fmt::Debug for IngredientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngredientSet")
            .field("items", &self.items)
            .field("min_items", &self.min_items)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl Default for IngredientSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::with_min_items(DEFAULT_MIN_INGREDIENTS)
    }

    pub fn with_min_items(min_items: usize) -> Self {
        Self {
            items: Vec::new(),
            min_items,
            disabled: false,
            on_change: None,
            on_touched: None,
        }
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn get(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    /// Selectable units with their picker labels.
    pub fn units() -> impl Iterator<Item = (Unit, &'static str)> {
        Unit::ALL.into_iter().map(|unit| (unit, unit.label()))
    }

    /// Appends a blank line and returns its id.
    pub fn add(&mut self) -> IngredientId {
        let line = Ingredient::blank();
        let id = line.id.clone();
        self.items.push(line);
        debug!(%id, size = self.items.len(), "Ingredient added");
        self.edited();
        id
    }

    /// Removes the line with the given id. Unknown ids leave the list as it is.
    pub fn remove(&mut self, id: &IngredientId) {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        debug!(%id, removed = before != self.items.len(), size = self.items.len(), "Ingredient removed");
        self.edited();
    }

    /// Applies one field edit to the line with the given id.
    ///
    /// Quantity and price edits recompute the line total from the value just written
    /// and the other amount as currently stored.
    pub fn update(&mut self, id: &IngredientId, change: IngredientChange) {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(line) => {
                trace!(%id, ?change, "Ingredient updated");
                let affects_total = change.affects_total();
                change.apply(line);
                if affects_total {
                    line.recompute_total();
                }
            }
            None => debug!(%id, "Ingredient not found"),
        }
        self.edited();
    }

    /// Sum of all line totals; zero when the list is empty.
    pub fn total_cost(&self) -> f64 {
        model::total_cost(&self.items)
    }

    /// Fewer than `min_items` lines is reported before any incomplete line.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.items.len() < self.min_items {
            return Err(ValidationError::MinIngredients {
                min: self.min_items,
                actual: self.items.len(),
            });
        }
        if self.items.iter().any(|i| !i.is_complete()) {
            return Err(ValidationError::InvalidIngredient);
        }
        Ok(())
    }

    fn edited(&self) {
        if let Some(on_change) = &self.on_change {
            on_change(&self.items);
        }
        if let Some(on_touched) = &self.on_touched {
            on_touched();
        }
    }
}

impl FormField for IngredientSet {
    type Value = Vec<Ingredient>;

    fn value(&self) -> Vec<Ingredient> {
        self.items.clone()
    }

    /// Replaces the whole list. Line totals are taken as given.
    fn write_value(&mut self, value: Option<Vec<Ingredient>>) {
        if let Some(items) = value {
            debug!(size = items.len(), "Ingredients loaded");
            self.items = items;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        IngredientSet::validate(self)
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn register_on_change(&mut self, listener: ChangeListener<Vec<Ingredient>>) {
        self.on_change = Some(listener);
    }

    fn register_on_touched(&mut self, listener: TouchedListener) {
        self.on_touched = Some(listener);
    }
}
