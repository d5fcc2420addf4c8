//! A single ingredient line of a potion order.
//!
//! The line total is derived: [`Ingredient::total_price`] equals
//! `quantity * price_per_unit` after every edit made through
//! [`IngredientSet`](crate::ingredient_set::IngredientSet). Only a bulk load trusts a
//! caller-supplied total.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for ingredient lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub String);

impl IngredientId {
    /// Generates a fresh, unique id.
    pub fn generate() -> Self {
        Self(format!("ing-{}", Uuid::new_v4().simple()))
    }
}

impl From<&str> for IngredientId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for IngredientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Measuring unit of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "drops")]
    Drops,
    #[serde(rename = "pinch")]
    Pinch,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Grams,
        Unit::Milliliters,
        Unit::Pieces,
        Unit::Drops,
        Unit::Pinch,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Pieces => "pcs",
            Unit::Drops => "drops",
            Unit::Pinch => "pinch",
        }
    }

    /// Label shown in unit pickers.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Grams => "grams (g)",
            Unit::Milliliters => "milliliters (ml)",
            Unit::Pieces => "pieces (pcs)",
            Unit::Drops => "drops",
            Unit::Pinch => "pinch",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub quantity: f64,
    /// `None` when the unit selection was cleared.
    pub unit: Option<Unit>,
    pub price_per_unit: f64,
    pub total_price: f64,
}

impl Ingredient {
    /// A fresh line: new id, empty name, zero amounts, unit defaulted to grams.
    pub fn blank() -> Self {
        Self {
            id: IngredientId::generate(),
            name: String::new(),
            quantity: 0.0,
            unit: Some(Unit::default()),
            price_per_unit: 0.0,
            total_price: 0.0,
        }
    }

    /// Creates a filled-in line with a fresh id and a consistent total.
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit, price_per_unit: f64) -> Self {
        Self {
            id: IngredientId::generate(),
            name: name.into(),
            quantity,
            unit: Some(unit),
            price_per_unit,
            total_price: quantity * price_per_unit,
        }
    }

    pub(crate) fn recompute_total(&mut self) {
        self.total_price = self.quantity * self.price_per_unit;
    }

    /// True when every field needed to brew with this line is filled in.
    /// NaN amounts count as missing.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && self.quantity > 0.0
            && self.price_per_unit > 0.0
            && self.unit.is_some()
    }
}

/// Sum of the line totals; zero for no lines.
pub fn total_cost(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(|i| i.total_price).sum()
}
