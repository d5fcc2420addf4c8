//! Represents a customer's potion order.
//!
//! # Store
//! This struct implements the [`Entity`] trait, allowing it to be held by a
//! [`ResourceStore`](crate::framework::ResourceStore) through
//! [`OrderStore`](crate::store::OrderStore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

use crate::framework::Entity;
use crate::model::Ingredient;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn generate() -> Self {
        Self(format!("pot-{}", Uuid::new_v4().simple()))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-facing order number, formatted `PREFIX-YEAR-NNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(pub String);

impl OrderNumber {
    /// Formats a number from its parts; `sequence` is zero-padded to four digits.
    pub fn new(prefix: &str, year: i32, sequence: usize) -> Self {
        Self(format!("{prefix}-{year}-{sequence:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeliveryMethod {
    #[default]
    #[serde(rename = "Owl Post")]
    Owl,
    #[serde(rename = "Dragon Express")]
    Dragon,
    #[serde(rename = "Magical Teleport")]
    Teleport,
    #[serde(rename = "Wizard Courier")]
    Courier,
    #[serde(rename = "Shop Pickup")]
    Pickup,
}

impl DeliveryMethod {
    pub const ALL: [DeliveryMethod; 5] = [
        DeliveryMethod::Owl,
        DeliveryMethod::Dragon,
        DeliveryMethod::Teleport,
        DeliveryMethod::Courier,
        DeliveryMethod::Pickup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeliveryMethod::Owl => "Owl Post",
            DeliveryMethod::Dragon => "Dragon Express",
            DeliveryMethod::Teleport => "Magical Teleport",
            DeliveryMethod::Courier => "Wizard Courier",
            DeliveryMethod::Pickup => "Shop Pickup",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DeliveryMethod::Owl => "🦉",
            DeliveryMethod::Dragon => "🐲",
            DeliveryMethod::Teleport => "✨",
            DeliveryMethod::Courier => "🧙",
            DeliveryMethod::Pickup => "🏪",
        }
    }
}

impl Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Gold Coins")]
    GoldCoins,
    #[serde(rename = "Silver Coins")]
    SilverCoins,
    #[serde(rename = "Magical Transfer")]
    MagicalTransfer,
    #[serde(rename = "Credit Spell")]
    CreditSpell,
    #[serde(rename = "Barter")]
    Barter,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::GoldCoins,
        PaymentMethod::SilverCoins,
        PaymentMethod::MagicalTransfer,
        PaymentMethod::CreditSpell,
        PaymentMethod::Barter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaymentMethod::GoldCoins => "Gold Coins",
            PaymentMethod::SilverCoins => "Silver Coins",
            PaymentMethod::MagicalTransfer => "Magical Transfer",
            PaymentMethod::CreditSpell => "Credit Spell",
            PaymentMethod::Barter => "Barter",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PaymentMethod::GoldCoins => "💰",
            PaymentMethod::SilverCoins => "🥈",
            PaymentMethod::MagicalTransfer => "✨",
            PaymentMethod::CreditSpell => "🔮",
            PaymentMethod::Barter => "🤝",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Brewing,
    Ready,
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Brewing => "brewing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub ordered_by: String,
    pub order_date: DateTime<Utc>,
    pub ready_date: DateTime<Utc>,
    pub delivery_address: String,
    pub delivery_method: DeliveryMethod,
    pub payment_method: PaymentMethod,
    pub ingredients: Vec<Ingredient>,
    /// Sum of the ingredient line totals at the time the order was placed.
    pub total_cost: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_padding() {
        assert_eq!(OrderNumber::new("POT", 2025, 1).as_str(), "POT-2025-0001");
        assert_eq!(OrderNumber::new("POT", 2025, 12345).as_str(), "POT-2025-12345");
    }

    #[test]
    fn test_enums_serialize_to_display_names() {
        assert_eq!(
            serde_json::to_string(&DeliveryMethod::Teleport).unwrap(),
            r#""Magical Teleport""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditSpell).unwrap(),
            r#""Credit Spell""#
        );
        assert_eq!(serde_json::to_string(&OrderStatus::Brewing).unwrap(), r#""brewing""#);
        for method in DeliveryMethod::ALL {
            assert_eq!(
                serde_json::to_string(&method).unwrap(),
                format!("\"{}\"", method)
            );
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }
}
