use serde::Serialize;
use std::fmt::Display;

/// The user-editable fields of an order draft.
///
/// The order number and order date are fixed when the draft is created and are not
/// listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderField {
    OrderedBy,
    ReadyDate,
    DeliveryAddress,
    DeliveryMethod,
    PaymentMethod,
    Ingredients,
}

impl OrderField {
    pub const ALL: [OrderField; 6] = [
        OrderField::OrderedBy,
        OrderField::ReadyDate,
        OrderField::DeliveryAddress,
        OrderField::DeliveryMethod,
        OrderField::PaymentMethod,
        OrderField::Ingredients,
    ];

    /// Name used in "... is required" messages.
    pub fn label(self) -> &'static str {
        match self {
            OrderField::OrderedBy => "Customer name",
            OrderField::ReadyDate => "Ready date",
            OrderField::DeliveryAddress => "Delivery address",
            OrderField::DeliveryMethod => "Delivery method",
            OrderField::PaymentMethod => "Payment method",
            OrderField::Ingredients => "Ingredients",
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
