//! # Form Field Adapter
//!
//! A [`FormField`] is a composite value that a host form embeds as one of its fields.
//! The host talks to it through four capabilities (read, write, validate, enable/disable)
//! and learns about user edits through the listeners it registers.

use crate::validation::ValidationError;

/// Listener invoked with the field's new value after a user edit.
pub type ChangeListener<V> = Box<dyn Fn(&V)>;

/// Listener invoked whenever the user interacts with the field.
pub type TouchedListener = Box<dyn Fn()>;

pub trait FormField {
    /// The value the host form stores for this field.
    type Value;

    /// Current value.
    fn value(&self) -> Self::Value;

    /// Accepts a value pushed in by the host. `None` leaves the field unchanged.
    fn write_value(&mut self, value: Option<Self::Value>);

    /// Validates the field as a whole.
    fn validate(&self) -> Result<(), ValidationError>;

    fn set_disabled(&mut self, disabled: bool);

    fn is_disabled(&self) -> bool;

    fn register_on_change(&mut self, listener: ChangeListener<Self::Value>);

    fn register_on_touched(&mut self, listener: TouchedListener);
}
