//! Validation errors and the reusable field rules the order form is built from.

pub mod error;
pub mod rules;

pub use error::*;
pub use rules::*;
