//! Generic building blocks shared by the shop's stores and forms.
//!
//! # Main Components
//!
//! - [`Signal`] - Observable value holder with wholesale replacement
//! - [`Entity`] - Trait that stored resource types implement
//! - [`ResourceStore`] - Ordered in-memory collection of entities
//! - [`FormField`] - Adapter a composite value implements to sit inside a form
//! - [`Clock`] - Time source
//!
//! # Testing
//!
//! See [`mock`] for test doubles of the clock and the UI collaborators.

pub mod clock;
pub mod core;
pub mod field;
pub mod mock;
pub mod signal;

pub use clock::*;
pub use self::core::*;
pub use field::*;
pub use signal::*;
