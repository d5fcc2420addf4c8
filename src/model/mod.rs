//! Pure data structures for the potion shop.
//!
//! [`Order`] implements the [`Entity`](crate::framework::Entity) trait so it can be held
//! by a [`ResourceStore`](crate::framework::ResourceStore).

pub mod ingredient;
pub mod order;

pub use ingredient::*;
pub use order::*;
