//! Domain-specific wrappers around [`ResourceStore`](crate::framework::ResourceStore).

pub mod order_store;

pub use order_store::*;
