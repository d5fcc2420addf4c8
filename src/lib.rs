//! # Wizard's Potion Shop
//!
//! > **Order management for a potion shop: drafts, ingredients, and an in-memory order book.**
//!
//! A customer fills in an order draft (who, where, when, how to pay) together with a list
//! of ingredient lines. On submit the draft is validated as a whole; a valid draft becomes
//! an [`Order`](model::Order) in the [`OrderStore`](store::OrderStore) and the form starts
//! over. The order list reads the same store and deletes orders after confirmation.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Single-threaded, synchronous
//! Every operation runs to completion inside one UI event. Shared state lives behind
//! `Rc<RefCell<_>>` handles, and each write swaps in a whole new collection, so observers
//! never see a half-applied change.
//!
//! ### 2. Validation failures are values
//! Nothing in the core panics on bad input. Checks return
//! [`ValidationError`](validation::ValidationError) values keyed by failure kind, and a
//! rejected submit returns [`InvalidForm`](form::InvalidForm) with every failing field.
//!
//! ### 3. Observability
//! `tracing` is used throughout with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - [`Signal`](framework::Signal): observable value holder.
//! - [`ResourceStore`](framework::ResourceStore): ordered collection of any [`Entity`](framework::Entity).
//! - [`FormField`](framework::FormField): adapter for composite form fields.
//!
//! ### 2. The Domain ([`model`], [`ingredient_set`], [`validation`])
//! - Orders, ingredients, units, delivery and payment methods.
//! - The ingredient list with derived totals and its own validation.
//! - Reusable field rules (required, length, future date).
//!
//! ### 3. The Surfaces ([`store`], [`form`], [`list`], [`clients`])
//! - The order book, the draft form, the list view model.
//! - The notifier and confirmer traits a UI implements.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - [`PotionShop`](lifecycle::PotionShop) wires everything to one store.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod form;
pub mod framework;
pub mod ingredient_set;
pub mod lifecycle;
pub mod list;
pub mod model;
pub mod store;
pub mod validation;
