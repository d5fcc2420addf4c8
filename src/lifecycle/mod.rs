//! # Shop Lifecycle & Wiring
//!
//! The pieces of the shop are simple on their own; this module puts them together.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - Load [`ShopConfig`](crate::config::ShopConfig) from the environment
//! 2. **Wiring** - Hand one shared [`OrderStore`](crate::store::OrderStore) to the form and the list
//! 3. **Collaborators** - Inject the clock and the notifier
//! 4. **Observability** - Initialise tracing via [`setup_tracing`]
//!
//! ```rust,ignore
//! setup_tracing();
//! let mut shop = PotionShop::from_env()?;
//! shop.form.set_ordered_by("Merlin the Wise");
//! // ...
//! shop.form.submit()?;
//! ```

pub mod potion_shop;
pub mod tracing;

pub use potion_shop::*;
pub use self::tracing::*;
