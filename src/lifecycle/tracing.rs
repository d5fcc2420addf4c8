//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging with the `tracing` crate.
//!
//! The output uses the compact format and hides the module path (`with_target(false)`);
//! store log lines carry an `entity_type` field instead.
//!
//! ```bash
//! # Writes and notifications
//! RUST_LOG=info cargo run
//!
//! # Full payloads, reads and draft resets
//! RUST_LOG=debug cargo run
//!
//! # Every ingredient edit
//! RUST_LOG=trace cargo run
//! ```
//!
//! With `RUST_LOG=info` a placed order reads:
//!
//! ```text
//! INFO submit: Order placed order_number=POT-2025-0001 order_id=pot-3f2a... total_cost=425.0
//! INFO submit:add: Added order_number=POT-2025-0001 entity_type="Order" id=pot-3f2a... size=1
//! INFO submit: Notification order_number=POT-2025-0001 summary=Potion Created! detail=...
//! ```

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
