//! Interfaces to the presentation collaborators.
//!
//! The shop never draws toasts or dialogs itself. It hands [`Notification`]s to a
//! [`Notifier`] and asks a [`Confirmer`] before destructive actions.

pub mod confirmer;
pub mod notifier;

pub use confirmer::*;
pub use notifier::*;
