//! # Test Doubles
//!
//! Utilities for exercising the form, list and store without a UI.
//!
//! - [`FixedClock`]: a clock that only moves when told to.
//! - [`RecordingNotifier`]: keeps every notification for later assertions.
//! - [`ScriptedConfirmer`]: answers confirmation prompts from a script and records them.
//!
//! # Example
//! ```ignore
//! let notifier = RecordingNotifier::new();
//! let mut form = OrderForm::new(store.clone(), Rc::new(notifier.clone()), clock, &config);
//! form.submit();
//! notifier.verify_last(Severity::Error);
//! ```

use chrono::{DateTime, Duration, Utc};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::clients::{ConfirmationRequest, Confirmer, Notification, Notifier, Severity};
use crate::framework::Clock;

// =============================================================================
// CLOCK
// =============================================================================

/// A clock frozen at a chosen instant. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// A notifier that records what it receives. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.borrow().last().cloned()
    }

    /// Panics unless the most recent notification has the given severity.
    pub fn verify_last(&self, severity: Severity) -> Notification {
        match self.last() {
            Some(n) if n.severity == severity => n,
            Some(n) => panic!("Expected {:?} notification, got {:?}", severity, n),
            None => panic!("Expected {:?} notification, got none", severity),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.borrow_mut().push(notification);
    }
}

// =============================================================================
// CONFIRMER
// =============================================================================

/// A confirmer that replays scripted answers in order.
///
/// Once the script runs out every further prompt is rejected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirmer {
    answers: Rc<RefCell<VecDeque<bool>>>,
    asked: Rc<RefCell<Vec<ConfirmationRequest>>>,
}

impl ScriptedConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the user's answer to the next prompt.
    pub fn then_answer(self, accept: bool) -> Self {
        self.answers.borrow_mut().push_back(accept);
        self
    }

    pub fn asked(&self) -> Vec<ConfirmationRequest> {
        self.asked.borrow().clone()
    }

    /// Panics if scripted answers were never consumed.
    pub fn verify(&self) {
        let left = self.answers.borrow().len();
        assert_eq!(left, 0, "{} scripted answer(s) were never used", left);
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, request: &ConfirmationRequest, on_accept: &mut dyn FnMut()) {
        self.asked.borrow_mut().push(request.clone());
        let accept = self.answers.borrow_mut().pop_front().unwrap_or(false);
        if accept {
            on_accept();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_advances_shared_instant() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        let other = clock.clone();
        other.advance(Duration::hours(2));
        assert_eq!(clock.now(), start + Duration::hours(2));
    }

    #[test]
    fn test_scripted_confirmer_rejects_when_script_runs_out() {
        let confirmer = ScriptedConfirmer::new().then_answer(true);
        let request = ConfirmationRequest {
            header: "Delete Confirmation".into(),
            message: "Sure?".into(),
        };
        let mut accepted = 0;
        confirmer.confirm(&request, &mut || accepted += 1);
        confirmer.confirm(&request, &mut || accepted += 1);

        assert_eq!(accepted, 1);
        assert_eq!(confirmer.asked().len(), 2);
        confirmer.verify();
    }
}
