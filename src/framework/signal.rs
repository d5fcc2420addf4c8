//! # Observable Values
//!
//! [`Signal`] is a single-threaded value holder. Every write replaces the held value
//! wholesale and then notifies observers synchronously, so an observer never sees a
//! half-applied change. Readers get an `Rc` snapshot that stays valid after later writes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Observer<T> = Rc<dyn Fn(&Rc<T>)>;

/// Handle returned by [`Signal::subscribe`], used to detach the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

struct Inner<T> {
    value: Rc<T>,
    observers: Vec<(Subscription, Observer<T>)>,
    next_subscription: u64,
}

/// A shared, observable value.
///
/// Cloning a `Signal` yields another handle to the same value.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.inner.borrow().value)
            .finish()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: Rc::new(value),
                observers: Vec::new(),
                next_subscription: 0,
            })),
        }
    }

    /// Current value as a read-only snapshot.
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.inner.borrow().value)
    }

    /// Runs `f` against the current value without cloning the snapshot handle.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the value and notifies observers.
    pub fn set(&self, value: T) {
        let value = Rc::new(value);
        let observers = {
            let mut inner = self.inner.borrow_mut();
            inner.value = Rc::clone(&value);
            inner
                .observers
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect::<Vec<_>>()
        };
        // The borrow is released here so observers may read (or write) the signal.
        for observer in observers {
            observer(&value);
        }
    }

    /// Computes a new value from the current one and stores it via [`Signal::set`].
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.get());
        self.set(next);
    }

    pub fn subscribe(&self, observer: impl Fn(&Rc<T>) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let subscription = Subscription(inner.next_subscription);
        inner.next_subscription += 1;
        inner.observers.push((subscription, Rc::new(observer)));
        subscription
    }

    /// Detaches an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(s, _)| *s != subscription);
        inner.observers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_replaces_value_and_notifies() {
        let signal = Signal::new(vec![1, 2]);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        signal.subscribe(move |v: &Rc<Vec<i32>>| sink.borrow_mut().push(v.len()));

        let before = signal.get();
        signal.update(|v| v.iter().copied().chain([3]).collect());

        assert_eq!(*before, vec![1, 2], "old snapshot must not change");
        assert_eq!(*signal.get(), vec![1, 2, 3]);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn test_observer_can_read_signal_during_notification() {
        let signal = Signal::new(0u32);
        let observed = Rc::new(Cell::new(0));

        let reader = signal.clone();
        let sink = Rc::clone(&observed);
        signal.subscribe(move |_| sink.set(*reader.get()));

        signal.set(7);
        assert_eq!(observed.get(), 7);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let signal = Signal::new(0u32);
        let calls = Rc::new(Cell::new(0));

        let sink = Rc::clone(&calls);
        let sub = signal.subscribe(move |_| sink.set(sink.get() + 1));

        signal.set(1);
        assert!(signal.unsubscribe(sub));
        assert!(!signal.unsubscribe(sub));
        signal.set(2);

        assert_eq!(calls.get(), 1);
    }
}
