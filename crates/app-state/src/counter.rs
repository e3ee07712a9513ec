//! Counter state
//!
//! Small reactive integer store built in the same shape as
//! [`crate::theme::ThemeStore`]. The demo screens create two independent
//! instances and feed them to the count display.

use std::sync::Arc;
use tokio::sync::watch;

/// Reactive store for a single integer count.
///
/// Cheap to clone; clones share the same value. Arithmetic saturates at
/// the `i64` bounds rather than wrapping.
#[derive(Clone)]
pub struct CounterStore {
    value_tx: Arc<watch::Sender<i64>>,
}

impl CounterStore {
    /// Create a store starting at zero.
    pub fn new() -> Self {
        Self::with_value(0)
    }

    /// Create a store starting at the given value.
    pub fn with_value(value: i64) -> Self {
        let (value_tx, _) = watch::channel(value);
        CounterStore {
            value_tx: Arc::new(value_tx),
        }
    }

    /// The current count.
    pub fn get(&self) -> i64 {
        *self.value_tx.borrow()
    }

    /// Add one, returning the new count.
    pub fn increment(&self) -> i64 {
        let next = self.get().saturating_add(1);
        self.value_tx.send_replace(next);
        next
    }

    /// Subtract one, returning the new count.
    pub fn decrement(&self) -> i64 {
        let next = self.get().saturating_sub(1);
        self.value_tx.send_replace(next);
        next
    }

    /// Subscribe to count changes. Dropping the receiver deregisters.
    pub fn subscribe(&self) -> watch::Receiver<i64> {
        self.value_tx.subscribe()
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(CounterStore::new().get(), 0);
    }

    #[test]
    fn test_increment_decrement() {
        let counter = CounterStore::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_decrement_goes_negative() {
        let counter = CounterStore::new();
        assert_eq!(counter.decrement(), -1);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let counter = CounterStore::with_value(i64::MAX);
        assert_eq!(counter.increment(), i64::MAX);

        let counter = CounterStore::with_value(i64::MIN);
        assert_eq!(counter.decrement(), i64::MIN);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = CounterStore::new();
        let b = CounterStore::new();

        a.increment();
        a.increment();
        b.decrement();

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), -1);
    }

    #[test]
    fn test_subscription_sees_changes() {
        let counter = CounterStore::new();
        let mut rx = counter.subscribe();

        counter.increment();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
    }
}
