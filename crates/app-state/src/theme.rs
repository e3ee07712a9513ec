//! Theme state management
//!
//! This module owns the current color mode (light or dark) and provides
//! reactive access to it. A [`ThemeStore`] is created by the UI subtree
//! that needs theming and handed down explicitly; there is no global
//! instance. Views subscribe through a watch channel and re-derive their
//! presentation whenever the mode flips.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// The two-valued color mode governing presentation.
///
/// There is no "unset" state: a store always holds exactly one of the two
/// values, starting from [`ThemeMode::Light`] unless seeded otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Pure; applying it twice returns the input.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The wire representation, exactly `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Whether this is the dark mode.
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("unknown theme mode: {}", s)),
        }
    }
}

/// Events broadcast when the theme changes
#[derive(Debug, Clone)]
pub enum ThemeEvent {
    /// The mode was flipped by a toggle
    Toggled(ThemeMode),
    /// The mode was set directly (e.g. seeded from navigation state)
    Set(ThemeMode),
}

struct StoreInner {
    mode_tx: watch::Sender<ThemeMode>,
    events_tx: broadcast::Sender<ThemeEvent>,
}

/// Reactive store for the current [`ThemeMode`].
///
/// The store is cheap to clone; clones share the same underlying value, so
/// a subtree can pass it to as many views as it likes while keeping a
/// single source of truth. Views read via [`ThemeStore::get`] or a
/// subscription; they mutate only through [`ThemeStore::toggle`], usually
/// behind a [`ThemeToggle`] capability so that display code cannot reach
/// the rest of the store.
///
/// # Example
///
/// ```
/// use app_state::theme::{ThemeMode, ThemeStore};
///
/// let store = ThemeStore::new();
/// assert_eq!(store.get(), ThemeMode::Light);
///
/// let mut rx = store.subscribe();
/// store.toggle();
/// assert_eq!(*rx.borrow(), ThemeMode::Dark);
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store holding the default mode.
    pub fn new() -> Self {
        Self::with_mode(ThemeMode::default())
    }

    /// Create a store holding the given mode.
    pub fn with_mode(mode: ThemeMode) -> Self {
        let (mode_tx, _) = watch::channel(mode);
        let (events_tx, _) = broadcast::channel(16);

        ThemeStore {
            inner: Arc::new(StoreInner { mode_tx, events_tx }),
        }
    }

    /// The current mode. No side effects.
    pub fn get(&self) -> ThemeMode {
        *self.inner.mode_tx.borrow()
    }

    /// Flip the mode and return the new value.
    ///
    /// Every live subscription observes the new value before its next
    /// read. The operation is total; it cannot fail.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.get().toggled();
        self.inner.mode_tx.send_replace(next);
        let _ = self.inner.events_tx.send(ThemeEvent::Toggled(next));
        tracing::debug!(mode = %next, "theme toggled");
        next
    }

    /// Set the mode directly. Subscribers are only notified on an actual
    /// change.
    pub fn set(&self, mode: ThemeMode) {
        if self.get() == mode {
            return;
        }
        self.inner.mode_tx.send_replace(mode);
        let _ = self.inner.events_tx.send(ThemeEvent::Set(mode));
        tracing::debug!(mode = %mode, "theme set");
    }

    /// Subscribe to mode changes.
    ///
    /// Dropping the receiver deregisters the subscription; a dropped
    /// subscriber is never woken again, while `get()` and any remaining
    /// subscriptions keep working. Subscribing the same consumer twice
    /// yields two independent subscriptions.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.inner.mode_tx.subscribe()
    }

    /// Subscribe to the theme event feed.
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.inner.events_tx.subscribe()
    }

    /// A capability handle exposing only the toggle operation.
    pub fn toggler(&self) -> ThemeToggle {
        ThemeToggle { store: self.clone() }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Toggle-only capability handed down to views.
///
/// Views request a mode flip through this handle; they never construct or
/// mutate a store themselves.
#[derive(Clone)]
pub struct ThemeToggle {
    store: ThemeStore,
}

impl ThemeToggle {
    /// Request a mode flip, returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        self.store.toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_toggle_parity() {
        // N toggles from Light land on Light iff N is even.
        for n in 0..8 {
            let store = ThemeStore::new();
            for _ in 0..n {
                store.toggle();
            }
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(store.get(), expected);
        }
    }

    #[test]
    fn test_toggle_returns_new_mode() {
        let store = ThemeStore::new();
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_round_trips_as_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn test_invalid_mode_string_rejected() {
        assert!("blue".parse::<ThemeMode>().is_err());
        assert!("Light".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }

    #[test]
    fn test_subscribers_see_new_value_before_next_read() {
        let store = ThemeStore::new();
        let rx1 = store.subscribe();
        let rx2 = store.subscribe();

        store.toggle();

        assert_eq!(*rx1.borrow(), ThemeMode::Dark);
        assert_eq!(*rx2.borrow(), ThemeMode::Dark);
    }

    #[test]
    fn test_new_subscriber_sees_current_value() {
        let store = ThemeStore::new();
        store.toggle();

        let rx = store.subscribe();
        assert_eq!(*rx.borrow(), ThemeMode::Dark);
    }

    #[test]
    fn test_dropped_subscription_is_a_noop() {
        let store = ThemeStore::new();
        let dropped = store.subscribe();
        let remaining = store.subscribe();

        drop(dropped);
        store.toggle();

        assert_eq!(store.get(), ThemeMode::Dark);
        assert_eq!(*remaining.borrow(), ThemeMode::Dark);
    }

    #[test]
    fn test_duplicate_subscriptions_are_independent() {
        let store = ThemeStore::new();
        let mut first = store.subscribe();
        let mut second = store.subscribe();

        store.toggle();

        assert!(first.has_changed().unwrap());
        assert_eq!(*first.borrow_and_update(), ThemeMode::Dark);
        // Consuming one subscription leaves the other pending.
        assert!(second.has_changed().unwrap());
        assert_eq!(*second.borrow_and_update(), ThemeMode::Dark);
    }

    #[test]
    fn test_set_skips_notification_when_unchanged() {
        let store = ThemeStore::new();
        let mut rx = store.subscribe();

        store.set(ThemeMode::Light);
        assert!(!rx.has_changed().unwrap());

        store.set(ThemeMode::Dark);
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::new();
        let clone = store.clone();

        clone.toggle();
        assert_eq!(store.get(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_capability() {
        let store = ThemeStore::new();
        let toggle = store.toggler();

        assert_eq!(toggle.toggle(), ThemeMode::Dark);
        assert_eq!(store.get(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_event_feed() {
        let store = ThemeStore::new();
        let mut events = store.subscribe_events();

        store.toggle();
        store.set(ThemeMode::Light);

        assert!(matches!(
            events.recv().await.unwrap(),
            ThemeEvent::Toggled(ThemeMode::Dark)
        ));
        assert!(matches!(
            events.recv().await.unwrap(),
            ThemeEvent::Set(ThemeMode::Light)
        ));
    }
}
