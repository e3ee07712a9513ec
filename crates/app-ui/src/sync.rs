//! Theme/navigation synchronization
//!
//! Keeps the `mode` search parameter equal to the serialized theme mode so
//! the shareable locator reflects the theme. The bridge holds no state of
//! its own: the store is authoritative and the parameter is a mirror.
//!
//! On mount the direction is reversed once: a valid `mode` entry already
//! present in the navigable state seeds the store. After that, every store
//! change is written back to the parameter by an observer task. The watch
//! channel coalesces bursts, so a run of rapid toggles mirrors only the
//! final value.

use app_state::{ThemeMode, ThemeStore};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::navigation::Navigator;

/// Search parameter key carrying the theme mode
pub const MODE_PARAM: &str = "mode";

/// Handle to a mounted bridge. Dropping it stops the observer task.
pub struct BridgeHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl BridgeHandle {
    /// Stop the observer task explicitly
    pub fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for BridgeHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Bridge between a [`ThemeStore`] and the navigable state.
pub struct ThemeParamBridge;

impl ThemeParamBridge {
    /// Seed the store from an existing `mode` parameter.
    ///
    /// A value that is not exactly `"light"` or `"dark"` is discarded and
    /// the store keeps its current mode; an absent key writes nothing.
    pub fn seed(store: &ThemeStore, nav: &Navigator) {
        if let Some(raw) = nav.param(MODE_PARAM) {
            match raw.parse::<ThemeMode>() {
                Ok(mode) => store.set(mode),
                Err(_) => {
                    tracing::debug!(value = %raw, "discarding unrecognized mode parameter");
                }
            }
        }
    }

    /// Seed the store, then mirror every subsequent store change into the
    /// `mode` parameter.
    ///
    /// Mirror writes happen on a later scheduling turn than the toggle
    /// that caused them, in toggle order, and replace only the `mode`
    /// entry. Must be called from within a tokio runtime.
    pub fn mount(store: &ThemeStore, nav: &Navigator) -> BridgeHandle {
        Self::seed(store, nav);

        let mut mode_rx = store.subscribe();
        let nav = nav.clone();
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = mode_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let mode = *mode_rx.borrow_and_update();
                        nav.set_param(MODE_PARAM, mode.as_str());
                        tracing::debug!(mode = %mode, "mirrored theme to navigation state");
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        BridgeHandle {
            stop_tx: Some(stop_tx),
            _handle: handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bounded wait for the observer task to catch up.
    async fn settle(nav: &Navigator, want: &str) -> bool {
        for _ in 0..100 {
            if nav.param(MODE_PARAM).as_deref() == Some(want) {
                return true;
            }
            tokio::task::yield_now().await;
        }
        false
    }

    #[tokio::test]
    async fn test_seed_from_valid_param() {
        let store = ThemeStore::new();
        let nav = Navigator::from_location("/?mode=dark");

        ThemeParamBridge::seed(&store, &nav);
        assert_eq!(store.get(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_seed_discards_invalid_param() {
        let store = ThemeStore::new();
        let nav = Navigator::from_location("/?mode=blue");

        ThemeParamBridge::seed(&store, &nav);
        assert_eq!(store.get(), ThemeMode::Light);
        // The bogus entry is left alone; seeding never writes.
        assert_eq!(nav.param(MODE_PARAM), Some("blue".to_string()));
    }

    #[tokio::test]
    async fn test_seed_with_absent_param_writes_nothing() {
        let store = ThemeStore::new();
        let nav = Navigator::from_location("/");

        ThemeParamBridge::seed(&store, &nav);
        assert_eq!(store.get(), ThemeMode::Light);
        assert!(nav.param(MODE_PARAM).is_none());
    }

    #[tokio::test]
    async fn test_mount_mirrors_toggle() {
        let store = ThemeStore::new();
        let nav = Navigator::new();
        let _bridge = ThemeParamBridge::mount(&store, &nav);

        store.toggle();
        assert!(settle(&nav, "dark").await);
    }

    #[tokio::test]
    async fn test_mirror_write_lands_on_a_later_turn() {
        let store = ThemeStore::new();
        let nav = Navigator::new();
        let _bridge = ThemeParamBridge::mount(&store, &nav);

        store.toggle();
        // Synchronously after the toggle the parameter is still untouched.
        assert!(nav.param(MODE_PARAM).is_none());
        assert!(settle(&nav, "dark").await);
    }

    #[tokio::test]
    async fn test_rapid_toggles_mirror_final_value() {
        let store = ThemeStore::new();
        let nav = Navigator::new();
        let _bridge = ThemeParamBridge::mount(&store, &nav);

        for _ in 0..5 {
            store.toggle();
        }
        assert_eq!(store.get(), ThemeMode::Dark);
        assert!(settle(&nav, "dark").await);
        assert_eq!(nav.param(MODE_PARAM), Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_mirror_preserves_other_params() {
        let store = ThemeStore::new();
        let nav = Navigator::from_location("/?q=rust");
        let _bridge = ThemeParamBridge::mount(&store, &nav);

        store.toggle();
        assert!(settle(&nav, "dark").await);
        assert_eq!(nav.param("q"), Some("rust".to_string()));
    }

    #[tokio::test]
    async fn test_stopped_bridge_stops_mirroring() {
        let store = ThemeStore::new();
        let nav = Navigator::new();
        let bridge = ThemeParamBridge::mount(&store, &nav);

        store.toggle();
        assert!(settle(&nav, "dark").await);

        bridge.stop();
        tokio::task::yield_now().await;

        store.toggle();
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
        assert_eq!(nav.param(MODE_PARAM), Some("dark".to_string()));
    }
}
