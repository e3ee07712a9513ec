//! Daybreak application shell
//!
//! Wires the member crates together: builds the stores, mounts the
//! theme/navigation bridge, and constructs the component tree the way the
//! running app does. Integration tests drive the whole stack through this
//! shell.

#![warn(missing_docs)]
#![warn(clippy::all)]

use app_state::{CounterStore, ThemeEvent, ThemeMode, ThemeStore};
use app_ui::navigation::{Navigator, Route};
use app_ui::sync::{BridgeHandle, ThemeParamBridge};
use app_ui::{CountDisplay, CounterButtons, Header, Sidebar};
use tokio::sync::broadcast;

/// A fully wired application instance.
///
/// Owns the stores, the navigator, the mounted bridge, and the component
/// tree. Dropping the app unmounts the bridge with it.
pub struct App {
    theme: ThemeStore,
    navigator: Navigator,
    _bridge: BridgeHandle,
    /// Top bar
    pub header: Header,
    /// Menu
    pub sidebar: Sidebar,
    /// Counter readout
    pub display: CountDisplay,
    /// Controls for the first counter
    pub first_buttons: CounterButtons,
    /// Controls for the second counter
    pub second_buttons: CounterButtons,
}

impl App {
    /// Mount the app at the given shareable locator.
    ///
    /// A valid `mode` parameter in the locator seeds the theme; anything
    /// else leaves the default light mode. Must be called from within a
    /// tokio runtime.
    pub fn mount(location: &str) -> Self {
        let navigator = Navigator::from_location(location);
        let theme = ThemeStore::new();
        let bridge = ThemeParamBridge::mount(&theme, &navigator);

        let first = CounterStore::new();
        let second = CounterStore::new();

        tracing::info!(location, "app mounted");

        Self {
            header: Header::new(&theme),
            sidebar: Sidebar::new(&theme),
            display: CountDisplay::new(&theme, &first, &second),
            first_buttons: CounterButtons::new(&theme, &first),
            second_buttons: CounterButtons::new(&theme, &second),
            theme,
            navigator,
            _bridge: bridge,
        }
    }

    /// The current theme mode
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.get()
    }

    /// Flip the theme, as the header's control does
    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Subscribe to the theme event feed.
    ///
    /// Embedders hang cross-cutting observers (logging, analytics) off
    /// this rather than polling the mode.
    pub fn theme_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.theme.subscribe_events()
    }

    /// The current route
    pub fn route(&self) -> Route {
        self.navigator.current_route()
    }

    /// Navigate to another route
    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// The current shareable locator
    pub fn location(&self) -> String {
        self.navigator.location()
    }
}
