//! UI component library for Daybreak
//!
//! Components are plain structs describing what a view renders. Each one
//! holds a subscription to the state it depends on and re-derives its
//! presentation tokens from the current theme mode on every render call,
//! so a style can never outlive the mode it was computed from. None of
//! them can mutate state directly; the header carries a [`ThemeToggle`]
//! capability for its one control.
//!
//! # Available Components
//!
//! - [`Header`] - App title bar with the theme toggle control
//! - [`Sidebar`] - Static menu list
//! - [`CountDisplay`] - Read-only view over two counters
//! - [`CounterButtons`] - Increment/decrement controls for one counter

use app_state::{CounterStore, ThemeMode, ThemeStore, ThemeToggle};
use tokio::sync::watch;

use crate::theme::{chrome, control, surface, SurfaceStyle};

// =============================================================================
// Header
// =============================================================================

/// Top bar: title, greeting, and the theme toggle control.
pub struct Header {
    mode_rx: watch::Receiver<ThemeMode>,
    toggle: ThemeToggle,
}

impl Header {
    /// Build a header over the given theme store.
    pub fn new(store: &ThemeStore) -> Self {
        Self {
            mode_rx: store.subscribe(),
            toggle: store.toggler(),
        }
    }

    /// App title
    pub fn title(&self) -> &'static str {
        "My App"
    }

    /// Greeting line
    pub fn greeting(&self) -> &'static str {
        "Welcome Guest"
    }

    /// The mode this render pass sees
    pub fn current(&mut self) -> ThemeMode {
        *self.mode_rx.borrow_and_update()
    }

    /// Label on the toggle control, naming the mode it switches to
    pub fn toggle_label(&mut self) -> &'static str {
        match self.current() {
            ThemeMode::Light => "\u{1F319} Dark",
            ThemeMode::Dark => "\u{2600}\u{FE0F} Light",
        }
    }

    /// Tokens for the header bar, derived fresh from the current mode
    pub fn styles(&mut self) -> SurfaceStyle {
        chrome(self.current())
    }

    /// Tokens for the toggle control
    pub fn button_styles(&mut self) -> SurfaceStyle {
        control(self.current())
    }

    /// Activate the toggle control
    pub fn press_toggle(&self) -> ThemeMode {
        self.toggle.toggle()
    }
}

// =============================================================================
// Sidebar
// =============================================================================

/// Static navigation menu.
pub struct Sidebar {
    mode_rx: watch::Receiver<ThemeMode>,
}

impl Sidebar {
    /// Build a sidebar over the given theme store.
    pub fn new(store: &ThemeStore) -> Self {
        Self {
            mode_rx: store.subscribe(),
        }
    }

    /// Menu entries in display order
    pub fn menu_items(&self) -> [&'static str; 4] {
        ["Dashboard", "Settings", "Profile", "Help"]
    }

    /// The mode this render pass sees
    pub fn current(&mut self) -> ThemeMode {
        *self.mode_rx.borrow_and_update()
    }

    /// Tokens for the sidebar, derived fresh from the current mode
    pub fn styles(&mut self) -> SurfaceStyle {
        chrome(self.current())
    }
}

// =============================================================================
// Counters
// =============================================================================

/// Read-only view over two independent counts.
pub struct CountDisplay {
    mode_rx: watch::Receiver<ThemeMode>,
    first_rx: watch::Receiver<i64>,
    second_rx: watch::Receiver<i64>,
}

impl CountDisplay {
    /// Build a display over the theme store and two counters.
    pub fn new(store: &ThemeStore, first: &CounterStore, second: &CounterStore) -> Self {
        Self {
            mode_rx: store.subscribe(),
            first_rx: first.subscribe(),
            second_rx: second.subscribe(),
        }
    }

    /// Both counts as rendered this pass
    pub fn counts(&mut self) -> (i64, i64) {
        (
            *self.first_rx.borrow_and_update(),
            *self.second_rx.borrow_and_update(),
        )
    }

    /// Tokens for the display, derived fresh from the current mode
    pub fn styles(&mut self) -> SurfaceStyle {
        surface(*self.mode_rx.borrow_and_update())
    }
}

/// Increment/decrement controls bound to one counter.
pub struct CounterButtons {
    mode_rx: watch::Receiver<ThemeMode>,
    counter: CounterStore,
}

impl CounterButtons {
    /// Build controls over the given counter.
    pub fn new(store: &ThemeStore, counter: &CounterStore) -> Self {
        Self {
            mode_rx: store.subscribe(),
            counter: counter.clone(),
        }
    }

    /// Press the increment control
    pub fn press_increment(&self) -> i64 {
        self.counter.increment()
    }

    /// Press the decrement control
    pub fn press_decrement(&self) -> i64 {
        self.counter.decrement()
    }

    /// Tokens for the controls, derived fresh from the current mode
    pub fn styles(&mut self) -> SurfaceStyle {
        control(*self.mode_rx.borrow_and_update())
    }
}

// =============================================================================
// Tests
// =============================================================================
