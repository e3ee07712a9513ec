//! User interface for Daybreak
//!
//! This crate provides the UI layer: navigation, theme-aware components,
//! presentation tokens, and the bridge that mirrors the theme mode into
//! the shareable navigation state.
//!
//! # Modules
//!
//! - [`theme`] - Presentation token mapping for light and dark modes
//! - [`components`] - UI component library
//! - [`navigation`] - Routes, search parameters, and the shared navigator
//! - [`sync`] - Theme/search-parameter bridge
//!
//! # Example
//!
//! ```rust
//! use app_state::{ThemeMode, ThemeStore};
//! use app_ui::navigation::Navigator;
//! use app_ui::sync::ThemeParamBridge;
//!
//! let store = ThemeStore::new();
//! let nav = Navigator::from_location("/?mode=dark");
//!
//! ThemeParamBridge::seed(&store, &nav);
//! assert_eq!(store.get(), ThemeMode::Dark);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod sync;
pub mod theme;

// Re-export commonly used types
pub use components::{CountDisplay, CounterButtons, Header, Sidebar};
pub use navigation::{NavigationState, Navigator, Route, Router, SearchParams};
pub use sync::{BridgeHandle, ThemeParamBridge, MODE_PARAM};
pub use theme::{chrome, control, surface, SurfaceStyle};
