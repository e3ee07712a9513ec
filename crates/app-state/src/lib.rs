//! Application state management for Daybreak
//!
//! This crate provides the reactive stores the UI reads from: the theme
//! mode store with its toggle capability, and the integer counter store.
//! Stores are constructed by the owning subtree and handed down; there
//! are no globals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counter;
pub mod theme;

pub use counter::CounterStore;
pub use theme::{ThemeEvent, ThemeMode, ThemeStore, ThemeToggle};
