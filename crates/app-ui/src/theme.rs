//! Presentation tokens for Daybreak
//!
//! This module maps a [`ThemeMode`] to the closed set of presentation
//! tokens the views render with. The mapping is a pure function: every
//! call derives the tokens from the mode passed in, so a view that
//! re-evaluates after a mode change can never observe a stale style.
//!
//! # Usage
//!
//! ```rust
//! use app_state::ThemeMode;
//! use app_ui::theme::surface;
//!
//! let style = surface(ThemeMode::Dark);
//! assert_eq!(style.background, "#111827");
//! ```

use app_state::ThemeMode;
use serde::Serialize;

// =============================================================================
// Color Types
// =============================================================================

/// A color as an RGB hex string (e.g. "#FFFFFF")
pub type Color = &'static str;

/// Grayscale stops shared by both modes
pub mod gray {
    /// White
    pub const WHITE: &str = "#FFFFFF";
    /// Gray 50
    pub const GRAY_50: &str = "#F9FAFB";
    /// Gray 100
    pub const GRAY_100: &str = "#F3F4F6";
    /// Gray 200
    pub const GRAY_200: &str = "#E5E7EB";
    /// Gray 300
    pub const GRAY_300: &str = "#D1D5DB";
    /// Gray 600
    pub const GRAY_600: &str = "#4B5563";
    /// Gray 700
    pub const GRAY_700: &str = "#374151";
    /// Gray 800
    pub const GRAY_800: &str = "#1F2937";
    /// Gray 900
    pub const GRAY_900: &str = "#111827";
}

// =============================================================================
// Surface Styles
// =============================================================================

/// The closed token set a surface renders with.
///
/// Every field is derived from the mode; there are no free-form styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurfaceStyle {
    /// Background color
    pub background: Color,
    /// Foreground text color
    pub text: Color,
    /// Background on hover
    pub hover: Color,
    /// Border color
    pub border: Color,
}

/// Tokens for the main page surface
pub fn surface(mode: ThemeMode) -> SurfaceStyle {
    match mode {
        ThemeMode::Light => SurfaceStyle {
            background: gray::WHITE,
            text: gray::GRAY_800,
            hover: gray::GRAY_100,
            border: gray::GRAY_200,
        },
        ThemeMode::Dark => SurfaceStyle {
            background: gray::GRAY_900,
            text: gray::GRAY_100,
            hover: gray::GRAY_700,
            border: gray::GRAY_700,
        },
    }
}

/// Tokens for raised chrome (header bar, sidebar)
pub fn chrome(mode: ThemeMode) -> SurfaceStyle {
    match mode {
        ThemeMode::Light => SurfaceStyle {
            background: gray::GRAY_50,
            text: gray::GRAY_800,
            hover: gray::GRAY_200,
            border: gray::GRAY_200,
        },
        ThemeMode::Dark => SurfaceStyle {
            background: gray::GRAY_800,
            text: gray::GRAY_100,
            hover: gray::GRAY_600,
            border: gray::GRAY_700,
        },
    }
}

/// Tokens for interactive controls (buttons, toggles)
pub fn control(mode: ThemeMode) -> SurfaceStyle {
    match mode {
        ThemeMode::Light => SurfaceStyle {
            background: gray::GRAY_200,
            text: gray::GRAY_800,
            hover: gray::GRAY_300,
            border: gray::GRAY_300,
        },
        ThemeMode::Dark => SurfaceStyle {
            background: gray::GRAY_700,
            text: gray::GRAY_100,
            hover: gray::GRAY_600,
            border: gray::GRAY_600,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
