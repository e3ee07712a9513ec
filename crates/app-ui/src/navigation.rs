//! Navigation system for Daybreak
//!
//! This module provides the navigable application state:
//! - Route definitions with URL paths
//! - Search parameters carried in the shareable locator
//! - A router for parsing paths (with query strings) to routes
//! - A shared [`Navigator`] handle the rest of the app reads and writes

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// =============================================================================
// Search Parameters
// =============================================================================

/// Key/value entries carried in the query portion of the locator.
///
/// Writes replace per key and leave unrelated entries untouched. Encoding
/// is deterministic (keys in sorted order) so a locator round-trips through
/// [`SearchParams::encode`] and [`SearchParams::parse`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchParams {
    entries: BTreeMap<String, String>,
}

impl SearchParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Pairs without `=`, pairs with an empty key, and pairs that fail to
    /// decode are skipped.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if let (Ok(key), Ok(value)) =
                    (urlencoding::decode(key), urlencoding::decode(value))
                {
                    if key.is_empty() {
                        continue;
                    }
                    params.entries.insert(key.into_owned(), value.into_owned());
                }
            }
        }
        params
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set the value for a key, replacing any existing entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a key, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Whether no entries are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Encode as a query string (without the leading `?`)
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Home screen
    #[default]
    Home,
    /// About screen
    About,
    /// Not found
    NotFound,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::NotFound => "/not-found",
        }
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::NotFound => "Not Found",
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Parses a shareable locator into a route plus its search parameters.
pub struct Router;

impl Router {
    /// Match a locator like `/about?mode=dark` to a route.
    ///
    /// Unknown pathnames fall back to [`Route::NotFound`]; the query
    /// portion is parsed regardless so its entries survive the miss.
    pub fn match_path(path: &str) -> (Route, SearchParams) {
        let (pathname, query) = match path.find('?') {
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => (path, ""),
        };

        let params = SearchParams::parse(query);

        let route = match pathname.trim_end_matches('/') {
            "" => Route::Home,
            "/about" => Route::About,
            _ => Route::NotFound,
        };

        (route, params)
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigable state: the current route and its search parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current route
    pub route: Route,
    /// Current search parameters
    pub params: SearchParams,
}

/// Shared handle to the navigable state.
///
/// Clones share the same underlying state. This is the one object the
/// theme bridge writes to; everything else treats it as read-mostly.
#[derive(Clone, Default)]
pub struct Navigator {
    state: Arc<RwLock<NavigationState>>,
}

impl Navigator {
    /// Create a navigator at the home route with no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator from a shareable locator
    pub fn from_location(location: &str) -> Self {
        let (route, params) = Router::match_path(location);
        Self {
            state: Arc::new(RwLock::new(NavigationState { route, params })),
        }
    }

    /// The current route
    pub fn current_route(&self) -> Route {
        self.state.read().route
    }

    /// Navigate to a route, keeping the current search parameters
    pub fn navigate(&self, route: Route) {
        self.state.write().route = route;
        tracing::debug!(path = route.to_path(), "navigated");
    }

    /// Get a search parameter value
    pub fn param(&self, key: &str) -> Option<String> {
        self.state.read().params.get(key).map(str::to_owned)
    }

    /// Set a search parameter, replacing any existing entry for the key
    /// and leaving other entries untouched
    pub fn set_param(&self, key: impl Into<String>, value: impl Into<String>) {
        self.state.write().params.insert(key, value);
    }

    /// Snapshot of the current search parameters
    pub fn params(&self) -> SearchParams {
        self.state.read().params.clone()
    }

    /// The current shareable locator, path plus encoded parameters
    pub fn location(&self) -> String {
        let state = self.state.read();
        if state.params.is_empty() {
            state.route.to_path().to_string()
        } else {
            format!("{}?{}", state.route.to_path(), state.params.encode())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
