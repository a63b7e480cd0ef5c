//! Firmdex: A Zellij plugin for browsing a remote company directory.
//!
//! Firmdex fetches a static JSON list of companies on load and renders it
//! as a navigable, filterable list:
//! - Case-insensitive name search with a dedicated search mode
//! - Location and industry filters cycled through values derived from the data
//! - A table layout and a card grid layout, switchable at runtime
//! - Light/dark theme persisted across plugin restarts
//! - Asynchronous preference I/O via a Zellij worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Preference  │
//! │ - Theming     │   │ - Backend API │   │   load/save   │
//! │ - Components  │   │               │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Company model and filters (domain/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Company, filters, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON preference persistence
//! - [`worker`]: Background worker for preference I/O
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based structured logging
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/firmdex.wasm" {
//!         data_url "https://example.com/companies.json"
//!         theme_file "/path/to/theme.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, subscribe to events, request permissions
//! 2. **Permission Grant**: post `LoadPreferences` to the worker and issue
//!    the directory fetch via `web_request`
//! 3. **Fetch Result**: the handler verifies the fetch sequence number,
//!    parses the payload, and moves the state to ready or failed
//! 4. **UI Rendering**: compute the view model and render components

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LayoutMode, LoadPhase, SearchFocus};
pub use domain::{Company, FirmdexError, Result};
pub use ui::{Theme, ThemeMode, ThemePair};

use std::collections::BTreeMap;

/// Default URL the company list is fetched from.
pub const DEFAULT_DATA_URL: &str = "https://example.com/companies.json";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/firmdex.wasm" {
///     data_url "https://example.com/companies.json"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the static JSON company list.
    pub data_url: String,

    /// Path to a custom TOML theme file with `[light]` and `[dark]` tables.
    ///
    /// Falls back to the built-in palettes when unset or unloadable.
    pub theme_file: Option<String>,

    /// Log level for the file-based tracing output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing or empty values fall back to defaults.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let data_url = config
            .get("data_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());

        Self {
            data_url,
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the theme pair loaded from the configured
/// file (falling back to the built-in palettes) and the load phase set to
/// loading. The company list itself arrives later via the fetch lifecycle.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing firmdex plugin");

    let themes = config.theme_file.as_ref().map_or_else(ThemePair::default, |theme_file| {
        ThemePair::from_file(theme_file).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using built-in palettes");
            ThemePair::default()
        })
    });

    AppState::new(themes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_the_default_url() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn config_reads_all_options() {
        let mut map = BTreeMap::new();
        map.insert("data_url".to_string(), "https://corp.example/list.json".to_string());
        map.insert("theme_file".to_string(), "/tmp/theme.toml".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.data_url, "https://corp.example/list.json");
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_data_url_is_treated_as_unset() {
        let mut map = BTreeMap::new();
        map.insert("data_url".to_string(), "  ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    fn initialize_starts_in_the_loading_phase() {
        let state = initialize(&Config::default());
        assert_eq!(state.load, LoadPhase::Loading);
        assert!(state.companies.is_empty());
    }
}
