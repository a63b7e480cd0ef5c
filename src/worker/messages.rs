//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that owns the preference
//! file. Messages are serialized to JSON by the Zellij runtime when crossing
//! the thread boundary.

use serde::{Deserialize, Serialize};

impl WorkerMessage {
    /// Creates a request to load the persisted preferences.
    pub const fn load_preferences() -> Self {
        Self::LoadPreferences
    }

    /// Creates a request to persist the given theme value.
    pub const fn save_theme(value: String) -> Self {
        Self::SaveTheme { value }
    }
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to a preference-store operation that should be
/// performed off the render thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the persisted preferences from disk.
    LoadPreferences,

    /// Persist a new theme preference.
    SaveTheme {
        /// Theme value to store, `"light"` or `"dark"`.
        value: String,
    },
}

/// Responses sent from the worker thread back to the main thread.
///
/// Each variant corresponds to the completion of a worker operation, either
/// successfully with result data or with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Preferences were read from disk (or defaulted when absent).
    PreferencesLoaded {
        /// Stored theme value; anything other than `"dark"` resolves to light.
        theme: String,
    },

    /// The theme preference was written to disk.
    ThemeSaved {
        /// The value that was persisted.
        theme: String,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::save_theme("dark".to_string());
        let json = serde_json::to_string(&message).unwrap();
        let parsed: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn responses_round_trip_through_json() {
        let response = WorkerResponse::PreferencesLoaded {
            theme: "light".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: WorkerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
