//! Worker thread implementation for asynchronous preference I/O.
//!
//! This module implements the Zellij worker thread interface, handling all
//! preference file reads and writes off the main plugin rendering loop.

use crate::domain::error::{FirmdexError, Result};
use crate::infrastructure::paths;
use crate::storage::backend::PreferenceStore;
use crate::storage::JsonPreferences;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling preference operations.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The preference store is
/// initialized lazily on first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct FirmdexWorker {
    /// Preference store, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn PreferenceStore>>,
}

impl FirmdexWorker {
    /// Creates a new worker with an initialized preference store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("preferences.json");
        let store: Box<dyn PreferenceStore> = Box::new(JsonPreferences::new(path)?);
        Ok(Self { store: Some(store) })
    }

    /// Returns a mutable reference to the store, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has not been initialized yet.
    fn get_store(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| FirmdexError::Worker("preference store not initialized".to_string()))
    }

    /// Helper for handling store operation results with consistent logging.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadPreferences` message.
    ///
    /// An absent record resolves to the light theme so a fresh install gets
    /// a deterministic response.
    fn handle_load_preferences(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load preferences",
            self.get_store().and_then(|store| store.load()),
            |record| {
                let theme = record.map_or_else(|| "light".to_string(), |r| r.theme);
                tracing::debug!(theme = %theme, "preferences loaded");
                WorkerResponse::PreferencesLoaded { theme }
            },
        )
    }

    /// Handles the `SaveTheme` message.
    fn handle_save_theme(&mut self, value: String) -> WorkerResponse {
        Self::handle_store_result(
            "save theme",
            self.get_store().and_then(|store| store.save_theme(&value)),
            |()| {
                tracing::debug!(theme = %value, "theme saved");
                WorkerResponse::ThemeSaved { theme: value }
            },
        )
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadPreferences => self.handle_load_preferences(),
            WorkerMessage::SaveTheme { value } => self.handle_save_theme(value),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for FirmdexWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the preference store if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.store = worker.store;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize preference store");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize preference store: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::PreferenceRecord;

    /// In-memory store so handler logic can be tested without a filesystem.
    #[derive(Default)]
    struct FakeStore {
        record: Option<PreferenceRecord>,
        fail_saves: bool,
    }

    impl PreferenceStore for FakeStore {
        fn load(&self) -> Result<Option<PreferenceRecord>> {
            Ok(self.record.clone())
        }

        fn save_theme(&mut self, theme: &str) -> Result<()> {
            if self.fail_saves {
                return Err(FirmdexError::Storage("disk full".to_string()));
            }
            self.record = Some(PreferenceRecord::new(theme));
            Ok(())
        }
    }

    fn worker_with(store: FakeStore) -> FirmdexWorker {
        FirmdexWorker {
            store: Some(Box::new(store)),
        }
    }

    #[test]
    fn load_preferences_defaults_to_light_when_absent() {
        let mut worker = worker_with(FakeStore::default());

        let response = worker.handle_message(WorkerMessage::load_preferences());
        assert_eq!(
            response,
            WorkerResponse::PreferencesLoaded {
                theme: "light".to_string()
            }
        );
    }

    #[test]
    fn load_preferences_returns_stored_theme() {
        let mut worker = worker_with(FakeStore {
            record: Some(PreferenceRecord::new("dark")),
            fail_saves: false,
        });

        let response = worker.handle_message(WorkerMessage::load_preferences());
        assert_eq!(
            response,
            WorkerResponse::PreferencesLoaded {
                theme: "dark".to_string()
            }
        );
    }

    #[test]
    fn save_theme_acknowledges_the_value() {
        let mut worker = worker_with(FakeStore::default());

        let response = worker.handle_message(WorkerMessage::save_theme("dark".to_string()));
        assert_eq!(
            response,
            WorkerResponse::ThemeSaved {
                theme: "dark".to_string()
            }
        );
    }

    #[test]
    fn save_failure_becomes_an_error_response() {
        let mut worker = worker_with(FakeStore {
            record: None,
            fail_saves: true,
        });

        let response = worker.handle_message(WorkerMessage::save_theme("dark".to_string()));
        match response {
            WorkerResponse::Error { message } => assert!(message.contains("disk full")),
            other => panic!("expected error response, got {other:?}"),
        }
    }
}
