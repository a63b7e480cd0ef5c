//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Firmdex
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle, and registers the worker
//! thread that owns preference I/O.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `WebRequestResult`
//!    events
//! 3. **Permission Grant**: Load persisted preferences and issue the
//!    directory fetch
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected company's website
//! - `/`: Enter search mode
//! - `f`: Cycle location filter
//! - `i`: Cycle industry filter
//! - `v`: Toggle table/card layout
//! - `t`: Toggle light/dark theme
//! - `r`: Retry a failed load
//! - `q`: Close plugin
//!
//! In search mode:
//! - Printable characters: Extend the query
//! - `Enter`: Move focus to the results
//! - `Esc`: Exit search and clear the query
//! - `/`: Return to the search input (from results focus)

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use firmdex::worker::{FirmdexWorker, WorkerMessage, WorkerResponse};
use firmdex::{handle_event, Action, Config, Event, InputMode, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(FirmdexWorker, firmdex_worker, FIRMDEX_WORKER);

/// Fetch context key identifying directory requests.
const FETCH_CONTEXT_SOURCE: &str = "directory_fetch";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication and the configured data URL.
struct State {
    /// Core application state from library layer.
    app: firmdex::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// URL of the static JSON company list.
    data_url: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: firmdex::initialize(&default_config),
            worker_name: "firmdex".to_string(),
            data_url: default_config.data_url,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    /// The directory fetch waits for the permission grant.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch the company list
    /// - `RunCommands`: Open company websites via `xdg-open`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        firmdex::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(data_url = %config.data_url, "parsed configuration");
        self.app = firmdex::initialize(&config);
        self.data_url = config.data_url;

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        firmdex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Normal => self.map_normal_key(key),
            InputMode::Search(SearchFocus::Typing) => Self::map_search_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_search_navigating_key(key),
        }
    }

    /// Normal mode keybindings.
    fn map_normal_key(&self, key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenWebsite,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('f') => Event::CycleLocation,
            BareKey::Char('i') => Event::CycleIndustry,
            BareKey::Char('v') => Event::ToggleLayout,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('r') => Event::Retry,
            _ => return None,
        })
    }

    /// Search mode keybindings while the input field has focus.
    fn map_search_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Search mode keybindings while the results have focus.
    fn map_search_navigating_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::OpenWebsite,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// Once permissions are granted the plugin loads persisted preferences
    /// and starts the initial directory fetch.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - initializing plugin");
                self.post_worker_message(&WorkerMessage::load_preferences());
                let seq = self.app.begin_fetch();
                self.fetch_directory(seq);
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps web request results to application events.
    ///
    /// Only responses carrying this plugin's fetch context are forwarded;
    /// the sequence number travels through the context so the handler can
    /// discard responses from abandoned lifecycles.
    fn map_web_request_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get("source").map(String::as_str) != Some(FETCH_CONTEXT_SOURCE) {
            tracing::debug!("ignoring web request result with unknown context");
            return None;
        }

        let seq = context.get("fetch_seq").and_then(|s| s.parse::<u64>().ok())?;

        tracing::debug!(status, seq, body_len = body.len(), "directory fetch result");
        Some(Event::DirectoryFetched { seq, status, body })
    }

    /// Issues the directory request tagged with the lifecycle sequence.
    fn fetch_directory(&self, seq: u64) {
        let mut context = BTreeMap::new();
        context.insert("source".to_string(), FETCH_CONTEXT_SOURCE.to_string());
        context.insert("fetch_seq".to_string(), seq.to_string());

        tracing::debug!(url = %self.data_url, seq, "fetching company directory");
        web_request(
            self.data_url.clone(),
            HttpVerb::Get,
            BTreeMap::new(),
            Vec::new(),
            context,
        );
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `FetchDirectory`: Issue the HTTP request for the company list
    /// - `OpenWebsite`: Open a URL in the host browser via `xdg-open`
    /// - `PostToWorker`: Send IPC message to worker thread
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchDirectory { seq } => {
                self.fetch_directory(*seq);
            }
            Action::OpenWebsite { ref url } => {
                tracing::debug!(url = %url, "opening website");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
