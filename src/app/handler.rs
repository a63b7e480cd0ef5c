//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch results, and worker responses, translating them into state changes
//! and action sequences. It is the only place application state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Stale fetch suppression
//!
//! [`Event::DirectoryFetched`] carries the sequence number of the lifecycle
//! that issued the request. When it differs from the state's current
//! `fetch_seq` the response belongs to an abandoned lifecycle (the pane was
//! closed or a retry started) and is discarded without mutating state. This
//! is what makes teardown safe against late-arriving responses.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::ui::theme::ThemeMode;
use crate::worker::{WorkerMessage, WorkerResponse};

use super::modes::LoadPhase;

/// Events triggered by user input, fetch completion, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one record (wraps to top).
    KeyDown,
    /// Moves selection up by one record (wraps to bottom).
    KeyUp,
    /// Closes the pane and invalidates any in-flight fetch.
    CloseFocus,
    /// Opens the selected company's website, if it has one.
    OpenWebsite,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Cycles the location filter to its next derived option.
    CycleLocation,
    /// Cycles the industry filter to its next derived option.
    CycleIndustry,
    /// Switches between the table and card layouts.
    ToggleLayout,
    /// Flips the light/dark theme and persists the new value.
    ToggleTheme,
    /// Restarts the load lifecycle after a failure.
    Retry,

    /// Completion of the directory request issued by a fetch lifecycle.
    ///
    /// `seq` identifies the issuing lifecycle; a mismatch with the current
    /// one marks the response stale. `status` is the HTTP status (0 on
    /// transport failure), `body` the raw response bytes.
    DirectoryFetched {
        /// Sequence number of the issuing fetch lifecycle.
        seq: u64,
        /// HTTP status code, 0 when the transport itself failed.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. The boolean in the result indicates whether the UI should
/// re-render.
///
/// # Errors
///
/// Returns errors from state mutation methods; in practice every current
/// transition is infallible and the `Result` exists for parity with the
/// worker boundary.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => {
            // A response arriving after this point must not mutate state.
            state.invalidate_fetch();
            Ok((false, vec![Action::CloseFocus]))
        }
        Event::OpenWebsite => state.selected_company().map_or(Ok((false, vec![])), |company| {
            company.website.as_ref().map_or_else(
                || {
                    tracing::debug!(company = %company.name, "selected company has no website");
                    Ok((false, vec![]))
                },
                |url| {
                    tracing::debug!(company = %company.name, url = %url, "opening website");
                    Ok((false, vec![Action::OpenWebsite { url: url.clone() }]))
                },
            )
        }),
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_filters();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleLocation => {
            state.cycle_location();
            Ok((true, vec![]))
        }
        Event::CycleIndustry => {
            state.cycle_industry();
            Ok((true, vec![]))
        }
        Event::ToggleLayout => {
            state.layout = state.layout.toggled();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme_mode = state.theme_mode.toggled();
            tracing::debug!(theme = state.theme_mode.as_str(), "theme toggled");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::save_theme(
                    state.theme_mode.as_str().to_string(),
                ))],
            ))
        }
        Event::Retry => {
            if !matches!(state.load, LoadPhase::Failed(_)) {
                return Ok((false, vec![]));
            }
            let seq = state.begin_fetch();
            Ok((true, vec![Action::FetchDirectory { seq }]))
        }
        Event::DirectoryFetched { seq, status, body } => {
            if *seq != state.fetch_seq {
                tracing::debug!(
                    response_seq = seq,
                    current_seq = state.fetch_seq,
                    "discarding stale fetch response"
                );
                return Ok((false, vec![]));
            }

            handle_fetch_result(state, *status, body);
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::PreferencesLoaded { theme } => {
                let mode = ThemeMode::from_stored(theme);
                tracing::debug!(stored = %theme, resolved = mode.as_str(), "persisted theme loaded");
                let changed = state.theme_mode != mode;
                state.theme_mode = mode;

                // Writing the resolved value back materializes the preference
                // file on a fresh install and normalizes a corrupt one.
                let save = Action::PostToWorker(WorkerMessage::save_theme(
                    mode.as_str().to_string(),
                ));
                Ok((changed, vec![save]))
            }
            WorkerResponse::ThemeSaved { theme } => {
                tracing::debug!(theme = %theme, "theme preference persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

/// Applies the outcome of the current lifecycle's fetch to the state.
///
/// A 2xx status with a parseable JSON array replaces the collection; any
/// other status, and any parse failure, lands in the failed phase with a
/// human-readable message while the previous collection is kept.
fn handle_fetch_result(state: &mut AppState, status: u16, body: &[u8]) {
    if !(200..300).contains(&status) {
        let message = if status == 0 {
            "network error while fetching companies".to_string()
        } else {
            format!("request failed with status {status}")
        };
        tracing::debug!(status, "directory fetch failed");
        state.load = LoadPhase::Failed(message);
        return;
    }

    match serde_json::from_slice::<Vec<crate::domain::Company>>(body) {
        Ok(companies) => {
            tracing::debug!(count = companies.len(), "directory fetched");
            state.replace_companies(companies);
            state.load = LoadPhase::Ready;
        }
        Err(e) => {
            tracing::debug!(error = %e, "directory payload did not parse");
            state.load = LoadPhase::Failed(format!("invalid directory payload: {e}"));
        }
    }
}

/// Short event name for span fields, without payload noise.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::CloseFocus => "CloseFocus",
        Event::OpenWebsite => "OpenWebsite",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::CycleLocation => "CycleLocation",
        Event::CycleIndustry => "CycleIndustry",
        Event::ToggleLayout => "ToggleLayout",
        Event::ToggleTheme => "ToggleTheme",
        Event::Retry => "Retry",
        Event::DirectoryFetched { .. } => "DirectoryFetched",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, LayoutMode, SearchFocus};
    use crate::domain::Company;
    use crate::ui::theme::ThemePair;

    fn new_state() -> AppState {
        AppState::new(ThemePair::default())
    }

    fn fetched_body() -> Vec<u8> {
        serde_json::to_vec(&vec![
            Company::new(1, "Acme", "NY", "Tech"),
            Company::new(2, "Bolt", "SF", "Retail"),
        ])
        .unwrap()
    }

    fn deliver(state: &mut AppState, seq: u64, status: u16, body: Vec<u8>) -> (bool, Vec<Action>) {
        handle_event(state, &Event::DirectoryFetched { seq, status, body }).unwrap()
    }

    #[test]
    fn successful_fetch_replaces_collection_and_enters_ready() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        let (render, actions) = deliver(&mut state, seq, 200, fetched_body());
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.load, LoadPhase::Ready);
        assert_eq!(state.companies.len(), 2);
        assert_eq!(state.count_line(), "2 of 2 companies");
    }

    #[test]
    fn failed_fetch_keeps_collection_and_reports_status() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        deliver(&mut state, seq, 500, vec![]);
        assert!(state.companies.is_empty());
        match &state.load {
            LoadPhase::Failed(message) => assert!(message.contains("500")),
            other => panic!("expected failed phase, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_reports_network_error() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        deliver(&mut state, seq, 0, vec![]);
        match &state.load {
            LoadPhase::Failed(message) => assert!(message.contains("network error")),
            other => panic!("expected failed phase, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_is_a_load_failure() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        deliver(&mut state, seq, 200, b"not json".to_vec());
        assert!(matches!(state.load, LoadPhase::Failed(_)));
        assert!(state.companies.is_empty());
    }

    #[test]
    fn response_after_teardown_mutates_nothing() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
        let snapshot_load = state.load.clone();

        let (render, actions) = deliver(&mut state, seq, 200, fetched_body());
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.companies.is_empty());
        assert_eq!(state.load, snapshot_load);
    }

    #[test]
    fn stale_response_loses_to_the_newer_lifecycle() {
        let mut state = new_state();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        deliver(&mut state, second, 200, fetched_body());
        assert_eq!(state.companies.len(), 2);

        // The abandoned lifecycle's response arrives late and is dropped.
        let (render, _) = deliver(&mut state, first, 200, b"[]".to_vec());
        assert!(!render);
        assert_eq!(state.companies.len(), 2);
    }

    #[test]
    fn retry_only_restarts_from_the_failed_phase() {
        let mut state = new_state();
        let seq = state.begin_fetch();

        let (_, actions) = handle_event(&mut state, &Event::Retry).unwrap();
        assert!(actions.is_empty(), "retry is a no-op while loading");

        deliver(&mut state, seq, 503, vec![]);
        let (render, actions) = handle_event(&mut state, &Event::Retry).unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::FetchDirectory {
                seq: state.fetch_seq
            }]
        );
        assert_eq!(state.load, LoadPhase::Loading);
    }

    #[test]
    fn toggle_theme_flips_mode_and_persists_it() {
        let mut state = new_state();

        let (render, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert!(render);
        assert_eq!(state.theme_mode.as_str(), "dark");
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::save_theme(
                "dark".to_string()
            ))]
        );
    }

    #[test]
    fn loaded_preference_applies_fail_safe_default() {
        let mut state = new_state();
        state.theme_mode = crate::ui::theme::ThemeMode::Dark;

        let event = Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
            theme: "garbage".to_string(),
        });
        let (render, actions) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.theme_mode, crate::ui::theme::ThemeMode::Light);
        // The corrupt value is normalized back into the store.
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::save_theme(
                "light".to_string()
            ))]
        );
    }

    #[test]
    fn initial_preference_load_writes_the_resolved_value_back() {
        let mut state = new_state();

        let event = Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
            theme: "dark".to_string(),
        });
        let (render, actions) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.theme_mode, crate::ui::theme::ThemeMode::Dark);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::save_theme(
                "dark".to_string()
            ))]
        );

        // A load that resolves to the already-active mode still persists it,
        // so a fresh install materializes the preference file immediately.
        let event = Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
            theme: "dark".to_string(),
        });
        let (render, actions) = handle_event(&mut state, &event).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::save_theme(
                "dark".to_string()
            ))]
        );
    }

    #[test]
    fn toggle_layout_switches_between_table_and_cards() {
        let mut state = new_state();
        handle_event(&mut state, &Event::ToggleLayout).unwrap();
        assert_eq!(state.layout, LayoutMode::Cards);
        handle_event(&mut state, &Event::ToggleLayout).unwrap();
        assert_eq!(state.layout, LayoutMode::Table);
    }

    #[test]
    fn search_characters_only_register_in_search_mode() {
        let mut state = new_state();
        let seq = state.begin_fetch();
        deliver(&mut state, seq, 200, fetched_body());

        handle_event(&mut state, &Event::Char('a')).unwrap();
        assert_eq!(state.search_query, "");

        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(
            state.input_mode,
            InputMode::Search(SearchFocus::Typing)
        );
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::Char('c')).unwrap();
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].name, "Acme");

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.search_query, "");
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn open_website_emits_action_only_when_url_exists() {
        let mut state = new_state();
        state.replace_companies(vec![
            Company::new(1, "Acme", "NY", "Tech").with_website("https://acme.example"),
            Company::new(2, "Bolt", "SF", "Retail"),
        ]);
        state.load = LoadPhase::Ready;

        let (_, actions) = handle_event(&mut state, &Event::OpenWebsite).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenWebsite {
                url: "https://acme.example".to_string()
            }]
        );

        state.move_selection_down();
        let (_, actions) = handle_event(&mut state, &Event::OpenWebsite).unwrap();
        assert!(actions.is_empty());
    }
}
