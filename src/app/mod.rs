//! Application state management and event handling.
//!
//! This layer owns the in-memory model of the directory browser and the
//! transitions between its states. The plugin shim in `main.rs` translates
//! runtime events into [`Event`] values, feeds them through
//! [`handle_event`], and executes the returned [`Action`]s.

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LayoutMode, LoadPhase, SearchFocus};
pub use state::AppState;
