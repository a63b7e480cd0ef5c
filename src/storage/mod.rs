//! Storage layer for persisted user preferences.
//!
//! This module provides the persistence abstraction for user preferences,
//! currently the light/dark theme choice. It uses a small JSON file with
//! atomic writes so a crash never leaves the file half-written.
//!
//! # Modules
//!
//! - `backend`: Preference store trait abstraction
//! - `json`: JSON file-based implementation
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PreferenceStore;
pub use json::JsonPreferences;
pub use models::PreferenceRecord;
