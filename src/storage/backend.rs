//! Preference store abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over
//! persistence backends for user preferences. The trait keeps the worker
//! thread decoupled from the file format so a different backend can be
//! substituted in tests.

use crate::domain::error::Result;
use crate::storage::models::PreferenceRecord;

/// Abstraction over persisted user preferences.
///
/// Implementations must be usable from the worker thread, which owns all
/// preference I/O.
///
/// # Implementations
///
/// - [`JsonPreferences`](crate::storage::JsonPreferences): JSON file with
///   atomic writes (default)
pub trait PreferenceStore: Send {
    /// Reads the persisted preferences.
    ///
    /// Returns `Ok(None)` when no preferences have been saved yet. A corrupt
    /// or unreadable file is treated the same as an absent one so a bad write
    /// never locks the user out of the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails for reasons other than
    /// the file being absent or malformed.
    fn load(&self) -> Result<Option<PreferenceRecord>>;

    /// Persists a new theme value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or atomic rename fails.
    fn save_theme(&mut self, theme: &str) -> Result<()>;
}
