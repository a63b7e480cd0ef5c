//! JSON file-based preference store.
//!
//! This module provides a simple, human-readable persistence implementation
//! using JSON serialization. It uses atomic file writes (write-to-temp +
//! rename) to prevent corruption on crashes.

use crate::domain::error::{FirmdexError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON preference file format.
///
/// Top-level structure serialized to disk. The version field exists for
/// future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the file format for future migrations.
    version: u32,

    /// The persisted preferences, absent until the first save.
    #[serde(default)]
    preferences: Option<PreferenceRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: None,
        }
    }
}

/// JSON file preference store.
///
/// Keeps the preference record in memory and persists it on modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "theme": "dark",
///     "updated_at": 1234567890
///   }
/// }
/// ```
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory cache, loaded on creation.
    data: PreferenceData,
}

impl JsonPreferences {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists and parses, loads it. A malformed file is logged
    /// and replaced by defaults on the next save rather than surfaced as an
    /// error. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails or the file
    /// exists but cannot be read.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceData::default()
        };

        Ok(Self { file_path, data })
    }

    /// Loads preference data from a JSON file.
    ///
    /// Malformed content is treated as an empty store so a bad write never
    /// prevents the plugin from loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn load_from_file(path: &PathBuf) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str(&contents) {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::warn!(error = %e, "preference file did not parse, treating as empty");
                Ok(PreferenceData::default())
            }
        }
    }

    /// Saves preference data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path so the file is never left in a corrupt state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving preferences");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FirmdexError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn load(&self) -> Result<Option<PreferenceRecord>> {
        Ok(self.data.preferences.clone())
    }

    fn save_theme(&mut self, theme: &str) -> Result<()> {
        let _span = tracing::debug_span!("save_theme", theme = %theme).entered();

        self.data.preferences = Some(PreferenceRecord::new(theme));
        self.save_to_file()?;

        tracing::debug!("theme preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonPreferences {
        JsonPreferences::new(dir.path().join("preferences.json")).unwrap()
    }

    #[test]
    fn fresh_store_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saved_theme_survives_reopening() {
        let dir = TempDir::new().unwrap();

        let mut store = store_in(&dir);
        store.save_theme("dark").unwrap();

        let reopened = store_in(&dir);
        let record = reopened.load().unwrap().unwrap();
        assert_eq!(record.theme, "dark");
        assert!(record.updated_at > 0);
    }

    #[test]
    fn save_replaces_previous_value() {
        let dir = TempDir::new().unwrap();

        let mut store = store_in(&dir);
        store.save_theme("dark").unwrap();
        store.save_theme("light").unwrap();

        let record = store.load().unwrap().unwrap();
        assert_eq!(record.theme, "light");
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonPreferences::new(path).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b").join("preferences.json");

        let mut store = JsonPreferences::new(nested.clone()).unwrap();
        store.save_theme("dark").unwrap();
        assert!(nested.exists());
    }
}
