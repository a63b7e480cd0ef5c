//! Storage record models for the persistence layer.
//!
//! These types describe the on-disk shape of persisted preferences and are
//! kept separate from the domain and UI types so the file format can evolve
//! without touching business logic.

use serde::{Deserialize, Serialize};

/// A persisted preference record.
///
/// Currently holds only the theme choice; the struct exists so future
/// preferences (default layout, custom data URL) extend the same file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Stored theme value, `"light"` or `"dark"`.
    pub theme: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record for the given theme, stamped with the current time.
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_carries_theme_and_timestamp() {
        let record = PreferenceRecord::new("dark");
        assert_eq!(record.theme, "dark");
        assert!(record.updated_at > 0);
    }
}
