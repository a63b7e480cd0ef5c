//! Company record model.
//!
//! This module defines the core [`Company`] type, the unit the directory
//! endpoint serves. Records are externally sourced and immutable: the plugin
//! never creates, mutates, or deletes companies, it only replaces the whole
//! collection when a fetch succeeds.

use serde::{Deserialize, Serialize};

/// A single company record from the remote directory.
///
/// Deserialized straight from the JSON array served by the directory
/// endpoint. Every field except `id` defaults when absent, so a partially
/// malformed record renders with empty cells instead of failing the whole
/// load.
///
/// # Fields
///
/// - `id`: unique, stable identity assigned by the data source
/// - `name`: display name, matched case-insensitively by the search filter
/// - `location`: exact-match filter dimension
/// - `industry`: exact-match filter dimension
/// - `website`: optional URL, shown as a link marker in the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl Company {
    /// Creates a company record without a website.
    ///
    /// Primarily useful in tests; production records come from
    /// deserialization.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            industry: industry.into(),
            website: None,
        }
    }

    /// Returns the same record with a website attached.
    #[must_use]
    pub fn with_website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{"id":7,"name":"Acme","location":"NY","industry":"Tech","website":"https://acme.example"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.id, 7);
        assert_eq!(company.name, "Acme");
        assert_eq!(company.website.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let json = r#"{"id":3,"name":"Bolt"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.location, "");
        assert_eq!(company.industry, "");
        assert!(company.website.is_none());
    }
}
