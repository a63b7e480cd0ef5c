//! Error types for the Firmdex plugin.
//!
//! This module defines the centralized error type [`FirmdexError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Load failures are deliberately *not* represented here: a failed directory
//! fetch is application state (it is shown to the user with a retry hint),
//! not an error that propagates through `Result` chains.

use thiserror::Error;

/// The main error type for Firmdex plugin operations.
///
/// This enum consolidates the error conditions that can occur during plugin
/// execution, from preference storage to I/O failures and configuration
/// issues. Variants wrapping external errors use `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum FirmdexError {
    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme palette file cannot be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot communicate with its background worker
    /// thread, typically during preference load or save operations.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Firmdex operations.
///
/// This is a type alias for `std::result::Result<T, FirmdexError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, FirmdexError>;
