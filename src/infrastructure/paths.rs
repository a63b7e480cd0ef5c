//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`, so every persisted file lives below that prefix.

use std::path::PathBuf;

/// Returns the data directory for Firmdex storage.
///
/// The directory is located at `/host/.local/share/zellij/firmdex` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started, which typically resolves to the
/// user's home directory. The preference file and log file both live here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("firmdex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_the_sandbox_mount() {
        let dir = get_data_dir();
        assert_eq!(
            dir.to_str().unwrap(),
            "/host/.local/share/zellij/firmdex"
        );
    }
}
