//! Theme management and ANSI escape sequence generation.
//!
//! The plugin ships two built-in palettes, `light` and `dark`, compiled in
//! from TOML files. The active palette is selected by [`ThemeMode`], which is
//! the persisted user preference; custom palette pairs can be loaded from a
//! TOML file with `[light]` and `[dark]` tables.
//!
//! # Custom theme file format
//!
//! ```toml
//! [light]
//! name = "my-light"
//! [light.colors]
//! header_fg = "#1e1e2e"
//! # ... remaining colors ...
//!
//! [dark]
//! name = "my-dark"
//! [dark.colors]
//! header_fg = "#cdd6f4"
//! # ... remaining colors ...
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The user-visible light/dark switch.
///
/// This is the value persisted to the preference store and the only theme
/// state the rest of the application reasons about; the concrete colors live
/// in [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette. The fail-safe default.
    #[default]
    Light,

    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Resolves a stored preference string to a mode.
    ///
    /// Only the literal string `"dark"` selects the dark palette; anything
    /// else (including an absent or corrupt value) falls back to light. This
    /// is a fail-safe default, not an error.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the literal string persisted for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Color scheme for one theme mode.
///
/// Contains theme metadata and color definitions. Loaded from the built-in
/// palettes or from a custom TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., `"#cdd6f4"`). The optional
/// header background defaults to `None`, letting a palette opt out of it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row or card foreground color.
    pub selection_fg: String,
    /// Selected row or card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, filter bar labels, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,

    /// Card badge foreground (location/industry badges).
    pub badge_fg: String,
    /// Card badge background.
    pub badge_bg: String,

    /// Website link marker color.
    pub link_fg: String,

    /// Load failure message color.
    pub status_error_fg: String,
    /// Loading indicator and count color.
    pub status_info_fg: String,
}

/// The light/dark palette pair the renderer selects from.
///
/// Held by the application state so the render root can pick the palette
/// matching the current [`ThemeMode`] on every frame.
#[derive(Debug, Clone)]
pub struct ThemePair {
    /// Palette used in [`ThemeMode::Light`].
    pub light: Theme,
    /// Palette used in [`ThemeMode::Dark`].
    pub dark: Theme,
}

/// Serde shape of a custom theme file.
#[derive(Debug, Deserialize)]
struct ThemePairFile {
    light: Theme,
    dark: Theme,
}

impl ThemePair {
    /// Loads a custom palette pair from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML does not
    /// contain valid `[light]` and `[dark]` tables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read theme file: {e}"))?;

        let parsed: ThemePairFile = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse theme TOML: {e}"))?;

        Ok(Self {
            light: parsed.light,
            dark: parsed.dark,
        })
    }

    /// Returns the palette for the given mode.
    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    /// Returns the built-in light/dark palette pair.
    ///
    /// # Panics
    ///
    /// Panics if a built-in palette fails to parse (should never occur).
    fn default() -> Self {
        let light = toml::from_str(include_str!("../../themes/light.toml"))
            .expect("Built-in light theme should always parse");
        let dark = toml::from_str(include_str!("../../themes/dark.toml"))
            .expect("Built-in dark theme should always parse");
        Self { light, dark }
    }
}

impl Theme {
    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_dark_selects_dark() {
        assert_eq!(ThemeMode::from_stored("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("DARK"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("midnight"), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn built_in_pair_parses_and_selects_by_mode() {
        let pair = ThemePair::default();
        assert_eq!(pair.for_mode(ThemeMode::Light).name, "light");
        assert_eq!(pair.for_mode(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("nope"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#1e66f5"), (0x1e, 0x66, 0xf5));
    }
}
