//! Input, layout, and load lifecycle mode types.
//!
//! These enums hold the small pieces of UI state that select keybinding
//! interpretation, the active record layout, and where the current fetch
//! lifecycle stands.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results with the query kept.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how key presses are processed.
/// Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), f (location
    /// filter), i (industry filter), v (layout), t (theme), r (retry),
    /// q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Which layout renders the filtered companies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Three-column table: NAME, LOCATION, INDUSTRY.
    #[default]
    Table,

    /// Card grid with the name as title and location/industry badges.
    Cards,
}

impl LayoutMode {
    /// Returns the other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Cards,
            Self::Cards => Self::Table,
        }
    }

    /// Display label for the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Cards => "Cards",
        }
    }
}

/// Where the current directory fetch lifecycle stands.
///
/// A failed load is ordinary state, not an error: it is rendered with the
/// stored message and a retry hint, and the previously loaded collection (if
/// any) is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch is in flight; the loading indicator is shown.
    Loading,

    /// The last fetch succeeded; the filtered collection is rendered.
    Ready,

    /// The last fetch failed with a human-readable message.
    Failed(String),
}
