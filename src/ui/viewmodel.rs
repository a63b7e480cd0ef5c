//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state,
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: the visible window of filtered companies, header and
//! footer text, and the optional search bar, status, and empty state
//! elements.

use crate::app::modes::LayoutMode;

/// Complete UI view model for one frame.
///
/// Computed by `AppState::compute_viewmodel()`. When `status` is set
/// (loading or load failure) the record area shows it instead of `rows`;
/// when `empty_state` is set, no filter hits exist.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Visible window of filtered companies.
    pub rows: Vec<CompanyCell>,

    /// Index of the selected record within `rows`.
    pub selected_index: usize,

    /// Which layout renders `rows`.
    pub layout: LayoutMode,

    /// Header information (title with record counts).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Active filter values, shown above the record area when data is
    /// loaded.
    pub filter_bar: Option<FilterBarInfo>,

    /// Search input state (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Loading indicator or load failure (replaces the record area).
    pub status: Option<StatusInfo>,

    /// Message shown when the filters match nothing.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single company.
///
/// One table row or one card, depending on the active layout.
#[derive(Debug, Clone)]
pub struct CompanyCell {
    /// Company display name.
    pub name: String,

    /// Location value (may be empty for malformed records).
    pub location: String,

    /// Industry value (may be empty for malformed records).
    pub industry: String,

    /// Website URL, rendered as a link marker next to the name.
    pub website: Option<String>,

    /// Whether this record is currently selected.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the live `"{filtered} of {total} companies"`
    /// count once data is loaded.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Active filter values for the filter bar.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Current location constraint ("All" or an exact value).
    pub location: String,

    /// Current industry constraint.
    pub industry: String,

    /// Label of the active layout ("Table" or "Cards").
    pub layout_label: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Loading indicator or load failure display.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Status text ("Loading companies..." or the failure message).
    pub message: String,

    /// Optional action hint, e.g. `"r: retry"` on failure.
    pub hint: Option<String>,

    /// Whether to style the message as an error.
    pub is_error: bool,
}

/// Empty state message display information.
///
/// Shown when data is loaded but the active filters match nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
