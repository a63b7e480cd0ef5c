//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, selection management, fetch
//! lifecycle bookkeeping, and UI view model generation. It is the single
//! source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the fetched company collection) from
//! derived state (filtered companies, filter options), keeping the derived
//! values consistent by recomputing them through [`AppState::apply_filters`]
//! after every relevant mutation. View models are computed on demand from
//! state snapshots.
//!
//! # Fetch lifecycle
//!
//! Each fetch lifecycle is identified by a monotonically increasing
//! `fetch_seq`. A response tagged with an older sequence is stale and must be
//! discarded by the event handler; the sequence is bumped when a new fetch
//! starts and when the pane is torn down, which is what suppresses late
//! writes after navigation away.

use super::modes::{InputMode, LayoutMode, LoadPhase};
use crate::domain::{filters, Company, FilterSelection, ALL_SENTINEL};
use crate::ui::theme::{Theme, ThemeMode, ThemePair};
use crate::ui::viewmodel::{
    CompanyCell, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo,
    UiViewModel,
};

/// Rendered height of one card in the card layout, borders included.
///
/// Top border, name line, detail line, footer line (the selected card's
/// website URL), bottom border.
const CARD_HEIGHT: usize = 5;

/// Minimum terminal width for a two-column card grid.
const CARD_GRID_MIN_COLS: usize = 76;

/// Central application state container.
///
/// Holds the fetched collection, the filter inputs, the derived filter
/// state, the load lifecycle, and the theme. Mutated only by the event
/// handler in response to user input and system events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Company collection from the last successful fetch, in source order.
    pub companies: Vec<Company>,

    /// Companies matching the current filter selection.
    ///
    /// Recomputed by [`AppState::apply_filters`] after state changes. Used
    /// for rendering and selection bounds checking.
    pub filtered: Vec<Company>,

    /// Derived location options: sentinel first, then sorted distinct
    /// values.
    pub locations: Vec<String>,

    /// Derived industry options, same shape as `locations`.
    pub industries: Vec<String>,

    /// Index of the active location constraint within `locations`.
    pub location_index: usize,

    /// Index of the active industry constraint within `industries`.
    pub industry_index: usize,

    /// Current search query string.
    pub search_query: String,

    /// Zero-based index of the selected record within `filtered`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Active record layout (table or cards).
    pub layout: LayoutMode,

    /// Where the current fetch lifecycle stands.
    pub load: LoadPhase,

    /// Identity of the current fetch lifecycle.
    ///
    /// Responses carrying any other value are stale and ignored.
    pub fetch_seq: u64,

    /// Persisted light/dark preference.
    pub theme_mode: ThemeMode,

    /// Palette pair the render root selects from via `theme_mode`.
    pub themes: ThemePair,
}

impl AppState {
    /// Creates a new application state with the given palette pair.
    ///
    /// Starts in the loading phase with an empty collection; the directory
    /// fetch and the persisted theme load are issued by the plugin shim
    /// once permissions are granted.
    #[must_use]
    pub fn new(themes: ThemePair) -> Self {
        Self {
            companies: vec![],
            filtered: vec![],
            locations: vec![ALL_SENTINEL.to_string()],
            industries: vec![ALL_SENTINEL.to_string()],
            location_index: 0,
            industry_index: 0,
            search_query: String::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            layout: LayoutMode::Table,
            load: LoadPhase::Loading,
            fetch_seq: 0,
            theme_mode: ThemeMode::Light,
            themes,
        }
    }

    /// Returns the palette for the current theme mode.
    ///
    /// This is the single point where the persisted preference turns into
    /// concrete styling; every component receives the palette from here.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.for_mode(self.theme_mode)
    }

    /// Current location constraint value.
    #[must_use]
    pub fn location_value(&self) -> &str {
        self.locations
            .get(self.location_index)
            .map_or(ALL_SENTINEL, String::as_str)
    }

    /// Current industry constraint value.
    #[must_use]
    pub fn industry_value(&self) -> &str {
        self.industries
            .get(self.industry_index)
            .map_or(ALL_SENTINEL, String::as_str)
    }

    /// Snapshot of the current filter inputs.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            search: self.search_query.clone(),
            location: self.location_value().to_string(),
            industry: self.industry_value().to_string(),
        }
    }

    /// Recomputes the filtered subsequence from the current inputs.
    ///
    /// Pure recomputation over the collection; also clamps the selection
    /// index to the new bounds.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total = self.companies.len(),
            query_len = self.search_query.len(),
            location = %self.location_value(),
            industry = %self.industry_value(),
        )
        .entered();

        self.filtered = filters::apply(&self.companies, &self.selection());

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered = self.filtered.len(), "filters applied");
    }

    /// Replaces the company collection after a successful fetch.
    ///
    /// Re-derives the filter option lists and keeps the previous location
    /// and industry constraints when their values still exist in the new
    /// collection, falling back to the sentinel otherwise.
    pub fn replace_companies(&mut self, companies: Vec<Company>) {
        let prev_location = self.location_value().to_string();
        let prev_industry = self.industry_value().to_string();

        self.companies = companies;
        self.locations = filters::location_options(&self.companies);
        self.industries = filters::industry_options(&self.companies);

        self.location_index = self
            .locations
            .iter()
            .position(|value| *value == prev_location)
            .unwrap_or(0);
        self.industry_index = self
            .industries
            .iter()
            .position(|value| *value == prev_industry)
            .unwrap_or(0);

        self.apply_filters();

        tracing::debug!(
            companies = self.companies.len(),
            locations = self.locations.len() - 1,
            industries = self.industries.len() - 1,
            "company collection replaced"
        );
    }

    /// Advances the location constraint to the next derived option.
    pub fn cycle_location(&mut self) {
        if self.locations.len() > 1 {
            self.location_index = (self.location_index + 1) % self.locations.len();
            self.apply_filters();
        }
    }

    /// Advances the industry constraint to the next derived option.
    pub fn cycle_industry(&mut self) {
        if self.industries.len() > 1 {
            self.industry_index = (self.industry_index + 1) % self.industries.len();
            self.apply_filters();
        }
    }

    /// Moves selection down by one record, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves selection up by one record, wrapping to the bottom at the
    /// start.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected company, if any record is visible.
    #[must_use]
    pub fn selected_company(&self) -> Option<&Company> {
        self.filtered.get(self.selected_index)
    }

    /// Starts a new fetch lifecycle and returns its sequence number.
    ///
    /// Bumping the sequence invalidates any response still in flight from a
    /// previous lifecycle.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.load = LoadPhase::Loading;
        tracing::debug!(seq = self.fetch_seq, "fetch lifecycle started");
        self.fetch_seq
    }

    /// Invalidates any in-flight fetch without starting a new one.
    ///
    /// Called at teardown so a late response cannot mutate state after the
    /// pane is gone.
    pub fn invalidate_fetch(&mut self) {
        self.fetch_seq += 1;
    }

    /// Live record count line, e.g. `"1 of 2 companies"`.
    #[must_use]
    pub fn count_line(&self) -> String {
        format!(
            "{} of {} companies",
            self.filtered.len(),
            self.companies.len()
        )
    }

    /// Computes a renderable view model for the given terminal dimensions.
    ///
    /// Windows the filtered collection around the selection so the selected
    /// record stays visible, and resolves the loading/failed/empty display
    /// states.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let mut vm = UiViewModel {
            rows: vec![],
            selected_index: 0,
            layout: self.layout,
            header: self.compute_header(),
            footer: self.compute_footer(),
            filter_bar: None,
            search_bar: self.compute_search_bar(),
            status: None,
            empty_state: None,
        };

        match &self.load {
            LoadPhase::Loading => {
                vm.status = Some(StatusInfo {
                    message: "Loading companies...".to_string(),
                    hint: None,
                    is_error: false,
                });
                return vm;
            }
            LoadPhase::Failed(message) => {
                vm.status = Some(StatusInfo {
                    message: message.clone(),
                    hint: Some("r: retry".to_string()),
                    is_error: true,
                });
                return vm;
            }
            LoadPhase::Ready => {}
        }

        vm.filter_bar = Some(FilterBarInfo {
            location: self.location_value().to_string(),
            industry: self.industry_value().to_string(),
            layout_label: self.layout.label().to_string(),
        });

        if self.filtered.is_empty() {
            vm.empty_state = Some(EmptyState {
                message: "No matching companies".to_string(),
                subtitle: "Adjust the search or cycle the filters with f / i".to_string(),
            });
            return vm;
        }

        let capacity = self.visible_capacity(rows, cols).max(1);

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(self.filtered.len());

        let actual_count = visible_end - visible_start;
        if actual_count < capacity && self.filtered.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        vm.rows = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, company)| CompanyCell {
                name: company.name.clone(),
                location: company.location.clone(),
                industry: company.industry.clone(),
                website: company.website.clone(),
                is_selected: visible_start + relative_idx == self.selected_index,
            })
            .collect();

        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        vm
    }

    /// Number of records the record area can show at once.
    ///
    /// Subtracts the UI chrome (header, borders, filter bar, footer, search
    /// bar when active, table header in table layout) from the terminal
    /// height, then accounts for card height and the two-column grid in the
    /// card layout.
    fn visible_capacity(&self, rows: usize, cols: usize) -> usize {
        let mut chrome = 6; // blank, header, border, filter bar, border, footer
        if matches!(self.input_mode, InputMode::Search(_)) {
            chrome += 3;
        }
        if self.layout == LayoutMode::Table {
            chrome += 1; // column header row
        }

        let available = rows.saturating_sub(chrome);

        match self.layout {
            LayoutMode::Table => available,
            LayoutMode::Cards => {
                let columns = if cols >= CARD_GRID_MIN_COLS { 2 } else { 1 };
                (available / CARD_HEIGHT) * columns
            }
        }
    }

    /// Header title, including the live count once data is loaded.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.load {
            LoadPhase::Ready => format!(" Company Directory — {} ", self.count_line()),
            _ => " Company Directory ".to_string(),
        };
        HeaderInfo { title }
    }

    /// Context-appropriate keybinding hints for the footer.
    fn compute_footer(&self) -> FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match (&self.load, self.input_mode) {
            (LoadPhase::Failed(_), _) => "r: retry  t: theme  q: quit".to_string(),
            (_, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            (_, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open website".to_string()
            }
            (_, InputMode::Normal) => {
                "j/k: navigate  /: search  f: location  i: industry  v: layout  t: theme  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Search bar state if search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state(companies: Vec<Company>) -> AppState {
        let mut state = AppState::new(ThemePair::default());
        state.replace_companies(companies);
        state.load = LoadPhase::Ready;
        state
    }

    fn sample() -> Vec<Company> {
        vec![
            Company::new(1, "Acme", "NY", "Tech"),
            Company::new(2, "Bolt", "SF", "Retail"),
        ]
    }

    #[test]
    fn search_narrows_and_count_line_reports_it() {
        let mut state = ready_state(sample());
        state.search_query = "ac".to_string();
        state.apply_filters();

        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].name, "Acme");
        assert_eq!(state.count_line(), "1 of 2 companies");
    }

    #[test]
    fn replace_companies_derives_filter_options() {
        let state = ready_state(sample());
        assert_eq!(state.locations, vec!["All", "NY", "SF"]);
        assert_eq!(state.industries, vec!["All", "Retail", "Tech"]);
    }

    #[test]
    fn cycle_location_constrains_and_wraps_back_to_sentinel() {
        let mut state = ready_state(sample());

        state.cycle_location();
        assert_eq!(state.location_value(), "NY");
        assert_eq!(state.filtered.len(), 1);

        state.cycle_location();
        assert_eq!(state.location_value(), "SF");

        state.cycle_location();
        assert_eq!(state.location_value(), "All");
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn refetch_preserves_selected_filter_value_when_still_present() {
        let mut state = ready_state(sample());
        state.cycle_location(); // NY

        state.replace_companies(vec![
            Company::new(1, "Acme", "NY", "Tech"),
            Company::new(3, "Corex", "LA", "Tech"),
        ]);
        assert_eq!(state.location_value(), "NY");

        state.replace_companies(vec![Company::new(3, "Corex", "LA", "Tech")]);
        assert_eq!(state.location_value(), "All");
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = ready_state(sample());
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn begin_fetch_bumps_sequence_and_enters_loading() {
        let mut state = ready_state(sample());
        let seq = state.begin_fetch();
        assert_eq!(seq, state.fetch_seq);
        assert_eq!(state.load, LoadPhase::Loading);
    }

    #[test]
    fn loading_viewmodel_shows_status_and_no_rows() {
        let state = AppState::new(ThemePair::default());
        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert!(!status.is_error);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn failed_viewmodel_carries_message_and_retry_hint() {
        let mut state = AppState::new(ThemePair::default());
        state.load = LoadPhase::Failed("request failed with status 500".to_string());
        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert!(status.is_error);
        assert!(status.message.contains("500"));
        assert_eq!(status.hint.as_deref(), Some("r: retry"));
    }

    #[test]
    fn empty_filter_result_yields_empty_state() {
        let mut state = ready_state(sample());
        state.search_query = "zzz".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn viewmodel_windows_around_the_selection() {
        let companies: Vec<Company> = (0..100)
            .map(|i| Company::new(i, format!("Firm {i:03}"), "NY", "Tech"))
            .collect();
        let mut state = ready_state(companies);
        state.selected_index = 90;

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.rows.len() <= 24);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert!(vm.rows[vm.selected_index].name.contains("090"));
    }
}
