//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at an explicit row
//! position and returns the next free row, so the layout functions can stack
//! them without global state.
//!
//! # Components
//!
//! - [`header`]: Title bar with the live record count
//! - [`footer`]: Keybinding hints for the current mode
//! - [`search`]: Search input box (border, query text)
//! - [`filters`]: Active location/industry filter values and layout label
//! - [`table`]: Company list as NAME / LOCATION / INDUSTRY columns
//! - [`cards`]: Company list as a bordered card grid
//! - [`status`]: Loading indicator, load failure, and the no-match message

mod cards;
mod filters;
mod footer;
mod header;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

use cards::render_cards;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::{render_empty_state, render_status};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/records, records/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame from a view model.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search bar - 3 lines, search mode only]
/// [Filter bar | Status message]
/// [Table or card grid | Empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// When a status is present (loading or failure) the record area shows it
/// centered instead of the filter bar and records.
pub fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(status) = &vm.status {
        render_status(current_row + 2, status, theme, cols);
    } else {
        if let Some(filter_bar) = &vm.filter_bar {
            current_row = render_filter_bar(current_row, filter_bar, theme, cols);
        }

        if let Some(empty) = &vm.empty_state {
            render_empty_state(current_row + 2, empty, theme, cols);
        } else {
            match vm.layout {
                crate::app::LayoutMode::Table => {
                    current_row = render_table_headers(current_row, theme, cols);
                    render_table_rows(current_row, &vm.rows, theme, cols);
                }
                crate::app::LayoutMode::Cards => {
                    render_cards(current_row, &vm.rows, theme, cols, rows);
                }
            }
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
