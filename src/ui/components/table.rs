//! Table component renderer.
//!
//! Renders the company list as a three-column table with NAME, LOCATION,
//! and INDUSTRY columns, plus a link marker for companies with a website.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CompanyCell;

/// Fixed width of the NAME column, including the link marker.
const NAME_COL_WIDTH: usize = 30;

/// Fixed width of the LOCATION column.
const LOCATION_COL_WIDTH: usize = 20;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        " {:<name$} {:<loc$} {:<}",
        "NAME",
        "LOCATION",
        "INDUSTRY",
        name = NAME_COL_WIDTH,
        loc = LOCATION_COL_WIDTH,
    );
    let used = 1 + NAME_COL_WIDTH + 1 + LOCATION_COL_WIDTH + 1 + "INDUSTRY".len();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of cells)
pub fn render_table_rows(row: usize, cells: &[CompanyCell], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for cell in cells {
        current_row = render_table_row(current_row, cell, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line. Companies with a website get a `↗` marker after
/// the name, colored with the link color unless the row is selected.
fn render_table_row(row: usize, cell: &CompanyCell, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if cell.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker_width = if cell.website.is_some() { 2 } else { 0 };
    let name = helpers::truncate(&cell.name, NAME_COL_WIDTH.saturating_sub(marker_width));
    let name_len = helpers::display_width(&name);

    print!(" {name}");
    if cell.website.is_some() {
        if cell.is_selected {
            print!(" ↗");
        } else {
            print!("{}", Theme::fg(&theme.colors.link_fg));
            print!(" ↗");
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    }
    print!(
        "{}",
        " ".repeat(NAME_COL_WIDTH.saturating_sub(name_len + marker_width))
    );

    let location = helpers::truncate(&cell.location, LOCATION_COL_WIDTH);
    print!(" {:<width$}", location, width = LOCATION_COL_WIDTH);

    let industry = helpers::truncate(&cell.industry, cols.saturating_sub(NAME_COL_WIDTH + LOCATION_COL_WIDTH + 4));
    print!(" {industry}");

    let line_len = 1 + NAME_COL_WIDTH + 1 + LOCATION_COL_WIDTH + 1 + helpers::display_width(&industry);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
