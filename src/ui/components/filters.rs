//! Filter bar component renderer.
//!
//! Renders the active location/industry filter values and the layout label
//! on a single line above the record area.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter bar at the specified row.
///
/// Shows the current selection for each cycling filter plus the active
/// layout, with the value portion of each pair styled as a badge:
///
/// ```text
///  Location: All    Industry: Tech    Layout: Cards
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_bar(row: usize, filter_bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");

    let mut used = 1;
    used += render_pair("Location", &filter_bar.location, theme);
    print!("    ");
    used += 4;
    used += render_pair("Industry", &filter_bar.industry, theme);
    print!("    ");
    used += 4;
    used += render_pair("Layout", &filter_bar.layout_label, theme);

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one `label: value` pair and returns its display width.
fn render_pair(label: &str, value: &str, theme: &Theme) -> usize {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label}: ");
    print!("{}", Theme::fg(&theme.colors.badge_fg));
    print!("{}", Theme::bg(&theme.colors.badge_bg));
    print!(" {value} ");
    print!("{}", Theme::reset());

    display_width(label) + 2 + display_width(value) + 2
}
