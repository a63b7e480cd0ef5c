//! Status and empty state component renderers.
//!
//! Renders the centered messages that replace the record area: the loading
//! indicator, load failures with a retry hint, and the no-match message.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, StatusInfo};

/// Renders a loading or failure message centered at the given row.
///
/// Failures use the error color; the loading indicator uses the info color.
/// An optional hint (such as the retry keybinding) renders dimmed on the
/// line below.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) {
    let color = if status.is_error {
        &theme.colors.status_error_fg
    } else {
        &theme.colors.status_info_fg
    };

    render_centered_line(row, &status.message, color, false, cols);

    if let Some(hint) = &status.hint {
        render_centered_line(row + 1, hint, &theme.colors.text_dim, true, cols);
    }
}

/// Renders the no-match message when the active filters hit nothing.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered_line(row, &empty.message, &theme.colors.text_normal, false, cols);
    render_centered_line(row + 1, &empty.subtitle, &theme.colors.text_dim, true, cols);
}

/// Renders one horizontally centered, full-width line.
fn render_centered_line(row: usize, text: &str, color: &str, dimmed: bool, cols: usize) {
    let len = display_width(text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    if dimmed {
        print!("{}", Theme::dim());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
