//! Card grid component renderer.
//!
//! Renders the company list as bordered cards, two per row on wide
//! terminals and one per row on narrow ones.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CompanyCell;

/// Lines one card occupies, including its borders.
const CARD_HEIGHT: usize = 5;

/// Minimum terminal width for the two-column card grid.
const CARD_GRID_MIN_COLS: usize = 76;

/// Horizontal margin around the card grid.
const CARD_MARGIN: usize = 1;

/// Renders the card grid starting at the specified row.
///
/// Cards flow left-to-right, top-to-bottom. The view model has already
/// windowed the cells to what fits, but the bottom chrome rows are still
/// respected so a partially-fitting card row is dropped instead of drawn
/// over the footer.
pub fn render_cards(row: usize, cells: &[CompanyCell], theme: &Theme, cols: usize, rows: usize) {
    let columns = if cols >= CARD_GRID_MIN_COLS { 2 } else { 1 };
    let card_width = cols.saturating_sub(CARD_MARGIN * 2) / columns;
    let bottom = rows.saturating_sub(2); // border + footer

    for (index, cell) in cells.iter().enumerate() {
        let grid_row = index / columns;
        let grid_col = index % columns;

        let top = row + grid_row * CARD_HEIGHT;
        if top + CARD_HEIGHT > bottom {
            break;
        }

        let left = CARD_MARGIN + grid_col * card_width + 1;
        render_card(top, left, card_width.saturating_sub(1), cell, theme);
    }
}

/// Renders a single bordered card at the given position.
///
/// ```text
/// ┌────────────────────┐
/// │ Name             ↗ │
/// │ Location · Industry│
/// │ https://...        │
/// └────────────────────┘
/// ```
///
/// The selected card uses the selection colors for its border and name,
/// and its footer line surfaces the website URL so the user can see where
/// `Enter` will take them. Unselected cards leave the footer blank.
fn render_card(row: usize, col: usize, width: usize, cell: &CompanyCell, theme: &Theme) {
    let inner_width = width.saturating_sub(2);
    let border_color = if cell.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };

    position_cursor(row, col);
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let marker_width = if cell.website.is_some() { 2 } else { 0 };
    let name = helpers::truncate(&cell.name, inner_width.saturating_sub(2 + marker_width));
    let name_len = helpers::display_width(&name);

    position_cursor(row + 1, col);
    print!("{}", Theme::fg(border_color));
    print!("│");
    if cell.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", Theme::bold());
    print!(" {name}");
    print!("{}", Theme::reset());
    if cell.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    if cell.website.is_some() {
        print!("{}", Theme::fg(&theme.colors.link_fg));
        print!("{}", " ".repeat(inner_width.saturating_sub(name_len + 3)));
        print!("↗ ");
    } else {
        print!("{}", " ".repeat(inner_width.saturating_sub(name_len + 1)));
    }
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    let detail = format!("{} · {}", cell.location, cell.industry);
    let detail = helpers::truncate(&detail, inner_width.saturating_sub(2));
    let detail_len = helpers::display_width(&detail);

    position_cursor(row + 2, col);
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {detail}");
    print!("{}", " ".repeat(inner_width.saturating_sub(detail_len + 1)));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    let footer = footer_text(cell, inner_width.saturating_sub(2));
    let footer_len = footer.as_deref().map_or(0, helpers::display_width);

    position_cursor(row + 3, col);
    print!("{}", Theme::fg(border_color));
    print!("│");
    if let Some(url) = &footer {
        print!("{}", Theme::fg(&theme.colors.link_fg));
        print!(" {url}");
    }
    print!(
        "{}",
        " ".repeat(inner_width.saturating_sub(footer_len + usize::from(footer.is_some())))
    );
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 4, col);
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Footer content for a card: the selected card surfaces its website URL,
/// truncated to the card's inner width. Other cards get an empty footer.
fn footer_text(cell: &CompanyCell, width: usize) -> Option<String> {
    if !cell.is_selected {
        return None;
    }
    cell.website
        .as_ref()
        .map(|url| helpers::truncate(url, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(is_selected: bool, website: Option<&str>) -> CompanyCell {
        CompanyCell {
            name: "Acme".to_string(),
            location: "NY".to_string(),
            industry: "Tech".to_string(),
            website: website.map(ToString::to_string),
            is_selected,
        }
    }

    #[test]
    fn selected_card_footer_shows_the_website() {
        let footer = footer_text(&cell(true, Some("https://acme.example")), 40);
        assert_eq!(footer.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn unselected_card_footer_is_blank_even_with_a_website() {
        assert_eq!(footer_text(&cell(false, Some("https://acme.example")), 40), None);
    }

    #[test]
    fn selected_card_without_a_website_has_no_footer() {
        assert_eq!(footer_text(&cell(true, None), 40), None);
    }

    #[test]
    fn footer_url_is_truncated_to_the_card_width() {
        let footer = footer_text(
            &cell(true, Some("https://a-very-long-company-domain.example/about")),
            16,
        )
        .unwrap();
        assert_eq!(helpers::display_width(&footer), 16);
        assert!(footer.ends_with('…'));
    }
}
