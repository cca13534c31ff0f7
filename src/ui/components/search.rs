//! Search bar component renderer.
//!
//! The bar is a three-line box holding the kind selector and the term:
//!
//! ```text
//! [margin] ┌──────────────────────────────────────────────┐ [margin]
//! [margin] │ [Nombre] Película  Videojuego │ Buscar: mic_ │ [margin]
//! [margin] └──────────────────────────────────────────────┘ [margin]
//! ```

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const CURSOR: char = '_';

/// Renders the search box starting at `row` and returns the row after it.
///
/// While editing the border switches to the highlight color and the term is
/// followed by a cursor marker.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_editing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");

    let mut used = 0;
    print!(" ");
    used += 1;
    for tab in &search.kinds {
        let label = format!(" {} ", tab.label);
        if tab.is_active {
            print!("{}", Theme::fg(&theme.colors.kind_active_fg));
            print!("{}", Theme::bg(&theme.colors.kind_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += label.chars().count();
    }

    print!("{}", Theme::fg(border_color));
    print!(" │ ");
    used += 3;

    let cursor = if search.is_editing { CURSOR.to_string() } else { String::new() };
    let query_room = inner_width.saturating_sub(used + "Buscar: ".len());
    let query = truncate(&search.query, query_room.saturating_sub(1));
    let query_text = format!("Buscar: {query}{cursor}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{query_text}");
    used += query_text.chars().count();

    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
