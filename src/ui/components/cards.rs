//! Character card list renderer.
//!
//! Each card takes five rows:
//!
//! ```text
//! > Mickey Mouse  https://static.wikia.nocookie.net/...
//!     Películas: Fantasia, Fun and Fancy Free
//!     Series de TV: Mickey Mouse Clubhouse
//!     Videojuegos: Kingdom Hearts
//! [spacer]
//! ```

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

const SELECTED_MARKER: &str = "> ";
const LINE_INDENT: &str = "    ";

/// Renders every card from `row` on and returns the next free row.
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let marker = if card.is_selected { SELECTED_MARKER } else { "  " };
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.card_title_fg));
    }
    print!("{}", Theme::bold());
    print!("{marker}{}", card.title);
    print!("{}", Theme::reset());

    let used = marker.len() + card.title.chars().count();
    let image_room = cols.saturating_sub(used + 2);
    if !card.image.is_empty() && image_room > 3 {
        let image = truncate(&card.image, image_room);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {image}");
        print!("{}", Theme::reset());
    }

    for (offset, line) in card.lines.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{LINE_INDENT}{line}");
        print!("{}", Theme::reset());
    }

    row + 1 + card.lines.len() + 1
}
