//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`search`]: search box with the kind selector
//! - [`cards`]: character card list
//! - [`detail`]: character detail with facet buttons and titles
//! - [`notice`]: error and informational messages
//! - [`empty`]: placeholder before the first search
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Body: empty state | cards | notice | detail]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod notice;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use cards::render_cards;
use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for `vm`.
///
/// The body starts right below the search bar; the footer and its border are
/// pinned to the last two rows.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let _current_row = match &vm.body {
        BodyView::Empty(empty) => render_empty_state(current_row, empty, theme, cols),
        BodyView::Cards(cards) => render_cards(current_row, cards, theme, cols),
        BodyView::Notice(notice) => render_notice(current_row + 1, notice, theme, cols),
        BodyView::Detail(detail) => render_detail(current_row, detail, theme, cols),
    };

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
