//! Notice block renderer for error and informational messages.

use crate::render::Tone;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeView;

/// Left margin of a notice.
const NOTICE_MARGIN: usize = 2;

/// Renders a one-line notice at `row` and returns the next row.
///
/// Errors are bold and use `error_fg`; informational notices use `info_fg`.
pub fn render_notice(row: usize, notice: &NoticeView, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&notice.text, cols.saturating_sub(NOTICE_MARGIN));

    position_cursor(row, 1);
    print!("{}", " ".repeat(NOTICE_MARGIN));
    match notice.tone {
        Tone::Error => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
        }
        Tone::Info => print!("{}", Theme::fg(&theme.colors.info_fg)),
    }
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
