//! Character detail renderer: name, facet buttons and the titles of the open
//! facet.

use super::notice::render_notice;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ButtonItem, DetailView, EpisodeItem};

/// Renders the detail from `row` on and returns the next free row.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.card_title_fg));
    print!("  {}", detail.title);
    print!("{}", Theme::reset());

    let mut current_row = render_buttons(row + 1, &detail.buttons, theme) + 1;

    if let Some(notice) = &detail.notice {
        current_row = render_notice(current_row, notice, theme, cols);
    }

    for episode in &detail.episodes {
        current_row = render_episode(current_row, episode, theme);
    }

    current_row
}

fn render_buttons(row: usize, buttons: &[ButtonItem], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("  ");
    for button in buttons {
        if button.is_active {
            print!("{}", Theme::fg(&theme.colors.kind_active_fg));
            print!("{}", Theme::bg(&theme.colors.kind_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("[ {} ]", button.label);
        print!("{}", Theme::reset());
        print!(" ");
    }
    row + 1
}

fn render_episode(row: usize, episode: &EpisodeItem, theme: &Theme) -> usize {
    position_cursor(row, 1);
    if episode.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> {}", episode.title);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  {}", episode.title);
    }
    print!("{}", Theme::reset());
    row + 1
}
