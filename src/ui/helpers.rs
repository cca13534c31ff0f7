//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components and by view model computation:
//! cursor positioning, width-aware truncation and list windowing.
//!
//! # Example
//!
//! ```rust
//! use character_finder::ui::helpers::{truncate, visible_window};
//!
//! assert_eq!(truncate("Lilo & Stitch", 8), "Lilo ...");
//! assert_eq!(visible_window(9, 10, 4), (6, 10));
//! ```

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max_width` characters, ending with `...` when
/// anything was cut.
///
/// Counts characters, not bytes, so accented titles are never split inside a
/// code point.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{kept}...")
}

/// Returns the `[start, end)` range of a list of `total` items to show in
/// `capacity` slots so that `selected` stays visible.
///
/// The window is centered on the selection and shifted back near the end of
/// the list so that it stays full whenever the list is long enough.
#[must_use]
pub fn visible_window(selected: usize, total: usize, capacity: usize) -> (usize, usize) {
    if total == 0 || capacity == 0 {
        return (0, 0);
    }

    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(total);

    if end - start < capacity && total >= capacity {
        start = end.saturating_sub(capacity);
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Elsa", 10), "Elsa");
        assert_eq!(truncate("Elsa", 4), "Elsa");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Películas: Fantasía", 12), "Películas...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn window_fits_short_lists() {
        assert_eq!(visible_window(0, 3, 10), (0, 3));
        assert_eq!(visible_window(0, 0, 10), (0, 0));
    }

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(visible_window(0, 20, 5), (0, 5));
        assert_eq!(visible_window(10, 20, 5), (8, 13));
        assert_eq!(visible_window(19, 20, 5), (15, 20));
    }
}
