//! Input mode state for the application.
//!
//! The plugin is either navigating the render region or typing into the
//! search bar. The mode decides how the shim maps keys: in [`InputMode::Search`]
//! every printable key is part of the term, in [`InputMode::Normal`] letters
//! are commands.
//!
//! # Example
//!
//! ```rust
//! use character_finder::app::InputMode;
//!
//! let mode = InputMode::Search;
//! assert!(mode.is_editing());
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and command mode.
    ///
    /// Keybindings: j/k (move), / (type), Tab (cycle kind), Enter (open
    /// selected card), p (Películas), s (Series de TV), q (close).
    #[default]
    Normal,

    /// The search bar has focus and collects the term.
    ///
    /// Enter submits and returns to `Normal`, Esc returns without submitting.
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Search)
    }
}
