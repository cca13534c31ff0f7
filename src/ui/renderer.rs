//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the view model from `AppState`,
//! then hand it to the layout components, which print ANSI output directly.
//!
//! # Example
//!
//! ```rust
//! use character_finder::app::AppState;
//! use character_finder::catalog::CatalogClient;
//! use character_finder::ui::{render, Theme};
//!
//! let state = AppState::new(CatalogClient::default(), Theme::default());
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
