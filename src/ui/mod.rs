//! Terminal rendering of the application state.
//!
//! The UI layer paints the render region owned by the view state machine,
//! framed by a header, the search bar and a footer:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning, truncation and list windowing
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, ButtonItem, CardItem, DetailView, EmptyState, EpisodeItem, FooterInfo, HeaderInfo,
    KindTab, NoticeView, SearchBarInfo, UIViewModel,
};
