//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready text only: windowing, truncation and
//! selection are resolved before rendering.
//!
//! # Example
//!
//! ```rust
//! use character_finder::ui::viewmodel::{
//!     BodyView, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Buscador de personajes ".to_string() },
//!     search_bar: SearchBarInfo { kinds: vec![], query: String::new(), is_editing: false },
//!     body: BodyView::Empty(EmptyState {
//!         message: "Busca personajes de Disney".to_string(),
//!         subtitle: String::new(),
//!     }),
//!     footer: FooterInfo { keybindings: "q: salir".to_string() },
//! };
//! assert!(matches!(vm.body, BodyView::Empty(_)));
//! ```

use crate::render::Tone;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// Content of the render region.
    pub body: BodyView,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, already padded with one space on each side.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search bar display information.
///
/// The bar is always visible; `is_editing` switches its styling and the
/// cursor marker.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Kind selector tabs, in cycle order.
    pub kinds: Vec<KindTab>,
    pub query: String,
    pub is_editing: bool,
}

/// One tab of the search kind selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindTab {
    pub label: &'static str,
    pub is_active: bool,
}

/// What the body area shows.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Nothing searched yet.
    Empty(EmptyState),
    /// The visible window of character cards.
    Cards(Vec<CardItem>),
    /// A single message, for error states.
    Notice(NoticeView),
    /// A character's detail.
    Detail(DetailView),
}

/// Placeholder shown before the first search.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// One character card.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub title: String,
    /// Image URL, shown dimmed next to the title.
    pub image: String,
    /// The films, series and video game summary lines.
    pub lines: Vec<String>,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct NoticeView {
    pub tone: Tone,
    pub text: String,
}

/// A character's detail: facet buttons and the titles of the open facet.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub title: String,
    pub buttons: Vec<ButtonItem>,
    /// Loading or empty message shown in place of titles.
    pub notice: Option<NoticeView>,
    /// The visible window of titles.
    pub episodes: Vec<EpisodeItem>,
}

#[derive(Debug, Clone)]
pub struct ButtonItem {
    pub label: String,
    /// Whether this button's facet is the one shown.
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct EpisodeItem {
    pub title: String,
    pub is_selected: bool,
}
