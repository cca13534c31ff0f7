//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the catalog
//! client, the search bar (kind and term), the cursor, the submission
//! generation and the [`ViewMachine`] that owns the render region.
//!
//! # Transitions
//!
//! - submitting a search bumps the generation and emits a fetch;
//! - a search reply moves the machine to `List` or `Error`;
//! - a trigger taken from a rendered affordance opens a facet, which for
//!   movies means `DetailPending` plus a lookup, and for series an immediate
//!   `Detail`;
//! - a movies reply moves `DetailPending` to `Detail` or `Error`.
//!
//! With `discard_stale_responses` off, replies are applied in arrival order
//! and the last one wins. With it on, a reply whose generation is not the
//! latest submission's is ignored.
//!
//! # Example
//!
//! ```rust
//! use character_finder::app::{Action, AppState};
//! use character_finder::catalog::CatalogClient;
//! use character_finder::ui::Theme;
//!
//! let mut state = AppState::new(CatalogClient::default(), Theme::default());
//! state.search_query = "Mickey".to_string();
//! let Action::Fetch(request) = state.submit_search() else { unreachable!() };
//! assert_eq!(request.context.generation, 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.search_bar.query, "Mickey");
//! ```

use super::actions::Action;
use super::dispatcher::{dispatch, resolve_movies, resolve_search};
use super::modes::InputMode;
use super::view::{RenderRegion, ViewMachine, ViewState};
use crate::catalog::{CatalogClient, CatalogReply};
use crate::domain::{Character, CharacterId, DetailFacet, FacetKind, SearchKind, SearchQuery};
use crate::render::{AffordanceTarget, Node, TemplateNode, Templates, Tone, Trigger};
use crate::ui::helpers::{truncate, visible_window};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, ButtonItem, CardItem, DetailView, EmptyState, EpisodeItem, FooterInfo, HeaderInfo,
    KindTab, NoticeView, SearchBarInfo, UIViewModel,
};

/// Rows taken by everything but the body: blank line, header, two borders,
/// the three-line search bar and the footer.
const CHROME_ROWS: usize = 8;

/// Rows per character card: title, three summary lines and a spacer.
const CARD_ROWS: usize = 5;

/// Rows above the episode list in a detail view: name, buttons, spacer.
const DETAIL_HEADER_ROWS: usize = 3;

/// Horizontal room lost to card indentation and the selection marker.
const CARD_INDENT: usize = 4;

const APP_TITLE: &str = "Buscador de personajes";
const IDLE_MESSAGE: &str = "Busca personajes de Disney";
const IDLE_SUBTITLE: &str = "Pulsa / para escribir y Tab para cambiar el tipo de búsqueda";

/// Shown in a detail view whose facet lists nothing.
const NO_TITLES_MESSAGE: &str = "No hay títulos para mostrar";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Builds the requests for every catalog operation.
    pub client: CatalogClient,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Term being typed into the search bar.
    pub search_query: String,

    /// Kind selected in the search bar.
    pub search_kind: SearchKind,

    /// Cursor over the cards of a list or the episodes of a detail.
    ///
    /// Reset to zero by every view transition.
    pub selected_index: usize,

    /// Ignore replies that belong to an older submission.
    pub discard_stale_responses: bool,

    generation: u64,
    view: ViewMachine,
}

impl AppState {
    /// Creates an idle application state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use character_finder::app::{AppState, ViewState};
    /// use character_finder::catalog::CatalogClient;
    /// use character_finder::ui::Theme;
    ///
    /// let state = AppState::new(CatalogClient::default(), Theme::default());
    /// assert_eq!(state.state(), &ViewState::Idle);
    /// assert_eq!(state.generation(), 0);
    /// ```
    #[must_use]
    pub fn new(client: CatalogClient, theme: Theme) -> Self {
        Self {
            client,
            theme,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            search_kind: SearchKind::default(),
            selected_index: 0,
            discard_stale_responses: false,
            generation: 0,
            view: ViewMachine::new(Templates::default()),
        }
    }

    /// Generation of the latest submission. Zero before the first one.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn view(&self) -> &ViewMachine {
        &self.view
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        self.view.state()
    }

    #[must_use]
    pub const fn region(&self) -> &RenderRegion {
        self.view.region()
    }

    pub fn cycle_search_kind(&mut self) {
        self.search_kind = self.search_kind.next();
        tracing::debug!(kind = ?self.search_kind, "search kind changed");
    }

    /// Starts a new submission for the current kind and term.
    ///
    /// The view is left untouched until the reply arrives.
    pub fn submit_search(&mut self) -> Action {
        self.generation += 1;
        let query = SearchQuery::new(self.search_kind, &self.search_query);
        Action::Fetch(dispatch(&self.client, &query, self.generation))
    }

    /// Applies a search reply. Returns whether the view changed.
    pub fn apply_search_reply(
        &mut self,
        kind: SearchKind,
        generation: u64,
        reply: &CatalogReply,
    ) -> bool {
        if self.discard_stale_responses && generation != self.generation {
            tracing::debug!(
                reply_generation = generation,
                current_generation = self.generation,
                "discarding stale search reply"
            );
            return false;
        }

        self.transition(resolve_search(kind, reply));
        true
    }

    /// Applies a movies-lookup reply for `character`. Returns whether the view
    /// changed.
    ///
    /// The reply is dropped when the character's detail is no longer shown.
    pub fn apply_movies_reply(
        &mut self,
        character: CharacterId,
        generation: u64,
        reply: &CatalogReply,
    ) -> bool {
        let Some(shown) = self
            .state()
            .detail_character()
            .filter(|shown| shown.id == character)
            .cloned()
        else {
            tracing::debug!(
                character_id = character,
                "movies reply for a character no longer shown"
            );
            return false;
        };

        if self.discard_stale_responses {
            let pending = matches!(
                self.state(),
                ViewState::DetailPending { facet: FacetKind::Movies, .. }
            );
            if !pending || generation != self.generation {
                tracing::debug!(
                    character_id = character,
                    reply_generation = generation,
                    current_generation = self.generation,
                    pending,
                    "discarding stale movies reply"
                );
                return false;
            }
        }

        self.transition(resolve_movies(shown, reply));
        true
    }

    /// Finds the trigger behind `target` in what is currently rendered.
    ///
    /// In a list the target is looked up on the selected card; in a detail,
    /// among the facet buttons.
    #[must_use]
    pub fn selected_trigger(&self, target: &AffordanceTarget) -> Option<Trigger> {
        match self.state() {
            ViewState::List(_) => self
                .region()
                .cards()
                .nth(self.selected_index)?
                .affordances()
                .iter()
                .find(|affordance| &affordance.target == target)
                .map(|affordance| affordance.trigger),
            ViewState::DetailPending { .. } | ViewState::Detail { .. } => {
                self.region().nodes().iter().find_map(|node| match node {
                    Node::DetailButtons(buttons) => buttons
                        .iter()
                        .find(|affordance| &affordance.target == target)
                        .map(|affordance| affordance.trigger),
                    _ => None,
                })
            }
            ViewState::Idle | ViewState::Error(_) => None,
        }
    }

    /// Fires a trigger taken from a rendered affordance.
    pub fn fire(&mut self, trigger: Trigger) -> (bool, Vec<Action>) {
        match trigger {
            Trigger::OpenFacet { character, facet } => self.open_facet(character, facet),
        }
    }

    /// Opens one facet of a character that is currently on screen.
    ///
    /// Movies enter `DetailPending` and emit the lookup; series are held by
    /// the character already and render at once.
    pub fn open_facet(&mut self, character: CharacterId, facet: FacetKind) -> (bool, Vec<Action>) {
        let Some(found) = self.find_character(character).cloned() else {
            tracing::debug!(
                character_id = character,
                "facet requested for a character not on screen"
            );
            return (false, vec![]);
        };

        tracing::debug!(character_id = character, facet = ?facet, "opening facet");

        match facet {
            FacetKind::Movies => {
                let request = self.client.movies_for_character(character, self.generation);
                self.transition(ViewState::DetailPending {
                    character: found,
                    facet: FacetKind::Movies,
                });
                (true, vec![Action::Fetch(request)])
            }
            FacetKind::Series => {
                let titles = found.tv_shows.clone();
                self.transition(ViewState::Detail {
                    character: found,
                    facet: DetailFacet::Series(titles),
                });
                (true, vec![])
            }
        }
    }

    /// The card under the cursor, when a list is shown.
    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        match self.state() {
            ViewState::List(characters) => characters.get(self.selected_index),
            _ => None,
        }
    }

    /// Moves the cursor down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Computes a renderable view model from the state and terminal size.
    ///
    /// Card and episode text is read back from the render region, so the
    /// terminal shows exactly what the last transition produced.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span =
            tracing::trace_span!("compute_viewmodel", rows, cols, state = self.state().name())
                .entered();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body: self.compute_body(rows, cols),
            footer: self.compute_footer(),
        }
    }

    fn transition(&mut self, next: ViewState) {
        self.view.transition(next);
        self.selected_index = 0;
    }

    fn find_character(&self, id: CharacterId) -> Option<&Character> {
        match self.state() {
            ViewState::List(characters) => characters.iter().find(|c| c.id == id),
            state => state.detail_character().filter(|c| c.id == id),
        }
    }

    fn item_count(&self) -> usize {
        match self.state() {
            ViewState::List(_) => self.region().cards().count(),
            ViewState::Detail { .. } => self.region().episodes().count(),
            _ => 0,
        }
    }

    fn compute_body(&self, rows: usize, cols: usize) -> BodyView {
        let available_rows = Self::calculate_available_rows(rows);

        match self.state() {
            ViewState::Idle => BodyView::Empty(EmptyState {
                message: IDLE_MESSAGE.to_string(),
                subtitle: IDLE_SUBTITLE.to_string(),
            }),
            ViewState::Error(failure) => BodyView::Notice(NoticeView {
                tone: Tone::Error,
                text: self
                    .region()
                    .notices(Tone::Error)
                    .next()
                    .unwrap_or(failure.message.as_str())
                    .to_string(),
            }),
            ViewState::List(_) => {
                let cards: Vec<&TemplateNode> = self.region().cards().collect();
                let capacity = (available_rows / CARD_ROWS).max(1);
                let (start, end) = visible_window(self.selected_index, cards.len(), capacity);
                let width = cols.saturating_sub(CARD_INDENT);

                BodyView::Cards(
                    cards[start..end]
                        .iter()
                        .enumerate()
                        .map(|(offset, card)| {
                            let is_selected = start + offset == self.selected_index;
                            Self::compute_card_item(card, is_selected, width)
                        })
                        .collect(),
                )
            }
            ViewState::DetailPending { .. } | ViewState::Detail { .. } => {
                BodyView::Detail(self.compute_detail(available_rows, cols))
            }
        }
    }

    fn compute_card_item(card: &TemplateNode, is_selected: bool, width: usize) -> CardItem {
        CardItem {
            title: truncate(card.text("h5", 0).unwrap_or_default(), width),
            image: card.image("img", 0).map(|(src, _alt)| src.to_string()).unwrap_or_default(),
            lines: (0..3)
                .filter_map(|nth| card.text("p", nth))
                .map(|line| truncate(line, width))
                .collect(),
            is_selected,
        }
    }

    fn compute_detail(&self, available_rows: usize, cols: usize) -> DetailView {
        let title = self
            .state()
            .detail_character()
            .map_or_else(String::new, |character| character.name.clone());
        let active = self.state().facet_kind();

        let buttons = self
            .region()
            .nodes()
            .iter()
            .find_map(|node| match node {
                Node::DetailButtons(buttons) => Some(buttons),
                _ => None,
            })
            .map(|buttons| {
                buttons
                    .iter()
                    .filter_map(|affordance| match (&affordance.target, affordance.trigger) {
                        (AffordanceTarget::Button(label), Trigger::OpenFacet { facet, .. }) => {
                            Some(ButtonItem {
                                label: label.clone(),
                                is_active: Some(facet) == active,
                            })
                        }
                        (AffordanceTarget::CardBody, _) => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let episodes: Vec<&TemplateNode> = self.region().episodes().collect();
        let capacity = available_rows.saturating_sub(DETAIL_HEADER_ROWS).max(1);
        let (start, end) = visible_window(self.selected_index, episodes.len(), capacity);
        let width = cols.saturating_sub(CARD_INDENT);

        let nothing_listed =
            episodes.is_empty() && matches!(self.state(), ViewState::Detail { .. });
        let notice = self
            .region()
            .notices(Tone::Info)
            .next()
            .or_else(|| nothing_listed.then_some(NO_TITLES_MESSAGE))
            .map(|text| NoticeView {
                tone: Tone::Info,
                text: text.to_string(),
            });

        DetailView {
            title,
            buttons,
            notice,
            episodes: episodes[start..end]
                .iter()
                .enumerate()
                .map(|(offset, episode)| EpisodeItem {
                    title: truncate(episode.text(".card-title", 0).unwrap_or_default(), width),
                    is_selected: start + offset == self.selected_index,
                })
                .collect(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.state() {
            ViewState::List(characters) => format!(" Personajes ({}) ", characters.len()),
            ViewState::DetailPending { character, .. } | ViewState::Detail { character, .. } => {
                format!(" {} ", character.name)
            }
            ViewState::Idle | ViewState::Error(_) => format!(" {APP_TITLE} "),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.state()) {
            (InputMode::Search, _) => {
                "Esc: cancelar  Enter: buscar  Tab: tipo  Escribe el término"
            }
            (InputMode::Normal, ViewState::List(_)) => {
                "j/k: mover  Enter/p: películas  /: buscar  Tab: tipo  q: salir"
            }
            (InputMode::Normal, ViewState::DetailPending { .. } | ViewState::Detail { .. }) => {
                "j/k: mover  p: Películas  s: Series de TV  /: buscar  q: salir"
            }
            (InputMode::Normal, ViewState::Idle | ViewState::Error(_)) => {
                "/: buscar  Tab: tipo  q: salir"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            kinds: SearchKind::ALL
                .into_iter()
                .map(|kind| KindTab {
                    label: kind.label(),
                    is_active: kind == self.search_kind,
                })
                .collect(),
            query: self.search_query.clone(),
            is_editing: self.input_mode.is_editing(),
        }
    }

    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(CHROME_ROWS)
    }
}
