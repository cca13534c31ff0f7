//! View state machine and the render region it owns.
//!
//! [`ViewState`] names what is visible; [`RenderRegion`] holds the nodes
//! that make it visible. The two only change together, inside
//! [`ViewMachine::transition`]: the next state's fragment is built first, then
//! the region is cleared and the fragment appended in the same call, so no
//! two states' nodes ever coexist and no empty frame is observable.
//!
//! # States
//!
//! ```text
//!            submit                  card body / Películas
//! Idle ──────────────► List ───────────────────────────► DetailPending(Movies)
//!   │                   │                                   │        │
//!   │ submit            │ submit                   lookup ok│        │lookup failed
//!   ▼                   ▼                                   ▼        ▼
//! Error ◄───────────── ...           Detail(Movies) ◄──────┘      Error
//!                                          ▲ │
//!                           Películas      │ │ Series de TV
//!                                          │ ▼
//!                                    Detail(Series)
//! ```
//!
//! A submission from any state ends in `List` or `Error` once its reply
//! arrives.

use crate::domain::{Character, DetailFacet, FacetKind, Failure};
use crate::render::{
    render_character_card, render_detail_buttons, render_episode_card, render_notice, Fragment,
    Node, TemplateNode, Templates, Tone,
};

/// Message shown when a state's nodes could not be produced.
pub const RENDER_RETRY_MESSAGE: &str =
    "Hubo un error al mostrar los resultados. Por favor, intenta de nuevo.";

/// Notice shown while the movies lookup is in flight.
pub const MOVIES_LOADING_MESSAGE: &str = "Cargando películas...";

/// What the render region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing rendered yet.
    #[default]
    Idle,
    /// Character cards for a search result, in catalog order.
    List(Vec<Character>),
    /// A single error notice.
    Error(Failure),
    /// A character's detail while its facet data is being fetched.
    DetailPending {
        character: Character,
        facet: FacetKind,
    },
    /// A character's detail with one facet's titles.
    Detail {
        character: Character,
        facet: DetailFacet,
    },
}

impl ViewState {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::List(_) => "list",
            Self::Error(_) => "error",
            Self::DetailPending { .. } => "detail_pending",
            Self::Detail { .. } => "detail",
        }
    }

    /// The character whose detail is shown, if any.
    #[must_use]
    pub const fn detail_character(&self) -> Option<&Character> {
        match self {
            Self::DetailPending { character, .. } | Self::Detail { character, .. } => {
                Some(character)
            }
            _ => None,
        }
    }

    /// The facet shown or being fetched, if any.
    #[must_use]
    pub const fn facet_kind(&self) -> Option<FacetKind> {
        match self {
            Self::DetailPending { facet, .. } => Some(*facet),
            Self::Detail { facet, .. } => Some(facet.kind()),
            _ => None,
        }
    }
}

/// The single visible region of the UI.
///
/// Readable by anyone; writable only by [`ViewMachine::transition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRegion {
    nodes: Vec<Node>,
}

impl RenderRegion {
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Character cards currently in the region.
    pub fn cards(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            _ => None,
        })
    }

    /// Episode cards currently in the region.
    pub fn episodes(&self) -> impl Iterator<Item = &TemplateNode> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Episode(episode) => Some(episode),
            _ => None,
        })
    }

    /// Notices of the given tone currently in the region.
    pub fn notices(&self, tone: Tone) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(move |node| match node {
            Node::Notice { tone: t, text } if *t == tone => Some(text.as_str()),
            _ => None,
        })
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, fragment: Fragment) {
        self.nodes.extend(fragment.into_nodes());
    }
}

/// Owner of the current [`ViewState`] and its [`RenderRegion`].
#[derive(Debug, Clone)]
pub struct ViewMachine {
    state: ViewState,
    region: RenderRegion,
    templates: Templates,
}

impl ViewMachine {
    #[must_use]
    pub fn new(templates: Templates) -> Self {
        Self {
            state: ViewState::Idle,
            region: RenderRegion::default(),
            templates,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn region(&self) -> &RenderRegion {
        &self.region
    }

    /// Moves to `next`, replacing the region's content.
    ///
    /// If `next` cannot be rendered the machine enters an error state with a
    /// `RenderError` failure instead.
    pub fn transition(&mut self, next: ViewState) {
        let _span = tracing::debug_span!(
            "view_transition",
            from = self.state.name(),
            to = next.name()
        )
        .entered();

        let (state, fragment) = match build_fragment(&next, &self.templates) {
            Ok(fragment) => (next, fragment),
            Err(failure) => {
                tracing::error!(
                    error = %failure,
                    state = next.name(),
                    "failed to render view state"
                );
                let failure = failure.with_message(RENDER_RETRY_MESSAGE);
                let fragment = error_fragment(&failure);
                (ViewState::Error(failure), fragment)
            }
        };

        self.region.clear();
        self.region.append(fragment);
        self.state = state;

        tracing::debug!(
            state = self.state.name(),
            node_count = self.region.nodes().len(),
            "view transitioned"
        );
    }
}

impl Default for ViewMachine {
    fn default() -> Self {
        Self::new(Templates::default())
    }
}

fn build_fragment(state: &ViewState, templates: &Templates) -> Result<Fragment, Failure> {
    match state {
        ViewState::Idle => Ok(Fragment::new()),
        ViewState::List(characters) => characters
            .iter()
            .map(|character| render_character_card(character, templates))
            .collect(),
        ViewState::Error(failure) => Ok(error_fragment(failure)),
        ViewState::DetailPending { character, facet } => {
            let mut fragment = Fragment::new();
            fragment.push(render_detail_buttons(character));
            if *facet == FacetKind::Movies {
                fragment.push(render_notice(Tone::Info, MOVIES_LOADING_MESSAGE));
            }
            Ok(fragment)
        }
        ViewState::Detail { character, facet } => {
            let mut fragment = Fragment::new();
            fragment.push(render_detail_buttons(character));
            for title in facet.titles() {
                fragment.push(render_episode_card(title, facet.kind(), templates)?);
            }
            Ok(fragment)
        }
    }
}

fn error_fragment(failure: &Failure) -> Fragment {
    std::iter::once(render_notice(Tone::Error, failure.message.clone())).collect()
}
