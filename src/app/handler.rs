//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point into the application layer. It
//! pattern-matches an [`Event`], mutates [`AppState`] and returns whether the
//! UI should re-render together with the [`Action`]s the shim must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search bar**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`,
//!   `CycleSearchKind`, `Submit`
//! - **Affordances**: `OpenSelected`, `PressMovies`, `PressSeries`
//! - **Host**: `CatalogReply`, `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use character_finder::app::{handle_event, Action, AppState, Event};
//! use character_finder::catalog::CatalogClient;
//! use character_finder::ui::Theme;
//!
//! let mut state = AppState::new(CatalogClient::default(), Theme::default());
//! handle_event(&mut state, &Event::SearchMode)?;
//! for c in "Elsa".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), character_finder::FinderError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::{CatalogOperation, CatalogReply, RequestContext};
use crate::domain::{FacetKind, Result};
use crate::render::AffordanceTarget;
use std::collections::BTreeMap;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one card or title (wraps to top).
    KeyDown,
    /// Moves the cursor up by one card or title (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Gives the search bar focus, keeping the current term.
    SearchMode,
    /// Leaves the search bar without submitting.
    ExitSearch,
    /// Appends a character to the term.
    Char(char),
    /// Removes the last character of the term.
    Backspace,
    /// Selects the next search kind.
    CycleSearchKind,
    /// Submits the current kind and term.
    Submit,
    /// Activates the body of the selected card.
    OpenSelected,
    /// Presses the `Películas` button of the selected card or of the detail.
    PressMovies,
    /// Presses the `Series de TV` button of the detail.
    PressSeries,

    /// Reports whether the user granted web access.
    PermissionsResult {
        granted: bool,
    },

    /// A catalog reply delivered by the host.
    CatalogReply {
        /// Context map the request was issued with.
        context: BTreeMap<String, String>,
        reply: CatalogReply,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`FinderError::Context`](crate::domain::FinderError::Context) if a
/// catalog reply carries a context map this plugin did not produce.
///
/// # Tracing
///
/// Each call opens a debug span with the event; catalog replies are linked to
/// the span that issued their request.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "leaving search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_editing() {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_editing() {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            Ok((true, vec![]))
        }
        Event::CycleSearchKind => {
            state.cycle_search_kind();
            Ok((true, vec![]))
        }
        Event::Submit => {
            state.input_mode = InputMode::Normal;
            let action = state.submit_search();
            Ok((true, vec![action]))
        }
        Event::OpenSelected => Ok(press(state, &AffordanceTarget::CardBody)),
        Event::PressMovies => Ok(press(
            state,
            &AffordanceTarget::Button(FacetKind::Movies.button_label().to_string()),
        )),
        Event::PressSeries => Ok(press(
            state,
            &AffordanceTarget::Button(FacetKind::Series.button_label().to_string()),
        )),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
            } else {
                tracing::warn!("web access denied - searches will fail");
            }
            Ok((false, vec![]))
        }
        Event::CatalogReply { context, reply } => {
            let context = RequestContext::from_map(context)?;
            let _trace_guard = context.trace_context.as_ref().and_then(|trace| trace.attach());
            let _reply_span = tracing::debug_span!(
                "catalog_reply",
                operation = ?context.operation,
                generation = context.generation
            )
            .entered();

            let rendered = match context.operation {
                CatalogOperation::Search(kind) => {
                    state.apply_search_reply(kind, context.generation, reply)
                }
                CatalogOperation::MoviesForCharacter(id) => {
                    state.apply_movies_reply(id, context.generation, reply)
                }
            };
            Ok((rendered, vec![]))
        }
    }
}

fn press(state: &mut AppState, target: &AffordanceTarget) -> (bool, Vec<Action>) {
    let Some(trigger) = state.selected_trigger(target) else {
        tracing::debug!(target = ?target, view = state.state().name(), "no affordance to press");
        return (false, vec![]);
    };
    state.fire(trigger)
}

impl Event {
    /// Short name used as the span field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyDown => "key_down",
            Self::KeyUp => "key_up",
            Self::CloseFocus => "close_focus",
            Self::SearchMode => "search_mode",
            Self::ExitSearch => "exit_search",
            Self::Char(_) => "char",
            Self::Backspace => "backspace",
            Self::CycleSearchKind => "cycle_search_kind",
            Self::Submit => "submit",
            Self::OpenSelected => "open_selected",
            Self::PressMovies => "press_movies",
            Self::PressSeries => "press_series",
            Self::PermissionsResult { .. } => "permissions_result",
            Self::CatalogReply { .. } => "catalog_reply",
        }
    }
}
