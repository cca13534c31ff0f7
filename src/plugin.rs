//! Zellij plugin wrapper.
//!
//! Thin integration layer between the character-finder library and the Zellij
//! plugin system. Host events are translated into library events, and the
//! library's actions are carried out with host calls.
//!
//! # Web Requests
//!
//! Catalog requests are performed by the host:
//!
//! ```text
//! ┌─────────────────────────┐            ┌─────────────────────────┐
//! │   Plugin (this shim)    │ web_request│     Zellij host         │
//! │  ┌──────────────────┐   │ ─────────▶ │   HTTP GET to catalog   │
//! │  │  AppState        │   │            │                         │
//! │  └──────────────────┘   │ ◀───────── │                         │
//! │                         │ WebRequest │                         │
//! │                         │   Result   │                         │
//! └─────────────────────────┘            └─────────────────────────┘
//! ```
//!
//! The request's context map travels with it and comes back untouched, which
//! is how replies are routed to the operation that issued them.
//!
//! # Event Mapping
//!
//! - `Key(..)` → navigation, search bar and affordance events
//! - `WebRequestResult` → `Event::CatalogReply`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Tab`: Next search kind
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `/`: Focus the search bar
//! - `Enter`: Open the selected card
//! - `p`: Películas
//! - `s`: Series de TV
//! - `q`: Close plugin
//!
//! In search mode:
//! - any character: Type
//! - `Enter`: Submit
//! - `Esc`: Leave the search bar

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use character_finder::catalog::CatalogReply;
use character_finder::{handle_event, Action, Config, Event, InputMode};

/// Plugin state wrapper.
pub struct State {
    /// Core application state from library layer.
    app: character_finder::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: character_finder::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` to reach the catalog.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        character_finder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            base_url = %config.base_url,
            search_kind = ?config.search_kind,
            discard_stale_responses = config.discard_stale_responses,
            "parsed configuration"
        );
        self.app = character_finder::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %span_name,
            event_type = %event_name
        );
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                Self::map_web_request_result(status, &headers, body, context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        character_finder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match (self.app.input_mode, &key.bare_key) {
            (_, BareKey::Tab) => Event::CycleSearchKind,
            (InputMode::Search, BareKey::Enter) => Event::Submit,
            (InputMode::Search, BareKey::Esc) => Event::ExitSearch,
            (InputMode::Search, BareKey::Backspace) => Event::Backspace,
            (InputMode::Search, BareKey::Char(c)) => Event::Char(*c),
            (InputMode::Normal, BareKey::Down | BareKey::Char('j')) => Event::KeyDown,
            (InputMode::Normal, BareKey::Up | BareKey::Char('k')) => Event::KeyUp,
            (InputMode::Normal, BareKey::Char('/')) => Event::SearchMode,
            (InputMode::Normal, BareKey::Enter) => Event::OpenSelected,
            (InputMode::Normal, BareKey::Char('p')) => Event::PressMovies,
            (InputMode::Normal, BareKey::Char('s')) => Event::PressSeries,
            (InputMode::Normal, BareKey::Char('q')) => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_web_request_result(
        status: u16,
        headers: &BTreeMap<String, String>,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    ) -> Event {
        tracing::debug!(
            status,
            header_count = headers.len(),
            body_len = body.len(),
            "web request result"
        );
        Event::CatalogReply {
            context,
            reply: CatalogReply::from_host(status, headers, body),
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "issuing catalog request");
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context_map(),
                );
            }
        }
    }
}
