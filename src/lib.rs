//! Character Finder: a Zellij plugin that searches the Disney character
//! catalog by name, by film, or by video game.
//!
//! A search submitted from the search bar becomes one GET against the catalog.
//! Zellij performs it on the plugin's behalf and hands the reply back as an
//! event; the reply is normalized into a list of character cards or an error
//! notice. From a card the user opens the character's detail, with the films
//! fetched on demand and the TV series shown from data already at hand.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, plugin.rs)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Query dispatcher                                 │
//! │  - View state machine + render region               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Render Layer  │   │ Catalog Layer │
//! │ (ui/)         │   │ (render/)     │   │ (catalog/)    │
//! │ - ANSI paint  │   │ - Templates   │   │ - URLs        │
//! │ - Theming     │   │ - Cards       │   │ - Replies     │
//! │ - Components  │   │ - Affordances │   │ - Context     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Character, queries, facets, failures, errors     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/character-finder.wasm" {
//!         base_url "https://api.disneyapi.dev/character"
//!         search_kind "pelicula"
//!         discard_stale_responses "true"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use character_finder::catalog::CatalogReply;
//! use character_finder::{handle_event, initialize, Action, Config, Event, ViewState};
//!
//! let mut state = initialize(&Config::default());
//! state.search_query = "Mickey Mouse".to_string();
//!
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! let [Action::Fetch(request)] = actions.as_slice() else { unreachable!() };
//!
//! let reply = CatalogReply::http(200, r#"{"data": {"_id": 4703, "name": "Mickey Mouse"}}"#);
//! handle_event(&mut state, &Event::CatalogReply { context: request.context_map(), reply })?;
//! assert!(matches!(state.state(), ViewState::List(characters) if characters.len() == 1));
//! # Ok::<(), character_finder::FinderError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod render;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewState};
pub use domain::{Character, Failure, FailureReason, FinderError, Result, SearchKind, SearchQuery};
pub use ui::Theme;

use catalog::CatalogClient;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/character-finder.wasm" {
///     base_url "https://api.disneyapi.dev/character"
///     search_kind "nombre"
///     discard_stale_responses "false"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/mine.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog endpoint. Default: the public Disney API.
    pub base_url: String,

    /// Kind selected when the plugin opens: `nombre`, `pelicula` or
    /// `videojuego`. Default: `nombre`.
    pub search_kind: SearchKind,

    /// Ignore replies that belong to an older submission instead of letting
    /// the last arrival win. Default: `false`.
    pub discard_stale_responses: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox host dir.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn` or `error`.
    /// Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: CatalogClient::DEFAULT_BASE_URL.to_string(),
            search_kind: SearchKind::default(),
            discard_stale_responses: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown or malformed values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use character_finder::{Config, SearchKind};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_kind".to_string(), "videojuego".to_string());
    /// map.insert("discard_stale_responses".to_string(), "true".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.search_kind, SearchKind::ByVideoGame);
    /// assert!(config.discard_stale_responses);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let base_url = config
            .get("base_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| CatalogClient::DEFAULT_BASE_URL.to_string(), String::from);

        let search_kind = config
            .get("search_kind")
            .and_then(|key| SearchKind::from_key(key.trim()))
            .unwrap_or_default();

        let discard_stale_responses = config
            .get("discard_stale_responses")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            base_url,
            search_kind,
            discard_stale_responses,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the initial application state from `config`.
///
/// Never fails: an unusable theme or catalog URL is logged and replaced by
/// the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing character-finder plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    );

    let client = CatalogClient::new(&config.base_url).unwrap_or_else(|e| {
        tracing::warn!(
            base_url = %config.base_url,
            error = %e,
            "invalid catalog URL, using default"
        );
        CatalogClient::default()
    });

    let mut state = AppState::new(client, theme);
    state.search_kind = config.search_kind;
    state.discard_stale_responses = config.discard_stale_responses;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "   "),
            ("search_kind", "serie"),
            ("discard_stale_responses", "yes"),
        ]));
        assert_eq!(config.base_url, CatalogClient::DEFAULT_BASE_URL);
        assert_eq!(config.search_kind, SearchKind::ByName);
        assert!(!config.discard_stale_responses);
    }

    #[test]
    fn initialize_applies_configuration() {
        let config = Config::from_zellij(&map(&[
            ("base_url", "http://localhost:8080/character"),
            ("search_kind", "pelicula"),
            ("discard_stale_responses", "true"),
            ("theme", "catppuccin-latte"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.client.base_url().as_str(), "http://localhost:8080/character");
        assert_eq!(state.search_kind, SearchKind::ByMovie);
        assert!(state.discard_stale_responses);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn initialize_recovers_from_bad_theme_and_url() {
        let state = initialize(&Config {
            base_url: "not a url".to_string(),
            theme_name: Some("nope".to_string()),
            ..Config::default()
        });

        assert_eq!(state.client, CatalogClient::default());
        assert_eq!(state.theme, Theme::default());
    }
}
