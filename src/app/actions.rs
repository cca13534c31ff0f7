//! Side effects requested by the event handler.
//!
//! The handler never talks to the host. It returns [`Action`]s and the plugin
//! shim carries them out: hiding the pane, or handing a catalog request to
//! Zellij's `web_request`.
//!
//! # Example
//!
//! ```rust
//! use character_finder::app::Action;
//! use character_finder::catalog::CatalogClient;
//!
//! let request = CatalogClient::default().by_name("Mickey", 1);
//! let actions = vec![Action::Fetch(request)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::catalog::CatalogRequest;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a GET against the catalog.
    ///
    /// The reply comes back later as a `WebRequestResult` event carrying the
    /// request's context map.
    Fetch(CatalogRequest),
}
