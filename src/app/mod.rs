//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the catalog, render and UI
//! layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Catalog Replies ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`dispatcher`]: Query dispatch and reply resolution
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state and view model computation
//! - [`view`]: View state machine owning the render region

pub mod actions;
pub mod dispatcher;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use dispatcher::{dispatch, resolve_movies, resolve_search, MOVIES_RETRY_MESSAGE};
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
pub use view::{RenderRegion, ViewMachine, ViewState, MOVIES_LOADING_MESSAGE, RENDER_RETRY_MESSAGE};
