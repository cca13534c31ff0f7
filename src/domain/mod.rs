//! Domain layer for the character-finder plugin.
//!
//! Core types independent of Zellij APIs and of the HTTP transport: the
//! catalog's characters, search queries, detail facets and the failure
//! taxonomy shown to the user.
//!
//! # Organization
//!
//! - [`character`]: Character model decoded from the catalog
//! - [`query`]: Search kinds, per-kind messages and search queries
//! - [`facet`]: Detail facets (movies, series)
//! - [`failure`]: User-facing failure taxonomy
//! - [`error`]: Crate-level error type and result alias

pub mod character;
pub mod error;
pub mod facet;
pub mod failure;
pub mod query;

pub use character::{Character, CharacterId};
pub use error::{FinderError, Result};
pub use facet::{DetailFacet, FacetKind};
pub use failure::{Failure, FailureReason};
pub use query::{SearchKind, SearchQuery};
