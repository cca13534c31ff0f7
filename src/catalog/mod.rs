//! Character catalog client.
//!
//! The plugin never blocks on the network: requests are built here as plain
//! data, executed by the Zellij host, and their replies decoded here again.
//!
//! ```text
//! CatalogClient ──► CatalogRequest ──► host web_request
//!                                           │
//!        decode_* ◄── CatalogReply ◄────────┘ (WebRequestResult)
//! ```
//!
//! # Modules
//!
//! - `request`: URL construction per search kind and per character
//! - `response`: transport validation and payload decoding
//! - `context`: request context serialized through the host

pub mod context;
pub mod request;
pub mod response;

pub use context::{CatalogOperation, RequestContext, TraceContext};
pub use request::{CatalogClient, CatalogRequest};
pub use response::{
    decode_character_films, decode_characters, decode_page, CatalogPage, CatalogReply, PageInfo,
};
