//! Zellij plugin entry point.
//!
//! The plugin shim lives in `plugin.rs` and only exists on wasm targets, where
//! `zellij-tile` is available. Native builds get a stub `main` so the library
//! and its tests build on the host.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` for catalog requests
//! 3. **Subscribe**: Register for `Key`, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 4. **Update**: Translate host events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin;

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "character-finder is a Zellij plugin; build it for wasm32-wasip1 and load it from Zellij"
    );
}
