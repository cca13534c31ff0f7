//! OpenTelemetry-based tracing with file export.
//!
//! The plugin runs sandboxed in Zellij, with no collector to talk to, so spans
//! are serialized as OTLP JSON and appended to a rotating file in the plugin
//! data directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! The trace file is `~/.local/share/zellij/character-finder/character-finder-otlp.json`
//! (seen from inside the sandbox as `/host/.local/share/...`). It rotates at
//! 10 MB and keeps three backups.
//!
//! The level comes from the `trace_level` configuration key and defaults to
//! `info`.
//!
//! # Usage
//!
//! ```rust
//! use character_finder::observability::init_tracing;
//! use character_finder::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// Service and instrumentation scope name reported with every span.
pub const SERVICE_NAME: &str = "character-finder";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "character-finder-otlp.json";
