//! Request context carried through the host's web request.
//!
//! Zellij performs web requests on the plugin's behalf and hands back an
//! opaque `BTreeMap<String, String>` alongside the reply. [`RequestContext`]
//! is serialized into that map so a reply can be routed back to the operation
//! that issued it (search kind or character lookup), stamped with the
//! submission generation, and linked to the tracing span that sent it.

use crate::domain::{CharacterId, FinderError, Result, SearchKind};
use std::collections::BTreeMap;

const KEY_OPERATION: &str = "operation";
const KEY_KIND: &str = "kind";
const KEY_CHARACTER: &str = "character_id";
const KEY_GENERATION: &str = "generation";
const KEY_TRACE_ID: &str = "trace_id";
const KEY_PARENT_SPAN_ID: &str = "parent_span_id";

const OPERATION_SEARCH: &str = "search";
const OPERATION_MOVIES: &str = "movies";

/// Distributed tracing context for linking a reply to the span of its request.
///
/// Captures the current trace and span IDs from OpenTelemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across the request boundary.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when no subscriber is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }

    /// Attaches this context as the remote parent of spans created while the
    /// returned guard is alive.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }
}

/// Which catalog operation a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOperation {
    /// A search by one of the three kinds.
    Search(SearchKind),
    /// The associated-movies lookup for one character.
    MoviesForCharacter(CharacterId),
}

/// Everything needed to route a reply back to its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub operation: CatalogOperation,
    /// Submission generation the request was issued under.
    pub generation: u64,
    pub trace_context: Option<TraceContext>,
}

impl RequestContext {
    /// Creates a context for `operation`, capturing the current trace context.
    #[must_use]
    pub fn new(operation: CatalogOperation, generation: u64) -> Self {
        Self {
            operation,
            generation,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Serializes the context into the host's string map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match self.operation {
            CatalogOperation::Search(kind) => {
                map.insert(KEY_OPERATION.to_string(), OPERATION_SEARCH.to_string());
                map.insert(KEY_KIND.to_string(), kind.key().to_string());
            }
            CatalogOperation::MoviesForCharacter(id) => {
                map.insert(KEY_OPERATION.to_string(), OPERATION_MOVIES.to_string());
                map.insert(KEY_CHARACTER.to_string(), id.to_string());
            }
        }
        map.insert(KEY_GENERATION.to_string(), self.generation.to_string());
        if let Some(trace) = &self.trace_context {
            map.insert(KEY_TRACE_ID.to_string(), trace.trace_id.clone());
            map.insert(KEY_PARENT_SPAN_ID.to_string(), trace.parent_span_id.clone());
        }
        map
    }

    /// Decodes a context map returned by the host.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Context`] when the map was not produced by
    /// [`RequestContext::to_map`] (missing or malformed keys).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let field = |key: &str| {
            map.get(key)
                .ok_or_else(|| FinderError::Context(format!("missing `{key}`")))
        };

        let operation = match field(KEY_OPERATION)?.as_str() {
            OPERATION_SEARCH => {
                let key = field(KEY_KIND)?;
                let kind = SearchKind::from_key(key)
                    .ok_or_else(|| FinderError::Context(format!("unknown search kind `{key}`")))?;
                CatalogOperation::Search(kind)
            }
            OPERATION_MOVIES => {
                let raw = field(KEY_CHARACTER)?;
                let id = raw
                    .parse::<CharacterId>()
                    .map_err(|e| FinderError::Context(format!("bad character id `{raw}`: {e}")))?;
                CatalogOperation::MoviesForCharacter(id)
            }
            other => {
                return Err(FinderError::Context(format!("unknown operation `{other}`")));
            }
        };

        let raw_generation = field(KEY_GENERATION)?;
        let generation = raw_generation
            .parse::<u64>()
            .map_err(|e| FinderError::Context(format!("bad generation `{raw_generation}`: {e}")))?;

        let trace_context = match (map.get(KEY_TRACE_ID), map.get(KEY_PARENT_SPAN_ID)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            operation,
            generation,
            trace_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn search_context_survives_the_host_map() {
        let context = RequestContext {
            operation: CatalogOperation::Search(SearchKind::ByVideoGame),
            generation: 12,
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };

        let decoded = RequestContext::from_map(&context.to_map()).unwrap();
        assert_eq!(decoded, context);
    }

    #[test]
    fn movies_context_survives_the_host_map() {
        let context = RequestContext {
            operation: CatalogOperation::MoviesForCharacter(4703),
            generation: 3,
            trace_context: None,
        };

        let map = context.to_map();
        assert_eq!(map.get("character_id").map(String::as_str), Some("4703"));
        assert_eq!(RequestContext::from_map(&map).unwrap(), context);
    }

    #[test]
    fn foreign_maps_are_rejected() {
        let mut map = BTreeMap::new();
        assert_matches!(RequestContext::from_map(&map), Err(FinderError::Context(_)));

        map.insert("operation".to_string(), "search".to_string());
        map.insert("kind".to_string(), "serie".to_string());
        map.insert("generation".to_string(), "1".to_string());
        assert_matches!(RequestContext::from_map(&map), Err(FinderError::Context(_)));
    }
}
