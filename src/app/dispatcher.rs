//! Query dispatcher: search submissions in, view states out.
//!
//! [`dispatch`] turns a submission into the matching catalog request;
//! [`resolve_search`] and [`resolve_movies`] turn the eventual reply into the
//! next [`ViewState`]. Exactly one attempt is made per submission. Failures
//! are logged here and mapped to per-kind messages; transport and status
//! failures share one message per kind, empty results get their own.

use super::view::ViewState;
use crate::catalog::{
    decode_character_films, decode_characters, decode_page, CatalogClient, CatalogReply,
    CatalogRequest,
};
use crate::domain::{Character, DetailFacet, Failure, SearchKind, SearchQuery};

/// Message shown when the movies lookup for a character fails.
pub const MOVIES_RETRY_MESSAGE: &str =
    "Hubo un error al obtener las películas. Por favor, intenta de nuevo.";

/// Builds the catalog request for one submission.
#[must_use]
pub fn dispatch(client: &CatalogClient, query: &SearchQuery, generation: u64) -> CatalogRequest {
    tracing::info!(kind = ?query.kind, term = %query.term, generation, "dispatching search");
    client.search(query, generation)
}

/// Maps a search reply to the next view state.
#[must_use]
pub fn resolve_search(kind: SearchKind, reply: &CatalogReply) -> ViewState {
    let outcome = match kind {
        SearchKind::ByName => decode_page(reply).map(|page| {
            tracing::debug!(
                reported = page.info.as_ref().map(|info| info.count),
                received = page.data.len(),
                "name search page decoded"
            );
            page.data
        }),
        SearchKind::ByMovie | SearchKind::ByVideoGame => decode_characters(reply),
    };

    match outcome {
        Ok(characters) if characters.is_empty() => {
            tracing::debug!(kind = ?kind, "search returned no characters");
            ViewState::Error(Failure::empty_result(kind.empty_result_message()))
        }
        Ok(characters) => {
            tracing::debug!(kind = ?kind, count = characters.len(), "search returned characters");
            ViewState::List(characters)
        }
        Err(failure) => {
            tracing::error!(
                kind = ?kind,
                reason = %failure.reason,
                error = %failure,
                "catalog search failed"
            );
            ViewState::Error(failure.with_message(kind.retry_message()))
        }
    }
}

/// Maps a movies-lookup reply for `character` to the next view state.
#[must_use]
pub fn resolve_movies(character: Character, reply: &CatalogReply) -> ViewState {
    match decode_character_films(reply) {
        Ok(titles) => {
            tracing::debug!(character_id = character.id, count = titles.len(), "movies resolved");
            ViewState::Detail {
                character,
                facet: DetailFacet::Movies(titles),
            }
        }
        Err(failure) => {
            tracing::error!(
                character_id = character.id,
                reason = %failure.reason,
                error = %failure,
                "movies lookup failed"
            );
            ViewState::Error(Failure::render(MOVIES_RETRY_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureReason;
    use assert_matches::assert_matches;

    fn page(data: &str) -> CatalogReply {
        CatalogReply::http(200, format!(r#"{{"info": {{"count": 0}}, "data": {data}}}"#))
    }

    #[test]
    fn non_empty_reply_lists_characters_in_order() {
        let reply = page(r#"[{"_id": 2, "name": "Elsa"}, {"_id": 1, "name": "Anna"}]"#);
        for kind in SearchKind::ALL {
            let ViewState::List(characters) = resolve_search(kind, &reply) else {
                panic!("expected a list for {kind:?}");
            };
            let ids: Vec<_> = characters.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![2, 1]);
        }
    }

    #[test]
    fn empty_reply_uses_the_kind_specific_message() {
        for kind in SearchKind::ALL {
            let state = resolve_search(kind, &page("[]"));
            assert_matches!(
                state,
                ViewState::Error(Failure { reason: FailureReason::EmptyResult, ref message })
                    if message == kind.empty_result_message()
            );
        }
    }

    #[test]
    fn failures_use_the_kind_specific_retry_message() {
        let replies = [
            CatalogReply::http(500, "oops"),
            CatalogReply::TransportFailed {
                reason: "connection refused".to_string(),
            },
            CatalogReply::http(200, "not json"),
        ];
        for kind in SearchKind::ALL {
            for reply in &replies {
                let ViewState::Error(failure) = resolve_search(kind, reply) else {
                    panic!("expected an error for {kind:?}");
                };
                assert_eq!(failure.message, kind.retry_message());
                assert_ne!(failure.reason, FailureReason::EmptyResult);
            }
        }
    }

    #[test]
    fn bad_status_reason_is_kept_for_diagnostics() {
        let ViewState::Error(failure) =
            resolve_search(SearchKind::ByName, &CatalogReply::http(502, ""))
        else {
            panic!("expected an error");
        };
        assert_matches!(failure.reason, FailureReason::BadStatus { code: 502, .. });
    }

    #[test]
    fn movies_failure_is_a_render_error() {
        let state = resolve_movies(Character::new(1, "Mickey"), &CatalogReply::http(404, ""));
        assert_matches!(
            state,
            ViewState::Error(Failure { reason: FailureReason::RenderError, .. })
        );
    }

    #[test]
    fn movies_success_is_scoped_to_the_character() {
        let reply = CatalogReply::http(
            200,
            r#"{"data": {"_id": 1, "name": "Mickey", "films": ["Fantasia"]}}"#,
        );
        let state = resolve_movies(Character::new(1, "Mickey"), &reply);
        assert_matches!(
            state,
            ViewState::Detail { ref character, facet: DetailFacet::Movies(ref titles) }
                if character.id == 1 && titles == &vec!["Fantasia".to_string()]
        );
    }
}
