//! Catalog reply validation and decoding.
//!
//! Every reply goes through the same checks, whichever operation issued it:
//! a transport failure or an unparsable body is a `NetworkError`, a non-2xx
//! status is `BadStatus`. Only then is the `data` field decoded.

use crate::domain::{Character, Failure};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// What the host reported for one web request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogReply {
    /// An HTTP exchange took place.
    Http { status: u16, body: Vec<u8> },
    /// No HTTP exchange took place (DNS, connection or TLS failure).
    TransportFailed { reason: String },
}

impl CatalogReply {
    /// Convenience constructor for an HTTP reply with a textual body.
    #[must_use]
    pub fn http(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Classifies a raw `WebRequestResult` from the host.
    ///
    /// The host answers a failed exchange (DNS, connect, TLS) with no headers
    /// and the error text as body. A real HTTP response always carries headers.
    #[must_use]
    pub fn from_host(status: u16, headers: &BTreeMap<String, String>, body: Vec<u8>) -> Self {
        if headers.is_empty() {
            Self::TransportFailed {
                reason: String::from_utf8_lossy(&body).into_owned(),
            }
        } else {
            Self::Http { status, body }
        }
    }
}

/// Paging metadata sent with every catalog payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub previous_page: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A decoded catalog payload.
///
/// The catalog sends `data` as an array, except when exactly one character
/// matches (and for the single-character endpoint), where it sends the bare
/// object. Both decode to a sequence here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    #[serde(deserialize_with = "one_or_many")]
    pub data: Vec<Character>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Character>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Character>),
        One(Box<Character>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(characters) => characters,
        OneOrMany::One(character) => vec![*character],
    })
}

/// Checks the transport outcome and returns the body of a 2xx reply.
fn checked_body(reply: &CatalogReply) -> Result<&[u8], Failure> {
    match reply {
        CatalogReply::TransportFailed { reason } => Err(Failure::network(reason.clone())),
        CatalogReply::Http { status, .. } if !(200..300).contains(status) => {
            Err(Failure::bad_status(*status))
        }
        CatalogReply::Http { body, .. } => Ok(body),
    }
}

/// Decodes the whole payload, as the name search returns it.
///
/// # Errors
///
/// `NetworkError` for transport failures and malformed bodies, `BadStatus`
/// for non-2xx replies.
pub fn decode_page(reply: &CatalogReply) -> Result<CatalogPage, Failure> {
    let body = checked_body(reply)?;
    serde_json::from_slice(body)
        .map_err(|e| Failure::network(format!("invalid catalog payload: {e}")))
}

/// Decodes the `data` field only, as the film and game searches return it.
///
/// # Errors
///
/// Same as [`decode_page`].
pub fn decode_characters(reply: &CatalogReply) -> Result<Vec<Character>, Failure> {
    decode_page(reply).map(|page| page.data)
}

/// Decodes a single-character reply into that character's film titles.
///
/// # Errors
///
/// Same as [`decode_page`], plus `NetworkError` when `data` holds no
/// character.
pub fn decode_character_films(reply: &CatalogReply) -> Result<Vec<String>, Failure> {
    decode_page(reply)?
        .data
        .into_iter()
        .next()
        .map(|character| character.films)
        .ok_or_else(|| Failure::network("character lookup returned no character"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureReason;
    use assert_matches::assert_matches;

    const TWO_CHARACTERS: &str = r#"{
        "info": {"count": 2, "totalPages": 1, "previousPage": null, "nextPage": null},
        "data": [
            {"_id": 1, "name": "Anna", "films": ["Frozen"], "tvShows": [], "videoGames": []},
            {"_id": 2, "name": "Elsa", "films": ["Frozen", "Frozen II"],
             "tvShows": [], "videoGames": []}
        ]
    }"#;

    #[test]
    fn host_reply_without_headers_is_a_transport_failure() {
        let reply = CatalogReply::from_host(400, &BTreeMap::new(), b"dns error".to_vec());
        assert_eq!(
            reply,
            CatalogReply::TransportFailed {
                reason: "dns error".to_string()
            }
        );
        assert_matches!(
            decode_page(&reply),
            Err(Failure { reason: FailureReason::NetworkError, .. })
        );
    }

    #[test]
    fn host_reply_with_headers_keeps_its_status() {
        let headers = BTreeMap::from([("content-type".to_string(), "text/html".to_string())]);
        let reply = CatalogReply::from_host(404, &headers, b"not here".to_vec());
        assert_eq!(reply, CatalogReply::http(404, "not here"));
        assert_matches!(
            decode_page(&reply),
            Err(Failure { reason: FailureReason::BadStatus { code: 404, .. }, .. })
        );
    }

    #[test]
    fn page_keeps_order_and_info() {
        let page = decode_page(&CatalogReply::http(200, TWO_CHARACTERS)).unwrap();
        let names: Vec<_> = page.data.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Anna", "Elsa"]);
        assert_eq!(page.info.map(|i| i.count), Some(2));
    }

    #[test]
    fn single_object_data_decodes_as_one_character() {
        let body = r#"{
            "info": {"count": 1},
            "data": {"_id": 4703, "name": "Mickey Mouse", "films": ["Fantasia"]}
        }"#;
        let characters = decode_characters(&CatalogReply::http(200, body)).unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].films, vec!["Fantasia".to_string()]);
    }

    #[test]
    fn empty_data_is_a_success() {
        let characters = decode_characters(&CatalogReply::http(200, r#"{"data": []}"#)).unwrap();
        assert!(characters.is_empty());
    }

    #[test]
    fn non_success_status_is_bad_status() {
        let failure = decode_page(&CatalogReply::http(404, "Not Found")).unwrap_err();
        assert_eq!(
            failure.reason,
            FailureReason::BadStatus {
                code: 404,
                status_text: "Not Found".to_string()
            }
        );
        assert_eq!(failure.message, "Error: 404 - Not Found");
    }

    #[test]
    fn malformed_body_is_network_error() {
        let failure = decode_characters(&CatalogReply::http(200, "<html>")).unwrap_err();
        assert_matches!(failure.reason, FailureReason::NetworkError);
    }

    #[test]
    fn transport_failure_is_network_error() {
        let reply = CatalogReply::TransportFailed {
            reason: "dns error: failed to lookup address".to_string(),
        };
        let failure = decode_characters(&reply).unwrap_err();
        assert_matches!(failure.reason, FailureReason::NetworkError);
        assert!(failure.message.contains("dns error"));
    }

    #[test]
    fn character_films_come_from_the_single_record() {
        let body = r#"{
            "data": {"_id": 4703, "name": "Mickey Mouse",
                     "films": ["Fantasia", "Fun and Fancy Free"]}
        }"#;
        let films = decode_character_films(&CatalogReply::http(200, body)).unwrap();
        assert_eq!(films, vec!["Fantasia".to_string(), "Fun and Fancy Free".to_string()]);

        let missing = decode_character_films(&CatalogReply::http(200, r#"{"data": []}"#));
        assert_matches!(missing, Err(Failure { reason: FailureReason::NetworkError, .. }));
    }
}
