//! Catalog request construction.
//!
//! [`CatalogClient`] owns the catalog endpoint and builds one
//! [`CatalogRequest`] per operation. Requests are plain data: the plugin shim
//! hands them to the host, which performs the HTTP exchange asynchronously and
//! answers with a `WebRequestResult` event.

use super::context::{CatalogOperation, RequestContext};
use crate::domain::{CharacterId, FinderError, Result, SearchKind, SearchQuery};
use std::collections::BTreeMap;
use url::Url;

/// A GET request against the catalog, plus the context that routes its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub url: Url,
    pub context: RequestContext,
}

impl CatalogRequest {
    /// Context map to pass to the host alongside the request.
    #[must_use]
    pub fn context_map(&self) -> BTreeMap<String, String> {
        self.context.to_map()
    }
}

/// Builds requests against one catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    base_url: Url,
}

impl CatalogClient {
    /// The public Disney character catalog.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.disneyapi.dev/character";

    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Url`] if the URL does not parse, or
    /// [`FinderError::Config`] if it cannot carry path segments (e.g. `data:`).
    ///
    /// # Examples
    ///
    /// ```
    /// use character_finder::catalog::CatalogClient;
    ///
    /// let client = CatalogClient::new("https://api.disneyapi.dev/character")?;
    /// let request = client.by_movie("Frozen", 1);
    /// assert_eq!(request.url.as_str(), "https://api.disneyapi.dev/character?films=Frozen");
    /// # Ok::<(), character_finder::FinderError>(())
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FinderError::Config(format!(
                "catalog URL `{base_url}` cannot be used as a base"
            )));
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}?name={term}`
    #[must_use]
    pub fn by_name(&self, term: &str, generation: u64) -> CatalogRequest {
        self.query(SearchKind::ByName, term, generation)
    }

    /// `GET {base}?films={term}`
    #[must_use]
    pub fn by_movie(&self, term: &str, generation: u64) -> CatalogRequest {
        self.query(SearchKind::ByMovie, term, generation)
    }

    /// `GET {base}?videoGames={term}`
    #[must_use]
    pub fn by_video_game(&self, term: &str, generation: u64) -> CatalogRequest {
        self.query(SearchKind::ByVideoGame, term, generation)
    }

    /// Routes a query to the operation matching its kind.
    #[must_use]
    pub fn search(&self, query: &SearchQuery, generation: u64) -> CatalogRequest {
        match query.kind {
            SearchKind::ByName => self.by_name(&query.term, generation),
            SearchKind::ByMovie => self.by_movie(&query.term, generation),
            SearchKind::ByVideoGame => self.by_video_game(&query.term, generation),
        }
    }

    /// `GET {base}/{id}`: the single-character record whose films are the
    /// character's associated movies.
    #[must_use]
    pub fn movies_for_character(&self, id: CharacterId, generation: u64) -> CatalogRequest {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }

        CatalogRequest {
            url,
            context: RequestContext::new(CatalogOperation::MoviesForCharacter(id), generation),
        }
    }

    fn query(&self, kind: SearchKind, term: &str, generation: u64) -> CatalogRequest {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(kind.query_param(), term);

        tracing::debug!(kind = ?kind, url = %url, generation, "built catalog request");

        CatalogRequest {
            url,
            context: RequestContext::new(CatalogOperation::Search(kind), generation),
        }
    }
}

impl Default for CatalogClient {
    /// Returns a client for [`CatalogClient::DEFAULT_BASE_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in URL fails to parse (should never occur).
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL).expect("built-in catalog URL should always parse")
    }
}
