//! Search kinds and search queries.
//!
//! A [`SearchQuery`] is built once per submission from the search bar and
//! consumed by the query dispatcher. The [`SearchKind`] decides which catalog
//! query parameter is used and which user-facing messages are shown.

/// Which catalog field a search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Match on the character's name (`?name=`).
    #[default]
    ByName,
    /// Match on a film the character appears in (`?films=`).
    ByMovie,
    /// Match on a video game the character appears in (`?videoGames=`).
    ByVideoGame,
}

impl SearchKind {
    /// All kinds in selector order.
    pub const ALL: [Self; 3] = [Self::ByName, Self::ByMovie, Self::ByVideoGame];

    /// Catalog query parameter for this kind.
    #[must_use]
    pub const fn query_param(self) -> &'static str {
        match self {
            Self::ByName => "name",
            Self::ByMovie => "films",
            Self::ByVideoGame => "videoGames",
        }
    }

    /// Selector key, as accepted in configuration (`search_kind "pelicula"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ByName => "nombre",
            Self::ByMovie => "pelicula",
            Self::ByVideoGame => "videojuego",
        }
    }

    /// Label shown in the search bar's kind selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByName => "Nombre",
            Self::ByMovie => "Película",
            Self::ByVideoGame => "Videojuego",
        }
    }

    /// Parses a selector key. Unknown keys yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_finder::domain::SearchKind;
    ///
    /// assert_eq!(SearchKind::from_key("pelicula"), Some(SearchKind::ByMovie));
    /// assert_eq!(SearchKind::from_key("serie"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key.trim())
    }

    /// The next kind in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ByName => Self::ByMovie,
            Self::ByMovie => Self::ByVideoGame,
            Self::ByVideoGame => Self::ByName,
        }
    }

    /// Message shown when the catalog answers with an empty result set.
    ///
    /// Each kind has its own wording.
    #[must_use]
    pub const fn empty_result_message(self) -> &'static str {
        match self {
            Self::ByName => "No se encontraron personajes con ese nombre",
            Self::ByMovie => "No se encontraron personajes para esa película",
            Self::ByVideoGame => "No se encontraron personajes para ese videojuego",
        }
    }

    /// Message shown when the catalog request failed.
    #[must_use]
    pub const fn retry_message(self) -> &'static str {
        match self {
            Self::ByName => "Hubo un error al buscar personajes. Por favor, intenta de nuevo",
            Self::ByMovie => "Hubo un error al buscar películas. Por favor, intenta de nuevo",
            Self::ByVideoGame => {
                "Hubo un error al buscar videojuegos. Por favor, intenta de nuevo."
            }
        }
    }
}

/// One user submission: a search kind plus the free-text term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub kind: SearchKind,
    pub term: String,
}

impl SearchQuery {
    /// Builds a query, trimming surrounding whitespace from the term.
    ///
    /// Empty terms are passed through; the catalog decides what they match.
    #[must_use]
    pub fn new(kind: SearchKind, term: &str) -> Self {
        Self {
            kind,
            term: term.trim().to_string(),
        }
    }
}
