//! Detail facets: secondary views of one character's associated titles.

/// Which facet is requested, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Movies,
    Series,
}

impl FacetKind {
    /// Prefix written on each episode card of this facet.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movies => "Película",
            Self::Series => "Serie de TV",
        }
    }

    /// Caption of the detail button that opens this facet.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Movies => "Películas",
            Self::Series => "Series de TV",
        }
    }
}

/// A facet together with its ordered titles.
///
/// Always scoped to the character held by the same detail state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFacet {
    Movies(Vec<String>),
    Series(Vec<String>),
}

impl DetailFacet {
    #[must_use]
    pub const fn kind(&self) -> FacetKind {
        match self {
            Self::Movies(_) => FacetKind::Movies,
            Self::Series(_) => FacetKind::Series,
        }
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        match self {
            Self::Movies(titles) | Self::Series(titles) => titles,
        }
    }
}
