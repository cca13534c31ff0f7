//! Character domain model.
//!
//! A [`Character`] is one entry of the remote catalog. The catalog's JSON field
//! names (`_id`, `imageUrl`, `tvShows`, `videoGames`) are mapped onto Rust
//! names here so nothing else in the crate sees the wire shape.

use serde::Deserialize;

/// Catalog identifier of a character.
pub type CharacterId = i64;

/// A character as returned by the catalog.
///
/// Immutable once fetched. Missing arrays in the payload decode as empty
/// sequences; the catalog omits them for characters without appearances.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    #[serde(rename = "_id", alias = "id")]
    pub id: CharacterId,
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(rename = "tvShows", default)]
    pub tv_shows: Vec<String>,
    #[serde(rename = "videoGames", default)]
    pub video_games: Vec<String>,
}

impl Character {
    /// Creates a character with no appearances.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_finder::domain::Character;
    ///
    /// let mickey = Character::new(4703, "Mickey Mouse")
    ///     .with_films(["Fantasia"]);
    /// assert_eq!(mickey.films, vec!["Fantasia".to_string()]);
    /// assert!(mickey.tv_shows.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: String::new(),
            films: Vec::new(),
            tv_shows: Vec::new(),
            video_games: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    #[must_use]
    pub fn with_films<I, S>(mut self, films: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.films = films.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tv_shows<I, S>(mut self, tv_shows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tv_shows = tv_shows.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_video_games<I, S>(mut self, video_games: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.video_games = video_games.into_iter().map(Into::into).collect();
        self
    }
}
