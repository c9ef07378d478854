use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::media_id::MediaId;
use crate::media_type::MediaType;

/// Genre category id as used by TMDB (`28` is Action, `18` Drama, ...).
pub type GenreId = i64;

/// A movie or TV show record held in the catalog.
///
/// Only the fields the service interprets are typed; everything else in the
/// source record (title, overview, release dates, poster paths) rides along
/// in `extra` and is serialized back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: MediaId,
    pub media_type: MediaType,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    pub popularity: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaItem {
    pub fn new(id: impl Into<MediaId>, media_type: MediaType, popularity: f64) -> Self {
        Self {
            id: id.into(),
            media_type,
            genre_ids: Vec::new(),
            popularity,
            extra: Map::new(),
        }
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.genre_ids = genres.into_iter().collect();
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genre_ids.contains(&genre)
    }

    /// Display title; movies use `title`, TV shows use `name`.
    pub fn title(&self) -> Option<&str> {
        self.extra
            .get("title")
            .or_else(|| self.extra.get("name"))
            .and_then(Value::as_str)
    }
}
