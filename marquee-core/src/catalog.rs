use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use marquee_model::{GenreId, MediaId, MediaItem, MediaType, RawPopularity};

use crate::error::{CatalogError, Result};

/// Maximum number of items a discovery request returns.
pub const DISCOVER_LIMIT: usize = 20;

/// Per-type item counts, reported at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub movies: usize,
    pub tv: usize,
}

impl CatalogSummary {
    pub fn total(&self) -> usize {
        self.movies + self.tv
    }
}

/// In-memory catalog of movies and TV shows.
///
/// The item set is fixed at construction; only `popularity` changes at
/// runtime. Reads share the lock, an update holds it exclusively for the
/// whole lookup-and-set so writers on the same item never interleave.
pub struct Catalog {
    items: RwLock<Vec<MediaItem>>,
    // Positions never move because items are neither added nor removed.
    index: HashMap<String, usize>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("items", &self.index.len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<MediaItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.key().into_owned(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self {
            items: RwLock::new(items),
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn summary(&self) -> CatalogSummary {
        let items = self.items.read();
        items
            .iter()
            .fold(CatalogSummary::default(), |mut acc, item| {
                match item.media_type {
                    MediaType::Movie => acc.movies += 1,
                    MediaType::Tv => acc.tv += 1,
                }
                acc
            })
    }

    /// Items of `media_type`, optionally restricted to those tagged with
    /// `genre`, in catalog order and capped at [`DISCOVER_LIMIT`].
    pub fn find(
        &self,
        media_type: MediaType,
        genre: Option<GenreId>,
    ) -> Vec<MediaItem> {
        let items = self.items.read();
        items
            .iter()
            .filter(|item| item.media_type == media_type)
            .filter(|item| genre.is_none_or(|g| item.has_genre(g)))
            .take(DISCOVER_LIMIT)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &MediaId) -> Option<MediaItem> {
        let position = *self.index.get(&*id.key())?;
        self.items.read().get(position).cloned()
    }

    /// Sets the popularity of the item identified by `id`.
    ///
    /// The id is checked before the value: a missing or unknown id yields
    /// [`CatalogError::NotFound`] whatever the value, and only then is an
    /// unparseable value reported as [`CatalogError::InvalidValue`].
    pub fn update_popularity(
        &self,
        id: Option<&MediaId>,
        raw: Option<&RawPopularity>,
    ) -> Result<MediaItem> {
        let position = id
            .and_then(|id| self.index.get(&*id.key()))
            .copied()
            .ok_or(CatalogError::NotFound)?;

        let value = raw
            .and_then(RawPopularity::parse)
            .ok_or(CatalogError::InvalidValue)?;

        let mut items = self.items.write();
        let item = items.get_mut(position).ok_or(CatalogError::NotFound)?;
        let previous = item.popularity;
        item.popularity = value;
        debug!(id = %item.id, previous, value, "popularity updated");

        Ok(item.clone())
    }
}
