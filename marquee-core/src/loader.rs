//! Builds a [`Catalog`] from JSON documents.
//!
//! A catalog document is a JSON array of media records in TMDB list shape:
//! every record needs `id`, `media_type` and `popularity`; `genre_ids`
//! defaults to empty and all remaining fields are carried through.

use std::fs;
use std::path::Path;

use tracing::info;

use marquee_model::MediaItem;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Catalog shipped inside the binary, used when no file is configured.
pub fn bundled() -> Result<Catalog> {
    load_from_str(BUNDLED_CATALOG, "bundled catalog")
}

pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let contents =
        fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = load_from_str(&contents, &path.display().to_string())?;
    info!(path = %path.display(), items = catalog.len(), "catalog file loaded");
    Ok(catalog)
}

/// Parses `json`; `origin` names the document in error messages.
pub fn load_from_str(json: &str, origin: &str) -> Result<Catalog> {
    let items: Vec<MediaItem> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    Catalog::new(items)
}
