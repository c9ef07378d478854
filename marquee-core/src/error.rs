use std::path::PathBuf;

use thiserror::Error;

use marquee_model::MediaId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Movie Id value not provided or not found")]
    NotFound,

    #[error("Popularity value must be a float")]
    InvalidValue,

    #[error("Duplicate media id in catalog: {0}")]
    DuplicateId(MediaId),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Whether the error stems from client input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CatalogError::NotFound | CatalogError::InvalidValue)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
