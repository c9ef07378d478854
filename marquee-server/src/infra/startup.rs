use anyhow::{Context, Result};
use tracing::{info, warn};

use marquee_core::{Catalog, loader};

use crate::infra::config::{CatalogConfig, ConfigWarnings};

/// Loads the catalog named by the configuration, falling back to the
/// bundled one.
pub fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let catalog = match &config.path {
        Some(path) => loader::load_from_path(path).with_context(|| {
            format!("failed to load catalog from {}", path.display())
        })?,
        None => {
            loader::bundled().context("bundled catalog is invalid")?
        }
    };

    let summary = catalog.summary();
    info!(
        catalog.source = %config
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string()),
        catalog.movies = summary.movies,
        catalog.tv = summary.tv,
        catalog.total = summary.total(),
        "catalog ready"
    );

    Ok(catalog)
}

pub fn log_config_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }
}
