pub mod analyze;
pub mod catalogs;
pub mod check;
pub mod classify;

use bolsa_core::catalog::{builtin, load_catalog};
use bolsa_core::error::BolsaError;
use bolsa_core::model::CatalogEntry;
use std::path::{Path, PathBuf};

/// Load a catalog from `file` if given, otherwise the named built-in preset.
pub(crate) fn load_catalog_or_preset(
    file: Option<PathBuf>,
    preset: &str,
) -> Result<Vec<CatalogEntry>, BolsaError> {
    match file {
        Some(path) => load_catalog(&path),
        None => builtin::load_preset(preset),
    }
}

/// Final path component, as the upload form would report it.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
