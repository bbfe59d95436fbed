use bolsa_core::classify::classify_filename;
use std::path::{Path, PathBuf};

use super::{display_name, load_catalog_or_preset};
use crate::output;

pub fn run(
    file_name: &Path,
    tipos: Option<PathBuf>,
    servicios: Option<PathBuf>,
    output_format: &str,
) -> Result<(), bolsa_core::error::BolsaError> {
    let bolsa_types = load_catalog_or_preset(tipos, "tipos-bolsa")?;
    let services = load_catalog_or_preset(servicios, "servicios")?;

    let outcome = classify_filename(&display_name(file_name), &bolsa_types, &services);

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_classify(&outcome),
    }

    Ok(())
}
