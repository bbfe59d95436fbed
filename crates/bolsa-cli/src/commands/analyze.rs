use bolsa_core::extraction::xlsx::XlsxSheetReader;
use bolsa_core::Catalogs;
use std::path::{Path, PathBuf};

use super::{display_name, load_catalog_or_preset};
use crate::output;

pub fn run(
    input_file: &Path,
    tipos: Option<PathBuf>,
    servicios: Option<PathBuf>,
    output_format: &str,
) -> Result<(), bolsa_core::error::BolsaError> {
    let bolsa_types = load_catalog_or_preset(tipos, "tipos-bolsa")?;
    let services = load_catalog_or_preset(servicios, "servicios")?;

    let bytes = std::fs::read(input_file)?;
    let reader = XlsxSheetReader::new();
    let analysis = bolsa_core::analyze_file(
        &bytes,
        &display_name(input_file),
        &reader,
        Catalogs {
            bolsa_types: &bolsa_types,
            services: &services,
        },
    )?;

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => output::table::print_analysis(&analysis),
    }

    Ok(())
}
