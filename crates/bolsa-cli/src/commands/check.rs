use bolsa_core::extraction::xlsx::XlsxSheetReader;
use std::path::Path;

use crate::output;

pub fn run(input_file: &Path, output_format: &str) -> Result<(), bolsa_core::error::BolsaError> {
    let bytes = std::fs::read(input_file)?;
    let reader = XlsxSheetReader::new();
    let report = bolsa_core::check_file(&bytes, &reader)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_structure(&report),
    }

    Ok(())
}
