pub mod catalog;
pub mod classify;
pub mod error;
pub mod extraction;
pub mod model;
pub mod validation;

use serde::{Deserialize, Serialize};

use classify::{classify_bolsa_type, classify_service, extract_keywords, ClassificationResult};
use error::BolsaError;
use extraction::SheetReader;
use model::{CatalogEntry, KeywordSet, SheetRow};
use validation::header::{map_headers, HeaderMapping};
use validation::report::{StructureCheck, StructureReport};
use validation::validate_structure;

/// Rows needed for structure validation: an optional header plus one data row.
pub const SAMPLE_ROWS: usize = 2;

/// Everything the upload form needs after a file is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadAnalysis {
    pub file_name: String,
    pub keywords: KeywordSet,
    pub structure: StructureReport,
    /// Column recognised for each field, present only when a header row was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_mapping: Option<HeaderMapping>,
    pub bolsa_type: ClassificationResult,
    pub service: ClassificationResult,
}

/// Reference catalogs the classifier picks from.
#[derive(Debug, Clone, Copy)]
pub struct Catalogs<'a> {
    pub bolsa_types: &'a [CatalogEntry],
    pub services: &'a [CatalogEntry],
}

/// Main API entry point: validate decoded rows and classify the file name.
///
/// Results are advisory. When the sheet is empty no classification is
/// attempted and both suggestions are `None`.
pub fn analyze_upload(
    file_name: &str,
    rows: &[SheetRow],
    catalogs: Catalogs<'_>,
) -> UploadAnalysis {
    let structure = validate_structure(rows);
    let keywords = extract_keywords(file_name);

    let header_mapping = structure
        .viability()
        .filter(|v| v.looks_like_header_row)
        .and_then(|_| rows.first())
        .map(|header| map_headers(header));

    let (bolsa_type, service) = if structure.check == StructureCheck::EmptyInput {
        tracing::info!(file_name, "empty upload, skipping classification");
        (None, None)
    } else {
        (
            classify_bolsa_type(&keywords, catalogs.bolsa_types),
            classify_service(&keywords, catalogs.services),
        )
    };

    UploadAnalysis {
        file_name: file_name.to_string(),
        keywords,
        structure,
        header_mapping,
        bolsa_type,
        service,
    }
}

/// Decode the first rows of a spreadsheet and analyze them.
pub fn analyze_file(
    bytes: &[u8],
    file_name: &str,
    reader: &dyn SheetReader,
    catalogs: Catalogs<'_>,
) -> Result<UploadAnalysis, BolsaError> {
    let rows = reader.read_rows(bytes, SAMPLE_ROWS)?;
    tracing::debug!(backend = reader.backend_name(), rows = rows.len(), "rows decoded");
    Ok(analyze_upload(file_name, &rows, catalogs))
}

/// Decode the first rows of a spreadsheet and validate their structure only.
pub fn check_file(bytes: &[u8], reader: &dyn SheetReader) -> Result<StructureReport, BolsaError> {
    let rows = reader.read_rows(bytes, SAMPLE_ROWS)?;
    Ok(validate_structure(&rows))
}
