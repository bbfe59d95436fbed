pub mod engine;
pub mod keywords;
pub mod outcome;
pub mod similarity;

pub use engine::{classify_bolsa_type, classify_service};
pub use keywords::extract_keywords;
pub use outcome::{Classification, ClassificationResult, ClassifyOutcome, MatchMethod};

use crate::model::CatalogEntry;

/// Suggest a bolsa type and a service for an uploaded file from its name alone.
pub fn classify_filename(
    file_name: &str,
    bolsa_types: &[CatalogEntry],
    services: &[CatalogEntry],
) -> ClassifyOutcome {
    let keywords = extract_keywords(file_name);
    let bolsa_type = classify_bolsa_type(&keywords, bolsa_types);
    let service = classify_service(&keywords, services);

    ClassifyOutcome {
        file_name: file_name.to_string(),
        keywords,
        bolsa_type,
        service,
    }
}
