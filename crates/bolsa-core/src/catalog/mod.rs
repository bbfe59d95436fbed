pub mod builtin;

use crate::error::BolsaError;
use crate::model::CatalogEntry;
use std::collections::HashSet;
use std::path::Path;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, BolsaError> {
    let content = std::fs::read_to_string(path).map_err(|e| BolsaError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Vec<CatalogEntry>, BolsaError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).map_err(|e| BolsaError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&entries)?;
    Ok(entries)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Vec<CatalogEntry>, BolsaError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    validate_catalog(&entries)?;
    Ok(entries)
}

/// Validate that a catalog is usable for classification.
pub fn validate_catalog(entries: &[CatalogEntry]) -> Result<(), BolsaError> {
    if entries.is_empty() {
        return Err(BolsaError::CatalogInvalid(
            "catalog must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if entry.description.trim().is_empty() {
            return Err(BolsaError::CatalogInvalid(format!(
                "entry {} has an empty description",
                entry.id
            )));
        }
        if !seen.insert(entry.id) {
            return Err(BolsaError::CatalogInvalid(format!(
                "duplicate entry id {}",
                entry.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"[
            { "id": 1, "code": "OTO", "description": "BOLSAS_OTORRINO" },
            { "id": 2, "description": "BOLSAS_GENERAL" }
        ]"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].code, "");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            parse_catalog_str("[]"),
            Err(BolsaError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            { "id": 1, "description": "A" },
            { "id": 1, "description": "B" }
        ]"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let json = r#"[{ "id": 1, "code": "X", "description": "  " }]"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "id": 7, "codigo": "CAR", "descripcion": "Cardiología" }}]"#
        )
        .unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog[0].id, 7);
        assert_eq!(catalog[0].description, "Cardiología");
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent/servicios.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/servicios.json"));
    }
}
