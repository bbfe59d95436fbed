use crate::error::BolsaError;
use crate::model::CatalogEntry;

const TIPOS_BOLSA_JSON: &str = include_str!("../../../../catalogs/tipos-bolsa.json");
const SERVICIOS_JSON: &str = include_str!("../../../../catalogs/servicios.json");

/// Available built-in catalogs.
pub const PRESETS: &[&str] = &["tipos-bolsa", "servicios"];

/// Load a built-in catalog by name.
pub fn load_preset(name: &str) -> Result<Vec<CatalogEntry>, BolsaError> {
    let json = match name {
        "tipos-bolsa" => TIPOS_BOLSA_JSON,
        "servicios" => SERVICIOS_JSON,
        _ => return Err(BolsaError::UnknownPreset(name.to_string())),
    };
    super::parse_catalog_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_load() {
        for name in PRESETS {
            let catalog = load_preset(name).unwrap();
            assert!(!catalog.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            load_preset("xyz"),
            Err(BolsaError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_bolsa_types_include_otorrino() {
        let catalog = load_preset("tipos-bolsa").unwrap();
        assert!(catalog.iter().any(|e| e.description == "BOLSAS_OTORRINO"));
    }
}
