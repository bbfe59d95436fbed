use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BolsaError {
    #[error("failed to read spreadsheet: {0}")]
    SheetRead(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("unknown catalog preset '{0}'")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
