pub mod xlsx;

use crate::error::BolsaError;
use crate::model::SheetRow;

/// Trait for spreadsheet decoding backends.
pub trait SheetReader: Send + Sync {
    /// Decode at most `limit` rows of the first worksheet into positional cell strings.
    fn read_rows(&self, bytes: &[u8], limit: usize) -> Result<Vec<SheetRow>, BolsaError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
