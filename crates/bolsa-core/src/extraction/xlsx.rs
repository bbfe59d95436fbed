use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};

use crate::error::BolsaError;
use crate::extraction::SheetReader;
use crate::model::SheetRow;

/// Reads `.xlsx` uploads with calamine.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxSheetReader;

impl XlsxSheetReader {
    pub fn new() -> Self {
        Self
    }
}

impl SheetReader for XlsxSheetReader {
    fn read_rows(&self, bytes: &[u8], limit: usize) -> Result<Vec<SheetRow>, BolsaError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| BolsaError::SheetRead(format!("failed to open xlsx: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(BolsaError::NoWorksheet)?
            .map_err(|e| BolsaError::SheetRead(format!("failed to read first sheet: {e}")))?;

        // calamine trims leading empty columns; pad them back so positions hold.
        let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let rows: Vec<SheetRow> = range
            .rows()
            .take(limit)
            .map(|cells| {
                std::iter::repeat(String::new())
                    .take(leading_columns)
                    .chain(cells.iter().map(cell_as_string))
                    .collect()
            })
            .collect();

        tracing::debug!(rows = rows.len(), leading_columns, "decoded xlsx rows");
        Ok(rows)
    }

    fn backend_name(&self) -> &str {
        "calamine-xlsx"
    }
}

/// Render a cell the way users typed it: dates as `YYYY-MM-DD`, whole numbers
/// without a fractional part, empty cells as `""`.
fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| format!("{cell}")),
        Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}
