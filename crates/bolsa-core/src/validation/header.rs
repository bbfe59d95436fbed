use serde::{Deserialize, Serialize};

use crate::model::Field;

/// Tokens that mark a row as column titles rather than data.
const HEADER_KEYWORDS: &[&str] = &[
    "FECHA",
    "DOCUMENTO",
    "ASEGURADO",
    "SEXO",
    "TELEFONO",
    "TELÉFONO",
    "CORREO",
    "EMAIL",
    "IPRESS",
    "TIPO CITA",
    "TIPO_CITA",
];

fn is_label_fragment(cell: &str) -> bool {
    let upper = cell.to_uppercase();
    HEADER_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

/// Detect if a row looks like a header row.
///
/// One recognised keyword in any cell is enough: header titles vary between
/// hospitals and most files only share a couple of them.
pub fn is_header_row<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().any(|cell| is_label_fragment(cell.as_ref()))
}

/// True if some cell holds a value that is not a column title.
pub fn has_any_data<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().map(|c| c.as_ref().trim()).any(|cell| {
        !cell.is_empty() && !is_label_fragment(cell)
    })
}

/// True if every cell is empty or whitespace.
pub fn is_blank_row<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().all(|cell| cell.as_ref().trim().is_empty())
}

/// Alternative sets of substrings naming a field; one set must match entirely.
fn synonyms(field: Field) -> &'static [&'static [&'static str]] {
    match field {
        Field::PreferredDate => &[&["FECHA", "PREFERIDA"]],
        Field::DocumentType => &[&["TIPO", "DOC"]],
        Field::DocumentNumber => &[
            &["DNI"],
            &["NUMERO", "DOC"],
            &["NÚMERO", "DOC"],
            &["NRO", "DOC"],
        ],
        Field::InsuredName => &[&["ASEGURADO"], &["NOMBRE"], &["PACIENTE"]],
        Field::Sex => &[&["SEXO"], &["GENERO"], &["GÉNERO"]],
        Field::BirthDate => &[&["NACIMIENTO"], &["FECHA", "NAC"]],
        Field::Phone => &[&["TELEFONO"], &["TELÉFONO"], &["CELULAR"]],
        Field::Email => &[&["CORREO"], &["EMAIL"]],
        Field::FacilityCode => &[&["IPRESS"], &["ESTABLECIMIENTO"]],
        Field::AppointmentType => &[&["TIPO", "CITA"]],
    }
}

/// Column recognised for one field, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMatch {
    pub field: Field,
    pub column: Option<usize>,
}

/// Which header column was recognised as which canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMapping(Vec<HeaderMatch>);

impl HeaderMapping {
    pub fn column(&self, field: Field) -> Option<usize> {
        self.0
            .iter()
            .find(|m| m.field == field)
            .and_then(|m| m.column)
    }

    pub fn recognized(&self) -> usize {
        self.0.iter().filter(|m| m.column.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderMatch> {
        self.0.iter()
    }
}

/// Map header titles to canonical fields, independent of exact wording.
///
/// Each field takes the first column whose uppercased, trimmed title contains
/// every substring of one of its synonym sets. Columns are not reserved, so two
/// fields can point at the same column.
pub fn map_headers<S: AsRef<str>>(headers: &[S]) -> HeaderMapping {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_uppercase())
        .collect();

    HeaderMapping(
        Field::ALL
            .iter()
            .map(|&field| HeaderMatch {
                field,
                column: normalized.iter().position(|title| {
                    synonyms(field)
                        .iter()
                        .any(|set| set.iter().all(|needle| title.contains(needle)))
                }),
            })
            .collect(),
    )
}
