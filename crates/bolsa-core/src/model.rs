use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positional columns an upload row must carry.
pub const FIELD_COUNT: usize = 10;

/// One undecoded spreadsheet row: cell values in column order, empty cells as `""`.
pub type SheetRow = Vec<String>;

/// The canonical fields of a bolsa upload row, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PreferredDate,
    DocumentType,
    DocumentNumber,
    InsuredName,
    Sex,
    BirthDate,
    Phone,
    Email,
    FacilityCode,
    AppointmentType,
}

/// Static description of a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub index: usize,
    pub name: &'static str,
    /// Column title users are told to put in the spreadsheet.
    pub column_label: &'static str,
    pub obligatory: bool,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::PreferredDate,
        Field::DocumentType,
        Field::DocumentNumber,
        Field::InsuredName,
        Field::Sex,
        Field::BirthDate,
        Field::Phone,
        Field::Email,
        Field::FacilityCode,
        Field::AppointmentType,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> FieldSpec {
        let (name, column_label, obligatory) = match self {
            Field::PreferredDate => ("preferred_date", "FECHA PREFERIDA", true),
            Field::DocumentType => ("document_type", "TIPO DOCUMENTO", true),
            Field::DocumentNumber => ("document_number", "DNI", true),
            Field::InsuredName => ("insured_name", "ASEGURADO", true),
            Field::Sex => ("sex", "SEXO", false),
            Field::BirthDate => ("birth_date", "FECHA NACIMIENTO", false),
            Field::Phone => ("phone", "TELEFONO", false),
            Field::Email => ("email", "CORREO", false),
            Field::FacilityCode => ("facility_code", "COD. IPRESS", true),
            Field::AppointmentType => ("appointment_type", "TIPO CITA", true),
        };
        FieldSpec {
            index: self.index(),
            name,
            column_label,
            obligatory,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec().column_label)
    }
}

/// Expected column order, e.g. for user-facing recommendations.
pub fn expected_column_order() -> String {
    Field::ALL
        .iter()
        .map(|f| f.spec().column_label)
        .collect::<Vec<_>>()
        .join(" | ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected at least {FIELD_COUNT} columns, found {found}")]
pub struct ColumnCountError {
    pub found: usize,
}

/// A spreadsheet row validated to carry all ten positional columns.
///
/// Cells are trimmed on construction, so whitespace-only cells read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    cells: [String; FIELD_COUNT],
}

impl RawRecord {
    /// Build a record from positional cells. Extra trailing cells are ignored.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, ColumnCountError> {
        if cells.len() < FIELD_COUNT {
            return Err(ColumnCountError { found: cells.len() });
        }
        Ok(Self {
            cells: std::array::from_fn(|i| cells[i].as_ref().trim().to_string()),
        })
    }

    pub fn cell(&self, field: Field) -> &str {
        &self.cells[field.index()]
    }

    pub fn preferred_date(&self) -> &str {
        self.cell(Field::PreferredDate)
    }

    pub fn document_type(&self) -> &str {
        self.cell(Field::DocumentType)
    }

    pub fn document_number(&self) -> &str {
        self.cell(Field::DocumentNumber)
    }

    pub fn insured_name(&self) -> &str {
        self.cell(Field::InsuredName)
    }

    pub fn sex(&self) -> &str {
        self.cell(Field::Sex)
    }

    pub fn birth_date(&self) -> &str {
        self.cell(Field::BirthDate)
    }

    pub fn phone(&self) -> &str {
        self.cell(Field::Phone)
    }

    pub fn email(&self) -> &str {
        self.cell(Field::Email)
    }

    pub fn facility_code(&self) -> &str {
        self.cell(Field::FacilityCode)
    }

    pub fn appointment_type(&self) -> &str {
        self.cell(Field::AppointmentType)
    }
}

/// A reference item from the bolsa-type or service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    #[serde(default, alias = "codigo")]
    pub code: String,
    #[serde(alias = "descripcion")]
    pub description: String,
}

/// Keywords derived once from an uploaded file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub first_keyword: Option<String>,
    pub all_keywords: Vec<String>,
    pub normalized_filename: String,
}
