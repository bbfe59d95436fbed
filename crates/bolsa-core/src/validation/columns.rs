use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{Field, RawRecord};

/// Appointment types accepted as a prefix of the last column.
pub const APPOINTMENT_TYPES: &[&str] = &["NUEVA", "RECITA", "INTERCONSULTA"];

/// `YYYY-MM-DD` or `D/M/YYYY`, anywhere in the cell.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{4}").expect("Invalid date regex")
});

static DOCUMENT_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+").expect("Invalid document type regex"));

static DOCUMENT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,10}").expect("Invalid document number regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,15}").expect("Invalid phone regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

static FACILITY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,4}").expect("Invalid facility code regex"));

static APPOINTMENT_TYPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^({})", APPOINTMENT_TYPES.join("|")))
        .expect("Invalid appointment type regex")
});

/// Check a single cell against the pattern of its field.
pub fn cell_matches(field: Field, cell: &str) -> bool {
    match field {
        Field::PreferredDate | Field::BirthDate => DATE_REGEX.is_match(cell),
        Field::DocumentType => DOCUMENT_TYPE_REGEX.is_match(cell),
        Field::DocumentNumber => DOCUMENT_NUMBER_REGEX.is_match(cell),
        Field::InsuredName => cell.chars().count() > 3,
        Field::Sex => cell.eq_ignore_ascii_case("M") || cell.eq_ignore_ascii_case("F"),
        Field::Phone => PHONE_REGEX.is_match(cell),
        // Email is optional: a blank cell counts as valid.
        Field::Email => cell.is_empty() || EMAIL_REGEX.is_match(cell),
        Field::FacilityCode => FACILITY_CODE_REGEX.is_match(cell),
        Field::AppointmentType => APPOINTMENT_TYPE_REGEX.is_match(cell),
    }
}

/// Outcome of one field's pattern check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: Field,
    pub passed: bool,
}

/// Pass/fail for every canonical field of a record, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldResults(Vec<FieldCheck>);

impl FieldResults {
    pub fn passed(&self, field: Field) -> bool {
        self.0
            .iter()
            .find(|c| c.field == field)
            .is_some_and(|c| c.passed)
    }

    pub fn matched(&self) -> usize {
        self.0.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> Vec<Field> {
        self.0.iter().filter(|c| !c.passed).map(|c| c.field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldCheck> {
        self.0.iter()
    }
}

/// Evaluate every field of `record` independently.
pub fn validate_record(record: &RawRecord) -> FieldResults {
    FieldResults(
        Field::ALL
            .iter()
            .map(|&field| FieldCheck {
                field,
                passed: cell_matches(field, record.cell(field)),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        assert!(cell_matches(Field::PreferredDate, "2026-01-26"));
        assert!(cell_matches(Field::PreferredDate, "26/1/2026"));
        assert!(cell_matches(Field::BirthDate, "05/11/1980"));
        // Partial match: trailing time is tolerated
        assert!(cell_matches(Field::PreferredDate, "2026-01-26 08:00"));
        assert!(!cell_matches(Field::PreferredDate, "26-01-26"));
        assert!(!cell_matches(Field::BirthDate, ""));
    }

    #[test]
    fn test_document_type() {
        assert!(cell_matches(Field::DocumentType, "DNI"));
        assert!(cell_matches(Field::DocumentType, "CE 01"));
        assert!(cell_matches(Field::DocumentType, "Pasaporte"));
        assert!(!cell_matches(Field::DocumentType, "1DNI"));
        assert!(!cell_matches(Field::DocumentType, ""));
    }

    #[test]
    fn test_document_number() {
        assert!(cell_matches(Field::DocumentNumber, "123456"));
        assert!(cell_matches(Field::DocumentNumber, "12345678"));
        assert!(cell_matches(Field::DocumentNumber, "1234567890"));
        assert!(!cell_matches(Field::DocumentNumber, "12345"));
        assert!(!cell_matches(Field::DocumentNumber, "A12345678"));
    }

    #[test]
    fn test_insured_name_length() {
        assert!(cell_matches(Field::InsuredName, "Ana Ruiz"));
        assert!(cell_matches(Field::InsuredName, "Noé."));
        assert!(!cell_matches(Field::InsuredName, "Noé"));
    }

    #[test]
    fn test_sex() {
        assert!(cell_matches(Field::Sex, "M"));
        assert!(cell_matches(Field::Sex, "f"));
        assert!(!cell_matches(Field::Sex, "MASCULINO"));
        assert!(!cell_matches(Field::Sex, ""));
    }

    #[test]
    fn test_phone() {
        assert!(cell_matches(Field::Phone, "987654321"));
        assert!(cell_matches(Field::Phone, "014112233 anexo 12"));
        assert!(!cell_matches(Field::Phone, "98765"));
        assert!(!cell_matches(Field::Phone, "+51987654321"));
    }

    #[test]
    fn test_email_optional() {
        assert!(cell_matches(Field::Email, ""));
        assert!(cell_matches(Field::Email, "ana.ruiz@essalud.gob.pe"));
        assert!(!cell_matches(Field::Email, "ana.ruiz"));
        assert!(!cell_matches(Field::Email, "ana@essalud"));
    }

    #[test]
    fn test_facility_code() {
        assert!(cell_matches(Field::FacilityCode, "12"));
        assert!(cell_matches(Field::FacilityCode, "0421"));
        assert!(!cell_matches(Field::FacilityCode, "7"));
        assert!(!cell_matches(Field::FacilityCode, "HOSP"));
    }

    #[test]
    fn test_appointment_type_prefix() {
        assert!(cell_matches(Field::AppointmentType, "NUEVA"));
        assert!(cell_matches(Field::AppointmentType, "recita"));
        assert!(cell_matches(Field::AppointmentType, "Interconsulta externa"));
        assert!(!cell_matches(Field::AppointmentType, "CONTROL"));
        assert!(!cell_matches(Field::AppointmentType, " NUEVA"));
    }

    #[test]
    fn test_validate_record_counts() {
        let record = RawRecord::from_cells(&[
            "2026-01-26",
            "DNI",
            "12345678",
            "Juan Perez",
            "X",
            "",
            "",
            "",
            "123",
            "NUEVA",
        ])
        .unwrap();
        let results = validate_record(&record);
        assert_eq!(results.matched(), 7);
        assert_eq!(
            results.failed(),
            vec![Field::Sex, Field::BirthDate, Field::Phone]
        );
        assert!(results.passed(Field::Email));
    }
}
