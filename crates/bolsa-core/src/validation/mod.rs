pub mod columns;
pub mod header;
pub mod report;

use crate::model::{expected_column_order, RawRecord, SheetRow, FIELD_COUNT};
use columns::validate_record;
use header::{has_any_data, is_blank_row, is_header_row};
use report::{StructureCheck, StructureReport, ViabilityReport, VIABILITY_THRESHOLD};

/// Decide whether an uploaded sheet has the expected ten-column layout.
///
/// The header row is optional and its wording varies, so it is detected
/// heuristically: when the first row carries header vocabulary and a second
/// row exists, the second row is validated instead of the first.
pub fn validate_structure(rows: &[SheetRow]) -> StructureReport {
    let Some(first) = rows.first() else {
        tracing::debug!("sheet has no rows");
        return empty_input("the file has no rows");
    };

    if is_blank_row(first) {
        tracing::debug!("first row is blank");
        return empty_input("the first row has no data");
    }

    let looks_like_header_row = is_header_row(first);
    let first_has_data = has_any_data(first);
    let analyzed_row = if looks_like_header_row && rows.len() > 1 {
        1
    } else {
        0
    };
    tracing::debug!(looks_like_header_row, analyzed_row, "selected row to analyze");

    let row = &rows[analyzed_row];
    if is_blank_row(row) {
        return empty_input("the first data row after the header is empty");
    }

    let record = match RawRecord::from_cells(row) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(found = err.found, "too few columns");
            return StructureReport {
                recommendation: format!(
                    "Row {} has {} column(s); at least {} are required, in this order: {}",
                    analyzed_row + 1,
                    err.found,
                    FIELD_COUNT,
                    expected_column_order()
                ),
                check: StructureCheck::InsufficientColumns {
                    found: err.found,
                    expected: FIELD_COUNT,
                },
            };
        }
    };

    let report = ViabilityReport::new(
        validate_record(&record),
        looks_like_header_row,
        first_has_data,
        analyzed_row,
    );
    tracing::info!(
        percentage = report.percentage,
        is_valid = report.is_valid,
        "structure validated"
    );

    StructureReport {
        recommendation: recommend(&report),
        check: StructureCheck::Analyzed(report),
    }
}

fn empty_input(reason: &str) -> StructureReport {
    StructureReport {
        check: StructureCheck::EmptyInput,
        recommendation: format!(
            "The file is empty: {reason}. Expected columns: {}",
            expected_column_order()
        ),
    }
}

fn recommend(report: &ViabilityReport) -> String {
    if report.is_valid {
        return format!(
            "Structure looks correct: {}% of the columns match the expected format.",
            report.percentage
        );
    }

    let failed: Vec<String> = report
        .per_field
        .failed()
        .iter()
        .map(|f| f.to_string())
        .collect();
    format!(
        "Only {}% of the columns match the expected format ({}% required). \
         Check these columns: {}. Expected column order: {}",
        report.percentage,
        VIABILITY_THRESHOLD,
        failed.join(", "),
        expected_column_order()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn row(values: &[&str]) -> SheetRow {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn valid_row() -> SheetRow {
        row(&[
            "2026-01-26",
            "DNI",
            "45678912",
            "Rosa Quispe Huamán",
            "F",
            "14/3/1975",
            "987654321",
            "rosa.quispe@gmail.com",
            "421",
            "RECITA",
        ])
    }

    fn header_row() -> SheetRow {
        row(&[
            "FECHA PREFERIDA",
            "TIPO DOCUMENTO",
            "NRO DOCUMENTO",
            "ASEGURADO",
            "SEXO",
            "FECHA NACIMIENTO",
            "TELEFONO",
            "CORREO",
            "COD. IPRESS",
            "TIPO CITA",
        ])
    }

    #[test]
    fn test_no_rows_is_empty_input() {
        let report = validate_structure(&[]);
        assert_eq!(report.check, StructureCheck::EmptyInput);
        assert!(report.is_fatal());
    }

    #[test]
    fn test_blank_first_row_is_empty_input() {
        let report = validate_structure(&[row(&["", " ", ""]), valid_row()]);
        assert_eq!(report.check, StructureCheck::EmptyInput);
    }

    #[test]
    fn test_all_valid_scores_100() {
        let report = validate_structure(&[valid_row()]);
        let viability = report.viability().unwrap();
        assert_eq!(viability.percentage, 100);
        assert!(viability.is_valid);
        assert!(!viability.looks_like_header_row);
        assert!(viability.has_any_data);
        assert_eq!(viability.analyzed_row, 0);
        assert!(report.recommendation.contains("100%"));
    }

    #[test]
    fn test_header_row_retargets_second_row() {
        let report = validate_structure(&[header_row(), valid_row()]);
        let viability = report.viability().unwrap();
        assert!(viability.looks_like_header_row);
        assert!(!viability.has_any_data);
        assert_eq!(viability.analyzed_row, 1);
        assert_eq!(viability.percentage, 100);
    }

    #[test]
    fn test_header_only_analyzes_first_row() {
        let report = validate_structure(&[header_row()]);
        let viability = report.viability().unwrap();
        assert_eq!(viability.analyzed_row, 0);
        assert!(!viability.is_valid);
    }

    #[test]
    fn test_header_then_blank_row_is_empty_input() {
        let report = validate_structure(&[header_row(), row(&["", ""])]);
        assert_eq!(report.check, StructureCheck::EmptyInput);
    }

    #[test]
    fn test_too_few_columns_even_if_valid() {
        let mut short = valid_row();
        short.truncate(9);
        let report = validate_structure(&[short]);
        assert_eq!(
            report.check,
            StructureCheck::InsufficientColumns {
                found: 9,
                expected: 10
            }
        );
        assert!(report.recommendation.contains("FECHA PREFERIDA"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_percentage_is_ten_per_matching_field() {
        // Break fields one at a time, from the last column backwards.
        let broken = ["x", "1", "1", "x", "x", "x", "x", "x", "x", "x"];
        for k in 0..=10 {
            let mut values = valid_row();
            for i in k..10 {
                values[i] = broken[i].to_string();
            }
            let report = validate_structure(&[values]);
            let viability = report.viability().unwrap();
            assert_eq!(viability.percentage as usize, 10 * k, "k = {k}");
            assert_eq!(viability.is_valid, k >= 7);
        }
    }

    #[test]
    fn test_empty_email_does_not_penalize() {
        let mut values = valid_row();
        values[Field::Email.index()] = "  ".into();
        let report = validate_structure(&[values]);
        assert_eq!(report.viability().unwrap().percentage, 100);
    }

    #[test]
    fn test_low_viability_lists_failed_columns() {
        let values = row(&["hoy", "DNI", "123", "Ana", "X", "", "", "", "1", "CONTROL"]);
        let report = validate_structure(&[values]);
        assert!(report.is_low_viability());
        assert!(report.recommendation.contains("FECHA PREFERIDA"));
        assert!(report.recommendation.contains("70% required"));
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![header_row(), valid_row()];
        assert_eq!(validate_structure(&rows), validate_structure(&rows));
    }
}
