use serde::{Deserialize, Serialize};

use crate::validation::columns::FieldResults;

/// Minimum share of matching columns for a file to be considered viable.
pub const VIABILITY_THRESHOLD: u8 = 70;

/// Column-by-column viability of the sampled row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViabilityReport {
    /// True when `percentage` reaches the viability threshold.
    pub is_valid: bool,
    /// Share of the ten fields that passed, 0-100 in steps of 10.
    pub percentage: u8,
    pub per_field: FieldResults,
    /// The first row contained header vocabulary.
    pub looks_like_header_row: bool,
    /// The first row contained at least one value that is not a header title.
    pub has_any_data: bool,
    /// 0-based row that was validated (1 when the first row was a header).
    pub analyzed_row: usize,
}

impl ViabilityReport {
    pub fn new(
        per_field: FieldResults,
        looks_like_header_row: bool,
        has_any_data: bool,
        analyzed_row: usize,
    ) -> Self {
        // Ten fields, so each match is worth exactly ten points.
        let percentage = (per_field.matched() * 10) as u8;
        Self {
            is_valid: percentage >= VIABILITY_THRESHOLD,
            percentage,
            per_field,
            looks_like_header_row,
            has_any_data,
            analyzed_row,
        }
    }
}

/// Result of the structure check, before any recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StructureCheck {
    /// No rows, or the row to analyze holds nothing.
    EmptyInput,
    /// The analyzed row has fewer positional values than fields.
    InsufficientColumns { found: usize, expected: usize },
    /// The row was validated column by column.
    Analyzed(ViabilityReport),
}

/// Outcome of validating an uploaded sheet's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub check: StructureCheck,
    /// Human-readable summary for the upload banner.
    pub recommendation: String,
}

impl StructureReport {
    pub fn viability(&self) -> Option<&ViabilityReport> {
        match &self.check {
            StructureCheck::Analyzed(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.viability().is_some_and(|r| r.is_valid)
    }

    /// Empty or too narrow files cannot be analyzed at all.
    pub fn is_fatal(&self) -> bool {
        self.viability().is_none()
    }

    /// Analyzed, but below the viability threshold. Not blocking.
    pub fn is_low_viability(&self) -> bool {
        self.viability().is_some_and(|r| !r.is_valid)
    }
}
