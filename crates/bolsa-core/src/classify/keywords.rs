use std::sync::LazyLock;

use regex::Regex;

use crate::model::KeywordSet;

static LEADING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BOLSA\s+").expect("Invalid leading label regex"));

/// Eight digits (e.g. `26012026`) right before the extension.
static TRAILING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{8}(\.[^.\s]+)$").expect("Invalid trailing date regex"));

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.\s]+$").expect("Invalid extension regex"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("Invalid separator regex"));

/// Derive ranked catalog keywords from an uploaded file name.
///
/// Steps:
/// 1. Uppercase
/// 2. Strip a leading "BOLSA " label
/// 3. Strip an 8-digit date right before the extension
/// 4. Strip the extension
/// 5. Split on whitespace, hyphens and underscores, dropping tokens of 2 chars or less
pub fn extract_keywords(file_name: &str) -> KeywordSet {
    let upper = file_name.trim().to_uppercase();
    let without_label = LEADING_LABEL.replace(&upper, "");
    let without_date = TRAILING_DATE.replace(&without_label, "$1");
    let normalized = EXTENSION.replace(&without_date, "").trim().to_string();

    let all_keywords: Vec<String> = SEPARATORS
        .split(&normalized)
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect();

    tracing::debug!(file_name, keywords = ?all_keywords, "extracted filename keywords");

    KeywordSet {
        first_keyword: all_keywords.first().cloned(),
        all_keywords,
        normalized_filename: normalized,
    }
}
