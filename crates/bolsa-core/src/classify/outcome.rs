use serde::{Deserialize, Serialize};

use crate::model::KeywordSet;

/// How a catalog entry was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// The keyword appears verbatim in the entry's description or code.
    Substring,
    /// Word-containment similarity cleared the threshold.
    Similarity,
}

/// A catalog entry suggested for an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub catalog_entry_id: u64,
    pub description: String,
    /// Filename keyword that produced the match.
    pub matched_keyword: String,
    pub method: MatchMethod,
    /// 1.0 for substring matches, the similarity score otherwise.
    pub score: f64,
}

/// Suggested entry, or `None` when auto-detection found nothing acceptable.
pub type ClassificationResult = Option<Classification>;

/// Both catalog suggestions for one file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyOutcome {
    pub file_name: String,
    pub keywords: KeywordSet,
    pub bolsa_type: ClassificationResult,
    pub service: ClassificationResult,
}
