use crate::classify::outcome::{Classification, ClassificationResult, MatchMethod};
use crate::classify::similarity::{similarity, SIMILARITY_THRESHOLD};
use crate::model::{CatalogEntry, KeywordSet};

/// Pick the bolsa type whose description or code contains the first keyword.
///
/// Bolsa-type codes are a short controlled vocabulary, so only verbatim
/// containment is accepted here; there is no fuzzy fallback.
pub fn classify_bolsa_type(
    keywords: &KeywordSet,
    catalog: &[CatalogEntry],
) -> ClassificationResult {
    let keyword = keywords.first_keyword.as_deref()?;
    let result = find_substring(keyword, catalog);
    tracing::debug!(keyword, found = result.is_some(), "bolsa type pass");
    result
}

/// Pick the service that best matches any filename keyword.
///
/// Keywords are tried in order. For each, a verbatim match against description
/// or code wins; otherwise the most similar description is accepted when it
/// reaches [`SIMILARITY_THRESHOLD`]. The first keyword that yields a match stops
/// the search.
pub fn classify_service(
    keywords: &KeywordSet,
    catalog: &[CatalogEntry],
) -> ClassificationResult {
    for keyword in &keywords.all_keywords {
        if let Some(found) = find_substring(keyword, catalog) {
            tracing::debug!(
                keyword = %keyword,
                id = found.catalog_entry_id,
                "service substring match"
            );
            return Some(found);
        }

        if let Some((entry, score)) = best_similarity(keyword, catalog) {
            if score >= SIMILARITY_THRESHOLD {
                tracing::debug!(
                    keyword = %keyword,
                    id = entry.id,
                    score,
                    "service similarity match"
                );
                return Some(Classification {
                    catalog_entry_id: entry.id,
                    description: entry.description.clone(),
                    matched_keyword: keyword.clone(),
                    method: MatchMethod::Similarity,
                    score,
                });
            }
            tracing::trace!(keyword = %keyword, score, "best similarity below threshold");
        }
    }

    tracing::debug!("no service matched");
    None
}

fn find_substring(keyword: &str, catalog: &[CatalogEntry]) -> ClassificationResult {
    catalog
        .iter()
        .find(|entry| {
            entry.description.to_uppercase().contains(keyword)
                || entry.code.to_uppercase().contains(keyword)
        })
        .map(|entry| Classification {
            catalog_entry_id: entry.id,
            description: entry.description.clone(),
            matched_keyword: keyword.to_string(),
            method: MatchMethod::Substring,
            score: 1.0,
        })
}

/// Highest-scoring entry by description; ties keep the earlier entry.
fn best_similarity<'a>(
    keyword: &str,
    catalog: &'a [CatalogEntry],
) -> Option<(&'a CatalogEntry, f64)> {
    let mut best: Option<(&CatalogEntry, f64)> = None;
    for entry in catalog {
        let score = similarity(keyword, &entry.description);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((entry, score));
        }
    }
    best
}
