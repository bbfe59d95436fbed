/// Minimum similarity for a fuzzy catalog match to be accepted.
pub const SIMILARITY_THRESHOLD: f64 = 0.4;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '/' | ',' | '.' | '(' | ')')
}

/// Words longer than two characters.
fn tokens(s: &str) -> Vec<&str> {
    s.split(is_separator)
        .filter(|t| t.chars().count() > 2)
        .collect()
}

/// Word-containment ratio between two short labels, from 0.0 to 1.0.
///
/// Counts the words of `a` that contain, or are contained in, some word of
/// `b`, divided by the larger word count. Identical texts (ignoring case)
/// score 1.0; texts without any word longer than two characters score 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_uppercase();
    let b = b.trim().to_uppercase();

    if !a.is_empty() && a == b {
        return 1.0;
    }

    let words_a = tokens(&a);
    let words_b = tokens(&b);
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let shared = words_a
        .iter()
        .filter(|wa| words_b.iter().any(|wb| wb.contains(*wa) || wa.contains(wb)))
        .count();

    shared as f64 / words_a.len().max(words_b.len()) as f64
}
