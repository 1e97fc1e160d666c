//! snake_case / camelCase conversion.

use std::sync::LazyLock;

use regex::Regex;

/// An uppercase letter and the non-uppercase run after it.
#[allow(clippy::expect_used)]
static UPPER_CHUNK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][^A-Z]*").expect("failed to compile uppercase chunk regex"));

/// Converts `under_scored_text` to `underScoredText`.
///
/// Splits on `_`, lowercases every segment, capitalizes all but the first
/// non-empty one and concatenates. Empty segments disappear, so the result
/// always starts lowercase (`_foo` gives `foo`).
#[must_use]
pub fn camelize(candidate: &str) -> String {
    let mut camelized = String::with_capacity(candidate.len());

    for segment in candidate.split('_').filter(|segment| !segment.is_empty()) {
        let lower = segment.to_lowercase();
        if camelized.is_empty() {
            camelized.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            camelized.extend(first.to_uppercase());
            camelized.push_str(chars.as_str());
        }
    }

    camelized
}

/// Converts `camelCasedText` (or `CamelCasedText`) to `camel_cased_text`.
///
/// Splits before every uppercase letter, lowercases and joins with `_`.
/// Consecutive capitals become separate segments (`HTTPCode` gives
/// `h_t_t_p_code`).
#[must_use]
pub fn uncamelize(camelized: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    let first_upper = UPPER_CHUNK_RE
        .find(camelized)
        .map_or(camelized.len(), |found| found.start());
    if let Some(prefix) = camelized.get(..first_upper).filter(|p| !p.is_empty()) {
        segments.push(prefix);
    }
    segments.extend(UPPER_CHUNK_RE.find_iter(camelized).map(|found| found.as_str()));

    segments
        .iter()
        .map(|segment| segment.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
