use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a name fragment for comparison: trim, case-fold, strip
/// diacritics (NFD decomposition, combining marks removed), collapse
/// internal whitespace to single spaces.
///
/// Every name comparison in the crate (identifier resolution, suggestion
/// scoring) goes through this so that "Issa", "ISSA" and "Ïssa" compare equal.
#[must_use]
pub fn norm(s: &str) -> String {
    let folded: String = s
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional field; `None` folds to the empty string.
#[must_use]
pub fn norm_opt(s: Option<&str>) -> String {
    s.map(norm).unwrap_or_default()
}
