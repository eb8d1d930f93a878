//! Argument normalization shared by every tool.

/// Trimmed input if it is exactly one character
pub(crate) fn single_char(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed.chars().count() == 1).then(|| trimmed.to_string())
}

/// Trimmed input if anything is left
pub(crate) fn free_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed, lowercased category name
pub(crate) fn category_name(raw: &str) -> Option<String> {
    free_text(raw).map(|name| name.to_lowercase())
}
