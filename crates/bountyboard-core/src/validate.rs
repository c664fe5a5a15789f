//! Validation rules for the creation workflow
//!
//! Pure predicates with no side effects; they return booleans and never
//! fail. Callers decide how a `true`/`false` maps to user feedback.

/// Check that the text is non-empty after trimming
pub fn is_non_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Check whether a candidate identifier collides with any existing one
///
/// Comparison trims both sides and ignores case, so `"Trustline.sa"`
/// and `" trustline.SA "` collide.
pub fn is_duplicate_identifier<'a>(
    candidate: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> bool {
    let candidate = candidate.trim();
    existing
        .into_iter()
        .any(|id| id.trim().eq_ignore_ascii_case(candidate))
}
