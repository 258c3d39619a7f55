//! Input validation for user-supplied text.

use crate::domain::errors::LifecycleError;

/// Trimmed text, or `Validation` naming `field` when it is blank.
pub fn require_text(field: &str, value: &str) -> Result<String, LifecycleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LifecycleError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim tags, drop blanks and duplicates (first occurrence wins).
///
/// No upper bound on the number of tags is applied here.
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>, LifecycleError> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }

    if normalized.is_empty() {
        return Err(LifecycleError::validation("at least one tag is required"));
    }
    Ok(normalized)
}
