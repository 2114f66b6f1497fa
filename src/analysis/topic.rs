// Topic normalization.

use crate::error::AnalysisError;

/// Normalize a free-text topic: trim whitespace, lowercase.
///
/// An empty or whitespace-only topic is rejected — there's nothing to
/// search for. Idempotent: normalizing an already-normalized topic is a
/// no-op.
pub fn normalize_topic(topic: &str) -> Result<String, AnalysisError> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::InvalidInput("Topic is invalid.".to_string()));
    }
    Ok(trimmed.to_lowercase())
}
