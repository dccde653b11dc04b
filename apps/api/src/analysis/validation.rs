use crate::analysis::AnalysisError;
use crate::config::InputLimits;

/// Rejects blank input and input longer than `limit` characters.
pub fn require_text(field: &'static str, value: &str, limit: usize) -> Result<(), AnalysisError> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(format!("{field} cannot be empty")));
    }
    let actual = value.chars().count();
    if actual > limit {
        return Err(AnalysisError::InputTooLarge {
            field,
            limit,
            actual,
        });
    }
    Ok(())
}

/// Validates an authorship-detection request before it reaches the detector.
pub fn validate_document(
    content: &str,
    name: &str,
    limits: &InputLimits,
) -> Result<(), AnalysisError> {
    require_text("documentContent", content, limits.max_document_chars)?;
    require_text("documentName", name, limits.max_document_name_chars)
}

/// Validates ATS scoring input.
pub fn validate_score_text(text: &str, limits: &InputLimits) -> Result<(), AnalysisError> {
    require_text("text", text, limits.max_score_text_chars)
}
