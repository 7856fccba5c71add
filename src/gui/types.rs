use iced::widget::text_editor;
use crate::error::{AnalysisError, ValidationError};
use crate::models::analysis::{AnalysisMode, AnalysisResponse};

/// Lifecycle of the dashboard. Only one request is ever in flight.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Input,
    Analyzing,
}

/// What the page shows under the input form after the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Results(AnalysisResponse),
    // Backend answered but the status was not "success".
    Incomplete,
    Failed(AnalysisError),
    Invalid(ValidationError),
}

#[derive(Debug, Clone)]
pub enum Message {
    ModeSelected(AnalysisMode),
    RequirementEdited(text_editor::Action),
    AnalyzePressed,
    AnalysisCompleted(Result<AnalysisResponse, AnalysisError>),
    ClearPressed,
}

/// The editor always reports a final newline; drop that one, keep the rest as typed.
pub fn editor_text(raw: String) -> String {
    match raw.strip_suffix('\n') {
        Some(text) => text.to_string(),
        None => raw,
    }
}

pub fn validate_requirement(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyRequirement);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_text_drops_one_trailing_newline() {
        assert_eq!(editor_text("\n".to_string()), "");
        assert_eq!(editor_text("satır 1\nsatır 2\n".to_string()), "satır 1\nsatır 2");
        assert_eq!(editor_text("boşluk  \n\n".to_string()), "boşluk  \n");
        assert_eq!(editor_text("yeni satır yok".to_string()), "yeni satır yok");
    }

    #[test]
    fn test_validate_requirement() {
        assert_eq!(validate_requirement(""), Err(ValidationError::EmptyRequirement));
        assert_eq!(validate_requirement("  "), Ok(()));
        assert_eq!(validate_requirement("req"), Ok(()));
    }
}
