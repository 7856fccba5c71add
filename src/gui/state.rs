use std::sync::Arc;
use crate::config::settings::Settings;
use crate::error::AnalysisError;
use crate::models::analysis::{AnalysisMode, AnalysisRequest, AnalysisResponse};
use super::types::{validate_requirement, Outcome, Phase};

#[derive(Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,

    // Input form
    pub mode: AnalysisMode,
    pub requirement_text: String,

    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            mode: AnalysisMode::default(),
            requirement_text: String::new(),
            phase: Phase::Input,
            outcome: None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == Phase::Analyzing
    }

    /// The form is frozen while a request is in flight.
    pub fn accepts_edits(&self) -> bool {
        self.phase == Phase::Input
    }

    pub fn select_mode(&mut self, mode: AnalysisMode) {
        if self.accepts_edits() {
            self.mode = mode;
        }
    }

    pub fn set_requirement(&mut self, text: String) {
        if self.accepts_edits() {
            self.requirement_text = text;
        }
    }

    /// Validates the form and moves to `Analyzing`.
    ///
    /// Returns the request to send, or `None` when nothing must be sent: the
    /// text is empty (a validation outcome is recorded) or a request is
    /// already running. The text is sent exactly as entered.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.is_analyzing() {
            return None;
        }

        if let Err(err) = validate_requirement(&self.requirement_text) {
            self.outcome = Some(Outcome::Invalid(err));
            return None;
        }

        self.phase = Phase::Analyzing;
        self.outcome = None;
        Some(AnalysisRequest::new(self.requirement_text.as_str(), self.mode))
    }

    /// Back to `Input` whatever the result was.
    pub fn finish_analysis(&mut self, result: Result<AnalysisResponse, AnalysisError>) {
        self.phase = Phase::Input;
        self.outcome = Some(match result {
            Ok(response) if response.is_success() => Outcome::Results(response),
            Ok(_) => Outcome::Incomplete,
            Err(err) => Outcome::Failed(err),
        });
    }

    /// Resets the form. Returns `false` while a request is running.
    pub fn clear(&mut self) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        self.requirement_text.clear();
        self.outcome = None;
        true
    }
}
