use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{AnimalAgeSignal, AnswerSet, ApplicationSubmission};
use super::evaluation::{score_application, EvaluationEngine, EvaluationOutcome, ScoreResult};
use super::intake::{IntakeError, IntakeGuard};
use super::suggestions::{collect_suggestion_entries, SuggestionEntry};

/// Service composing the intake guard and the evaluation engine.
#[derive(Debug, Clone, Default)]
pub struct AdoptionApplicationService {
    guard: Arc<IntakeGuard>,
    engine: Arc<EvaluationEngine>,
}

impl AdoptionApplicationService {
    pub fn new() -> Self {
        Self {
            guard: Arc::new(IntakeGuard::new()),
            engine: Arc::new(EvaluationEngine::new()),
        }
    }

    /// Validate a submission and produce the full evaluation preview.
    pub fn evaluate(
        &self,
        submission: ApplicationSubmission,
        today: NaiveDate,
    ) -> Result<EvaluationOutcome, ApplicationServiceError> {
        let (profile, email_suggestion) = self.guard.profile_from_submission(submission)?;
        let outcome = self.engine.evaluate(&profile, email_suggestion, today);

        debug!(
            percentage = outcome.score.percentage,
            eligible = outcome.score.eligible,
            suggestions = outcome.suggestions.len(),
            puppy = outcome.puppy,
            "application evaluated"
        );

        Ok(outcome)
    }

    /// Score raw answers without intake checks.
    pub fn score(&self, answers: &AnswerSet, age: AnimalAgeSignal) -> ScoreResult {
        score_application(answers, age)
    }

    pub fn suggestions(&self, answers: &AnswerSet) -> Vec<SuggestionEntry> {
        collect_suggestion_entries(answers)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
}
