//! Adoption application scoring, risky-answer suggestions, and intake checks.
//!
//! The rubric and the suggestion table are static data. Scoring never fails: missing
//! or unrecognised answers contribute zero while still counting toward the maximum.

pub mod contact;
pub mod domain;
pub mod evaluation;
pub(crate) mod intake;
pub mod router;
pub mod service;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use contact::{suggest_email_correction, EmailSuggestion};
pub use domain::{
    AdopterProfile, AnimalAgeSignal, AnimalRecord, AnswerSet, ApplicationSubmission, Question,
    PUPPY_MAX_MONTHS, PUPPY_MAX_YEARS,
};
pub use evaluation::{
    is_eligible, score_application, ApplicationVerdict, EvaluationEngine, EvaluationOutcome,
    QuestionDetail, RecordedAnswer, ScoreResult, ELIGIBILITY_THRESHOLD, NOT_SPECIFIED,
};
pub use intake::{IntakeError, IntakeGuard};
pub use router::application_router;
pub use service::{AdoptionApplicationService, ApplicationServiceError};
pub use suggestions::{
    collect_suggestion_entries, draft_rejection_reasons, improvement_summary, SuggestionEntry,
};
