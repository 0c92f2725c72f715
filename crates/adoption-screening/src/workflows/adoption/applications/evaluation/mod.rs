mod policy;
pub mod rules;
mod scorer;

pub use policy::{is_eligible, ApplicationVerdict, ELIGIBILITY_THRESHOLD};
pub use scorer::{score_application, QuestionDetail, RecordedAnswer, ScoreResult, NOT_SPECIFIED};

use super::contact::EmailSuggestion;
use super::domain::AdopterProfile;
use super::suggestions::{collect_suggestion_entries, draft_rejection_reasons, SuggestionEntry};
use chrono::NaiveDate;
use policy::decide_verdict;
use serde::{Deserialize, Serialize};

/// Stateless evaluator combining the weighted score with the risky-answer scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvaluationEngine;

impl EvaluationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        profile: &AdopterProfile,
        email_suggestion: Option<EmailSuggestion>,
        today: NaiveDate,
    ) -> EvaluationOutcome {
        let age = profile.animal.age_signal(today);
        let score = score_application(&profile.answers, age);
        let suggestions = collect_suggestion_entries(&profile.answers);
        let rejection_reasons = draft_rejection_reasons(&suggestions);
        let verdict = decide_verdict(&score, &suggestions);

        EvaluationOutcome {
            adopter_email: profile.adopter_email.clone(),
            animal_name: profile.animal.name.clone(),
            puppy: age.is_puppy(),
            score,
            verdict,
            suggestions,
            rejection_reasons,
            email_suggestion,
            ignored_keys: profile.ignored_keys.clone(),
        }
    }
}

/// Everything the questionnaire preview and the foundation review screen need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub adopter_email: String,
    pub animal_name: String,
    pub puppy: bool,
    pub score: ScoreResult,
    pub verdict: ApplicationVerdict,
    pub suggestions: Vec<SuggestionEntry>,
    pub rejection_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_suggestion: Option<EmailSuggestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignored_keys: Vec<String>,
}
