use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::{AnimalAgeSignal, AnswerSet, Question};
use super::policy;
use super::rules;

/// Display marker for a question left unanswered.
pub const NOT_SPECIFIED: &str = "not specified";

/// Answer as recorded in the score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordedAnswer {
    Given(String),
    NotSpecified,
}

impl RecordedAnswer {
    pub fn as_str(&self) -> &str {
        match self {
            RecordedAnswer::Given(value) => value,
            RecordedAnswer::NotSpecified => NOT_SPECIFIED,
        }
    }

    pub fn is_specified(&self) -> bool {
        matches!(self, RecordedAnswer::Given(_))
    }
}

impl From<String> for RecordedAnswer {
    fn from(value: String) -> Self {
        if value == NOT_SPECIFIED {
            RecordedAnswer::NotSpecified
        } else {
            RecordedAnswer::Given(value)
        }
    }
}

impl From<RecordedAnswer> for String {
    fn from(value: RecordedAnswer) -> Self {
        match value {
            RecordedAnswer::Given(value) => value,
            RecordedAnswer::NotSpecified => NOT_SPECIFIED.to_string(),
        }
    }
}

impl fmt::Display for RecordedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-question line of the breakdown. `contribution` is the answer's own
/// quality on a 0-100 scale, independent of the question weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub value: RecordedAnswer,
    pub contribution: u8,
}

/// Weighted questionnaire score for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub percentage: u8,
    pub eligible: bool,
    pub detail: BTreeMap<Question, QuestionDetail>,
}

/// Score an answer set against the rubric.
///
/// Every active question adds its weight to the denominator; only recognised
/// answers add `quality * weight` to the numerator. Missing, blank, or unknown
/// answers therefore pull the percentage down instead of failing. For
/// non-puppies the sterilization question is not part of the active set.
pub fn score_application(answers: &AnswerSet, age: AnimalAgeSignal) -> ScoreResult {
    let mut achieved = 0.0_f64;
    let mut possible = 0.0_f64;
    let mut detail = BTreeMap::new();

    for rubric in rules::active_rubric(age.is_puppy()) {
        possible += rubric.weight;

        let value = answers.answer(rubric.question);
        let quality = value
            .and_then(|value| rubric.score_for(value))
            .unwrap_or(0.0);
        achieved += quality * rubric.weight;

        let recorded = match value {
            Some(value) => RecordedAnswer::Given(value.to_string()),
            None => RecordedAnswer::NotSpecified,
        };
        detail.insert(
            rubric.question,
            QuestionDetail {
                value: recorded,
                contribution: to_percent(quality),
            },
        );
    }

    let percentage = if possible > 0.0 {
        to_percent(achieved / possible)
    } else {
        0
    };

    ScoreResult {
        percentage,
        eligible: policy::is_eligible(percentage),
        detail,
    }
}

fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
