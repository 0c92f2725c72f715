use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, Question};

/// An answer worth flagging to the adopter, independent of its rubric score.
struct RiskyAnswer {
    question: Question,
    value: &'static str,
    message: &'static str,
    reason: Option<&'static str>,
}

// Maintained separately from the scoring rubric: a low-scoring answer is not
// necessarily listed here, and entries fire regardless of the animal's age.
const RISKY_ANSWERS: [RiskyAnswer; 9] = [
    RiskyAnswer {
        question: Question::FamilyDecision,
        value: "disagree",
        message: "Make sure everyone at home agrees with the adoption before applying.",
        reason: Some("Household members do not agree with the adoption."),
    },
    RiskyAnswer {
        question: Question::MonthlyBudget,
        value: "low",
        message: "Plan a monthly budget that covers food, vaccines and unexpected vet visits.",
        reason: Some("Monthly budget is insufficient for the animal's basic care."),
    },
    RiskyAnswer {
        question: Question::RelationAnimals,
        value: "negative",
        message: "Consider how the animal will be introduced to the pets already at home.",
        reason: Some("Reported negative relationship with other animals."),
    },
    RiskyAnswer {
        question: Question::TravelPlans,
        value: "leaveAlone",
        message: "Arrange a caretaker or boarding for the animal whenever you travel.",
        reason: Some("The animal would be left alone during trips."),
    },
    RiskyAnswer {
        question: Question::BehaviorResponse,
        value: "punish",
        message: "Punishment worsens behaviour problems; positive training or a professional trainer helps more.",
        reason: Some("Would respond to behaviour problems with punishment."),
    },
    RiskyAnswer {
        question: Question::BehaviorResponse,
        value: "abandon",
        message: "Adoption is a lifelong commitment; reach out to the foundation if problems arise.",
        reason: Some("Would abandon the animal over behaviour problems."),
    },
    RiskyAnswer {
        question: Question::CareCommitment,
        value: "minimalCare",
        message: "Animals need daily attention, exercise and company, not only food and water.",
        reason: Some("Commits only to minimal care."),
    },
    RiskyAnswer {
        question: Question::AllowVisits,
        value: "no",
        message: "Follow-up visits let the foundation support you after the adoption.",
        reason: Some("Does not allow follow-up visits."),
    },
    RiskyAnswer {
        question: Question::AcceptSterilization,
        value: "no",
        message: "Sterilization prevents unwanted litters and several health problems.",
        reason: None,
    },
];

/// Advisory raised by a risky answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub question: Question,
    pub answer: String,
    pub message: String,
    /// Foundation-facing wording, used when drafting rejection reasons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Scan the raw answers for risky values, in the fixed table order.
pub fn collect_suggestion_entries(answers: &AnswerSet) -> Vec<SuggestionEntry> {
    RISKY_ANSWERS
        .iter()
        .filter(|risky| answers.answer(risky.question) == Some(risky.value))
        .map(|risky| SuggestionEntry {
            question: risky.question,
            answer: risky.value.to_string(),
            message: risky.message.to_string(),
            reason: risky.reason.map(str::to_string),
        })
        .collect()
}

/// Internal reasons in entry order, without duplicates.
pub fn draft_rejection_reasons(entries: &[SuggestionEntry]) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();
    for reason in entries.iter().filter_map(|entry| entry.reason.as_ref()) {
        if !reasons.contains(reason) {
            reasons.push(reason.clone());
        }
    }
    reasons
}

/// Adopter-facing messages as a bulleted block, `None` when nothing was flagged.
pub fn improvement_summary(entries: &[SuggestionEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("- {}", entry.message))
        .collect();
    Some(lines.join("\n"))
}
