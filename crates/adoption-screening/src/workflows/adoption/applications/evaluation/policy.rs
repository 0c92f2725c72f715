use super::super::suggestions::SuggestionEntry;
use super::scorer::ScoreResult;
use serde::{Deserialize, Serialize};

/// Minimum percentage for an application to be eligible (inclusive).
pub const ELIGIBILITY_THRESHOLD: u8 = 70;

pub fn is_eligible(percentage: u8) -> bool {
    percentage >= ELIGIBILITY_THRESHOLD
}

/// Preview verdict shown to the adopter. Foundations make the binding decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApplicationVerdict {
    Eligible,
    EligibleWithAdvisories { advisories: Vec<String> },
    NeedsImprovement { percentage: u8, advisories: Vec<String> },
}

impl ApplicationVerdict {
    pub fn summary(&self) -> String {
        match self {
            ApplicationVerdict::Eligible => "application eligible".to_string(),
            ApplicationVerdict::EligibleWithAdvisories { advisories } => format!(
                "application eligible with {} advisory note(s)",
                advisories.len()
            ),
            ApplicationVerdict::NeedsImprovement {
                percentage,
                advisories,
            } => {
                if advisories.is_empty() {
                    format!(
                        "score {percentage}% below the {ELIGIBILITY_THRESHOLD}% threshold"
                    )
                } else {
                    format!(
                        "score {percentage}% below the {ELIGIBILITY_THRESHOLD}% threshold: {}",
                        advisories.join("; ")
                    )
                }
            }
        }
    }

    pub fn is_eligible(&self) -> bool {
        !matches!(self, ApplicationVerdict::NeedsImprovement { .. })
    }
}

pub(crate) fn decide_verdict(
    score: &ScoreResult,
    suggestions: &[SuggestionEntry],
) -> ApplicationVerdict {
    let advisories: Vec<String> = suggestions
        .iter()
        .map(|entry| entry.message.clone())
        .collect();

    if !score.eligible {
        return ApplicationVerdict::NeedsImprovement {
            percentage: score.percentage,
            advisories,
        };
    }

    if advisories.is_empty() {
        ApplicationVerdict::Eligible
    } else {
        ApplicationVerdict::EligibleWithAdvisories { advisories }
    }
}
