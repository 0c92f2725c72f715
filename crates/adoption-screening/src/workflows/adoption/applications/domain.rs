use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Animals at or below this age in months are treated as puppies.
pub const PUPPY_MAX_MONTHS: u32 = 12;
/// Whole-year fallback when only `age_years` is known.
pub const PUPPY_MAX_YEARS: u32 = 1;

/// Questionnaire items scored by the adoption rubric, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Question {
    FamilyDecision,
    HousingType,
    MonthlyBudget,
    RelationAnimals,
    TravelPlans,
    BehaviorResponse,
    CareCommitment,
    AllowVisits,
    AcceptSterilization,
}

impl Question {
    pub const ALL: [Question; 9] = [
        Question::FamilyDecision,
        Question::HousingType,
        Question::MonthlyBudget,
        Question::RelationAnimals,
        Question::TravelPlans,
        Question::BehaviorResponse,
        Question::CareCommitment,
        Question::AllowVisits,
        Question::AcceptSterilization,
    ];

    /// Form key used by the questionnaire payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Question::FamilyDecision => "familyDecision",
            Question::HousingType => "housingType",
            Question::MonthlyBudget => "monthlyBudget",
            Question::RelationAnimals => "relationAnimals",
            Question::TravelPlans => "travelPlans",
            Question::BehaviorResponse => "behaviorResponse",
            Question::CareCommitment => "careCommitment",
            Question::AllowVisits => "allowVisits",
            Question::AcceptSterilization => "acceptSterilization",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Question::FamilyDecision => "Family agrees with the adoption",
            Question::HousingType => "Housing type",
            Question::MonthlyBudget => "Monthly budget for the animal",
            Question::RelationAnimals => "Relationship with other animals",
            Question::TravelPlans => "Plans for the animal while travelling",
            Question::BehaviorResponse => "Response to behaviour problems",
            Question::CareCommitment => "Care commitment",
            Question::AllowVisits => "Allows follow-up visits",
            Question::AcceptSterilization => "Accepts sterilization",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|question| question.key() == key)
    }

    /// Sterilization is only asked (and scored) for puppies.
    pub const fn puppy_only(self) -> bool {
        matches!(self, Question::AcceptSterilization)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw questionnaire answers keyed by form key. Partial sets and foreign keys are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Option<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: Question, value: impl Into<String>) -> Self {
        self.set(question, value);
        self
    }

    pub fn set(&mut self, question: Question, value: impl Into<String>) {
        self.answers
            .insert(question.key().to_string(), Some(value.into()));
    }

    pub fn unset(&mut self, question: Question) {
        self.answers.remove(question.key());
    }

    /// Insert an arbitrary form key, as received from a client.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Option<String>) {
        self.answers.insert(key.into(), value);
    }

    /// The supplied answer, or `None` when absent, null, or blank.
    pub fn answer(&self, question: Question) -> Option<&str> {
        self.answers
            .get(question.key())
            .and_then(|value| value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }

    /// Form keys that do not name a rubric question.
    pub fn unknown_keys(&self) -> Vec<String> {
        self.answers
            .keys()
            .filter(|key| Question::from_key(key).is_none())
            .cloned()
            .collect()
    }

    /// Drop every key that is not a rubric question.
    pub fn retain_questions(&mut self) {
        self.answers
            .retain(|key, _| Question::from_key(key).is_some());
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<'a> FromIterator<(Question, &'a str)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (Question, &'a str)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (question, value) in iter {
            answers.set(question, value);
        }
        answers
    }
}

/// Age hint used to classify the animal as puppy or adult.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalAgeSignal {
    #[serde(default)]
    pub age_months: Option<u32>,
    #[serde(default)]
    pub age_years: Option<u32>,
}

impl AnimalAgeSignal {
    pub fn from_months(months: u32) -> Self {
        Self {
            age_months: Some(months),
            age_years: None,
        }
    }

    pub fn from_years(years: u32) -> Self {
        Self {
            age_months: None,
            age_years: Some(years),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Months win over years; with neither the animal counts as an adult.
    pub fn is_puppy(&self) -> bool {
        match (self.age_months, self.age_years) {
            (Some(months), _) => months <= PUPPY_MAX_MONTHS,
            (None, Some(years)) => years <= PUPPY_MAX_YEARS,
            (None, None) => false,
        }
    }
}

/// Animal metadata supplied by the shelter or foundation record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub age_months: Option<u32>,
    #[serde(default)]
    pub age_years: Option<u32>,
}

impl AnimalRecord {
    /// Explicit months first, then months elapsed since `birth_date`, then years.
    pub fn age_signal(&self, today: NaiveDate) -> AnimalAgeSignal {
        let age_months = self
            .age_months
            .or_else(|| self.birth_date.and_then(|born| months_between(born, today)));

        AnimalAgeSignal {
            age_months,
            age_years: self.age_years,
        }
    }
}

fn months_between(born: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut months = (today.year() - born.year()) * 12 + today.month() as i32 - born.month() as i32;
    if today.day() < born.day() {
        months -= 1;
    }
    u32::try_from(months).ok()
}

/// Inbound adoption application as posted by the questionnaire wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub adopter_email: String,
    #[serde(default)]
    pub animal: AnimalRecord,
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Submission after intake checks, ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdopterProfile {
    pub adopter_email: String,
    pub animal: AnimalRecord,
    pub answers: AnswerSet,
    pub ignored_keys: Vec<String>,
}
