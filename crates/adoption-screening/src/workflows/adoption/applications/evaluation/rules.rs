use super::super::domain::Question;

/// Weight and per-answer quality for a single questionnaire item.
#[derive(Debug)]
pub(crate) struct QuestionRubric {
    pub question: Question,
    pub weight: f64,
    pub answers: &'static [(&'static str, f64)],
}

impl QuestionRubric {
    /// Quality in [0, 1] for an exact answer value, `None` when the value is not offered.
    pub fn score_for(&self, value: &str) -> Option<f64> {
        self.answers
            .iter()
            .find(|(answer, _)| *answer == value)
            .map(|(_, score)| *score)
    }
}

// Answer values mirror the options offered by the questionnaire wizard. A value
// missing here scores zero.
pub(crate) const RUBRIC: [QuestionRubric; 9] = [
    QuestionRubric {
        question: Question::FamilyDecision,
        weight: 0.15,
        answers: &[("agree", 1.0), ("undecided", 0.5), ("disagree", 0.0)],
    },
    QuestionRubric {
        question: Question::HousingType,
        weight: 0.10,
        answers: &[
            ("Casa urbana", 1.0),
            ("Casa rural", 0.9),
            ("Departamento", 0.7),
            ("Otro", 0.4),
        ],
    },
    QuestionRubric {
        question: Question::MonthlyBudget,
        weight: 0.15,
        answers: &[("high", 1.0), ("medium", 0.7), ("low", 0.3)],
    },
    QuestionRubric {
        question: Question::RelationAnimals,
        weight: 0.10,
        answers: &[("positive", 1.0), ("neutral", 0.6), ("negative", 0.0)],
    },
    QuestionRubric {
        question: Question::TravelPlans,
        weight: 0.10,
        answers: &[
            ("withOwner", 1.0),
            ("withCaretaker", 0.8),
            ("undecided", 0.3),
            ("leaveAlone", 0.0),
        ],
    },
    QuestionRubric {
        question: Question::BehaviorResponse,
        weight: 0.15,
        answers: &[
            ("trainOrAccept", 1.0),
            ("consultProfessional", 0.9),
            ("returnToFoundation", 0.4),
            ("punish", 0.2),
            ("abandon", 0.0),
        ],
    },
    QuestionRubric {
        question: Question::CareCommitment,
        weight: 0.15,
        answers: &[("fullCare", 1.0), ("partialCare", 0.6), ("minimalCare", 0.2)],
    },
    QuestionRubric {
        question: Question::AllowVisits,
        weight: 0.05,
        answers: &[("yes", 1.0), ("no", 0.0)],
    },
    QuestionRubric {
        question: Question::AcceptSterilization,
        weight: 0.05,
        answers: &[("yes", 1.0), ("no", 0.0)],
    },
];

pub(crate) fn rubric_for(question: Question) -> &'static QuestionRubric {
    // RUBRIC follows `Question::ALL` order; checked by `rubric_covers_every_question`.
    &RUBRIC[question as usize]
}

/// Questions scored for an animal of the given age category.
pub(crate) fn active_rubric(puppy: bool) -> impl Iterator<Item = &'static QuestionRubric> {
    RUBRIC
        .iter()
        .filter(move |rubric| puppy || !rubric.question.puppy_only())
}

/// Fixed weight of a question in the rubric.
pub fn weight(question: Question) -> f64 {
    rubric_for(question).weight
}

/// Quality of an answer in [0, 1]; unknown values score zero.
pub fn rule_score(question: Question, value: &str) -> f64 {
    rubric_for(question).score_for(value).unwrap_or(0.0)
}

/// Answer values the rubric recognises for a question, best first.
pub fn answer_options(question: Question) -> Vec<&'static str> {
    rubric_for(question)
        .answers
        .iter()
        .map(|(answer, _)| *answer)
        .collect()
}
