//! End-to-end scenarios for the adoption questionnaire scoring workflow, driven through
//! the public library surface only.

use adoption_screening::workflows::adoption::applications::{
    collect_suggestion_entries, score_application, AdoptionApplicationService, AnimalAgeSignal,
    AnimalRecord, AnswerSet, ApplicationSubmission, ApplicationVerdict, Question, RecordedAnswer,
};
use adoption_screening::workflows::adoption::BatchScorer;
use chrono::NaiveDate;
use std::io::Cursor;

fn best_answers() -> AnswerSet {
    AnswerSet::new()
        .with(Question::FamilyDecision, "agree")
        .with(Question::MonthlyBudget, "high")
        .with(Question::HousingType, "Casa urbana")
        .with(Question::RelationAnimals, "positive")
        .with(Question::TravelPlans, "withOwner")
        .with(Question::BehaviorResponse, "trainOrAccept")
        .with(Question::CareCommitment, "fullCare")
        .with(Question::AllowVisits, "yes")
        .with(Question::AcceptSterilization, "yes")
}

#[test]
fn complete_puppy_application_scores_full_marks() {
    let answers = best_answers();
    let result = score_application(&answers, AnimalAgeSignal::from_months(6));

    assert_eq!(result.percentage, 100);
    assert!(result.eligible);
    assert!(collect_suggestion_entries(&answers).is_empty());
}

#[test]
fn punishment_answer_drops_score_and_raises_suggestion() {
    let answers = best_answers().with(Question::BehaviorResponse, "punish");
    let result = score_application(&answers, AnimalAgeSignal::from_months(6));

    assert_eq!(result.percentage, 88);
    assert_eq!(result.detail[&Question::BehaviorResponse].contribution, 20);

    let entries = collect_suggestion_entries(&answers);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].question, Question::BehaviorResponse);
    assert_eq!(entries[0].answer, "punish");
}

#[test]
fn empty_forms_score_zero_for_puppies_and_adults() {
    let answers = AnswerSet::new();

    let puppy = score_application(&answers, AnimalAgeSignal::from_years(1));
    assert_eq!(puppy.percentage, 0);
    assert!(!puppy.eligible);
    assert_eq!(puppy.detail.len(), 9);
    assert!(puppy
        .detail
        .values()
        .all(|detail| detail.value == RecordedAnswer::NotSpecified && detail.contribution == 0));
    assert!(collect_suggestion_entries(&answers).is_empty());

    let adult = score_application(&answers, AnimalAgeSignal::from_months(13));
    assert_eq!(adult.percentage, 0);
    assert!(!adult.eligible);
    assert_eq!(adult.detail.len(), 8);
}

#[test]
fn service_uses_birth_date_to_classify_animal() {
    let service = AdoptionApplicationService::new();
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    let submission = ApplicationSubmission {
        adopter_email: "foundation.volunteer@outlook.com".to_string(),
        animal: AnimalRecord {
            name: "Mora".to_string(),
            species: Some("cat".to_string()),
            birth_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            age_months: None,
            age_years: None,
        },
        answers: best_answers().with(Question::AcceptSterilization, "no"),
    };

    let outcome = service.evaluate(submission, today).expect("evaluation");

    assert!(!outcome.puppy);
    assert_eq!(outcome.score.percentage, 100);
    assert!(matches!(
        outcome.verdict,
        ApplicationVerdict::EligibleWithAdvisories { .. }
    ));
    assert!(outcome.rejection_reasons.is_empty());
}

#[test]
fn batch_export_is_scored_row_by_row() {
    let export = "\
applicant,age_years,familyDecision,monthlyBudget,careCommitment
Ana,3,agree,high,fullCare
Luis,0,disagree,low,minimalCare
";

    let rows = BatchScorer::from_reader(Cursor::new(export)).expect("export parses");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].result.percentage, 47);
    assert_eq!(rows[1].result.detail.len(), 9);
    assert_eq!(rows[1].suggestions.len(), 3);
}
