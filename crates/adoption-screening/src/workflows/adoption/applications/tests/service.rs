use super::common::*;
use crate::workflows::adoption::applications::domain::Question;
use crate::workflows::adoption::applications::{ApplicationServiceError, ApplicationVerdict};

#[test]
fn strong_application_is_eligible_without_advisories() {
    let outcome = service()
        .evaluate(submission(), today())
        .expect("evaluation succeeds");

    assert_eq!(outcome.animal_name, "Canela");
    assert!(outcome.puppy);
    assert_eq!(outcome.score.percentage, 100);
    assert_eq!(outcome.verdict, ApplicationVerdict::Eligible);
    assert!(outcome.suggestions.is_empty());
    assert!(outcome.rejection_reasons.is_empty());
    assert!(outcome.email_suggestion.is_none());
}

#[test]
fn eligible_application_with_risky_answer_carries_advisory() {
    let mut submission = submission();
    submission
        .answers
        .set(Question::BehaviorResponse, "punish");

    let outcome = service()
        .evaluate(submission, today())
        .expect("evaluation succeeds");

    assert_eq!(outcome.score.percentage, 88);
    match &outcome.verdict {
        ApplicationVerdict::EligibleWithAdvisories { advisories } => {
            assert_eq!(advisories.len(), 1);
        }
        other => panic!("expected advisories, got {other:?}"),
    }
    assert_eq!(outcome.rejection_reasons.len(), 1);
}

#[test]
fn adult_animal_excludes_sterilization_from_breakdown() {
    let mut submission = submission();
    submission.animal = adult_record();

    let outcome = service()
        .evaluate(submission, today())
        .expect("evaluation succeeds");

    assert!(!outcome.puppy);
    assert_eq!(outcome.score.detail.len(), 8);
}

#[test]
fn weak_application_needs_improvement() {
    let mut submission = submission();
    for (question, value) in [
        (Question::FamilyDecision, "disagree"),
        (Question::MonthlyBudget, "low"),
        (Question::CareCommitment, "minimalCare"),
        (Question::TravelPlans, "leaveAlone"),
    ] {
        submission.answers.set(question, value);
    }

    let outcome = service()
        .evaluate(submission, today())
        .expect("evaluation succeeds");

    assert!(!outcome.score.eligible);
    match &outcome.verdict {
        ApplicationVerdict::NeedsImprovement {
            percentage,
            advisories,
        } => {
            assert_eq!(*percentage, outcome.score.percentage);
            assert_eq!(advisories.len(), 4);
        }
        other => panic!("expected needs improvement, got {other:?}"),
    }
    assert!(!outcome.verdict.is_eligible());
    assert_eq!(outcome.rejection_reasons.len(), 4);
}

#[test]
fn intake_errors_surface_through_the_service() {
    let mut submission = submission();
    submission.adopter_email = String::new();

    match service().evaluate(submission, today()) {
        Err(ApplicationServiceError::Intake(err)) => {
            assert!(err.to_string().contains("required"));
        }
        other => panic!("expected intake error, got {other:?}"),
    }
}
