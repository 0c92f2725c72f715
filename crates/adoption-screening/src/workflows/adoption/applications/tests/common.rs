use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::adoption::applications::domain::{
    AnimalAgeSignal, AnimalRecord, AnswerSet, ApplicationSubmission, Question,
};
use crate::workflows::adoption::applications::{application_router, AdoptionApplicationService};
use std::sync::Arc;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

pub(super) fn puppy() -> AnimalAgeSignal {
    AnimalAgeSignal::from_months(4)
}

pub(super) fn adult() -> AnimalAgeSignal {
    AnimalAgeSignal::from_years(5)
}

/// Every question answered with its highest-scoring value.
pub(super) fn best_answers() -> AnswerSet {
    [
        (Question::FamilyDecision, "agree"),
        (Question::HousingType, "Casa urbana"),
        (Question::MonthlyBudget, "high"),
        (Question::RelationAnimals, "positive"),
        (Question::TravelPlans, "withOwner"),
        (Question::BehaviorResponse, "trainOrAccept"),
        (Question::CareCommitment, "fullCare"),
        (Question::AllowVisits, "yes"),
        (Question::AcceptSterilization, "yes"),
    ]
    .into_iter()
    .collect()
}

/// Weighted answers summing to exactly 70% for a puppy.
pub(super) fn threshold_answers() -> AnswerSet {
    [
        (Question::FamilyDecision, "agree"),
        (Question::HousingType, "Casa urbana"),
        (Question::MonthlyBudget, "high"),
        (Question::BehaviorResponse, "trainOrAccept"),
        (Question::CareCommitment, "fullCare"),
    ]
    .into_iter()
    .collect()
}

pub(super) fn puppy_record() -> AnimalRecord {
    AnimalRecord {
        name: "Canela".to_string(),
        species: Some("dog".to_string()),
        birth_date: NaiveDate::from_ymd_opt(2026, 5, 2),
        age_months: None,
        age_years: None,
    }
}

pub(super) fn adult_record() -> AnimalRecord {
    AnimalRecord {
        name: "Bruno".to_string(),
        species: Some("dog".to_string()),
        birth_date: None,
        age_months: None,
        age_years: Some(6),
    }
}

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        adopter_email: "ana.perez@gmail.com".to_string(),
        animal: puppy_record(),
        answers: best_answers(),
    }
}

pub(super) fn service() -> AdoptionApplicationService {
    AdoptionApplicationService::new()
}

pub(super) fn router() -> axum::Router {
    application_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
