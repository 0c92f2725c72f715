use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::adoption::applications::router::evaluate_handler;

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn evaluate_handler_rejects_invalid_email() {
    let mut submission = submission();
    submission.adopter_email = "not-an-address".to_string();

    let response = evaluate_handler(State(Arc::new(service())), axum::Json(submission))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("not-an-address"));
}

#[tokio::test]
async fn evaluate_route_returns_outcome() {
    let payload = json!({
        "adopter_email": "ana@gmial.com",
        "animal": { "name": "Canela", "age_months": 4 },
        "answers": {
            "familyDecision": "agree",
            "housingType": "Casa urbana",
            "monthlyBudget": "high",
            "relationAnimals": "positive",
            "travelPlans": "withOwner",
            "behaviorResponse": "punish",
            "careCommitment": "fullCare",
            "allowVisits": "yes",
            "acceptSterilization": "yes"
        }
    });

    let response = router()
        .oneshot(post_json("/api/v1/adoption/applications/evaluate", payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["score"]["percentage"], json!(88));
    assert_eq!(body["score"]["eligible"], json!(true));
    assert_eq!(
        body["score"]["detail"]["behaviorResponse"],
        json!({ "value": "punish", "contribution": 20 })
    );
    assert_eq!(body["verdict"]["kind"], json!("eligible_with_advisories"));
    assert_eq!(body["suggestions"][0]["question"], json!("behaviorResponse"));
    assert_eq!(
        body["email_suggestion"]["suggested"],
        json!("ana@gmail.com")
    );
}

#[tokio::test]
async fn score_route_marks_unanswered_questions() {
    let payload = json!({
        "answers": { "familyDecision": "agree" },
        "animal": { "age_years": 4 }
    });

    let response = router()
        .oneshot(post_json("/api/v1/adoption/applications/score", payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let detail = body["detail"].as_object().expect("detail map");
    assert_eq!(detail.len(), 8);
    assert_eq!(
        body["detail"]["allowVisits"],
        json!({ "value": "not specified", "contribution": 0 })
    );
    assert_eq!(body["percentage"], json!(16));
    assert_eq!(body["eligible"], json!(false));
}

#[tokio::test]
async fn suggestions_route_returns_entries_and_reasons() {
    let payload = json!({
        "answers": { "behaviorResponse": "abandon", "allowVisits": "no" }
    });

    let response = router()
        .oneshot(post_json(
            "/api/v1/adoption/applications/suggestions",
            payload,
        ))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let entries = body["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["answer"], json!("abandon"));
    assert_eq!(entries[1]["question"], json!("allowVisits"));
    assert_eq!(body["rejection_reasons"].as_array().map(Vec::len), Some(2));
}
