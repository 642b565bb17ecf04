//! Integration tests for the rule-based insight and prediction endpoints.
//!
//! Tests cover:
//! - GET /api/v1/ai/insights (insight strings, fixed category order)
//! - GET /api/v1/ai/predict (at-risk student flagging)

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, NaiveDate, Utc};
use common::{
    create_test_app, create_test_pool, get_request, get_request_with_auth, mint_token,
    parse_response_body, seed_attendance, seed_mark, seed_staff, seed_student, seed_subject,
    test_config,
};
use domain::models::UserRole;
use tower::ServiceExt;

fn this_month() -> NaiveDate {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap()
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn test_ai_endpoints_require_token() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool);

    for uri in ["/api/v1/ai/insights", "/api/v1/ai/predict"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_ai_endpoints_reject_student_role() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let student_id = seed_student(&pool, "Omar Said", None).await;
    let token = mint_token(student_id);

    let request = get_request_with_auth("/api/v1/ai/predict", &token);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// GET /api/v1/ai/insights
// =============================================================================

#[tokio::test]
async fn test_insights_default_message_when_no_data() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    let request = get_request_with_auth("/api/v1/ai/insights", &token);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "insights": ["No critical academic risks detected at this time."]
        })
    );
}

#[tokio::test]
async fn test_insights_default_message_when_all_healthy() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    let student = seed_student(&pool, "Hana Diaz", None).await;
    let maths = seed_subject(&pool, "Mathematics").await;

    seed_mark(&pool, student, maths, 88.0, this_month()).await;
    seed_attendance(&pool, student, this_month(), 10, 10).await;

    let request = get_request_with_auth("/api/v1/ai/insights", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 1);
    assert_eq!(
        insights[0],
        "No critical academic risks detected at this time."
    );
}

#[tokio::test]
async fn test_insights_weak_subject_callout() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Teacher).await;
    let student = seed_student(&pool, "Ivan Peck", None).await;
    let physics = seed_subject(&pool, "Physics").await;

    // Two marks averaging 52.5, below the 60 subject alert line. Attendance
    // stays healthy so only the subject rule fires.
    seed_mark(&pool, student, physics, 50.0, this_month()).await;
    seed_mark(&pool, student, physics, 55.0, this_month()).await;
    seed_attendance(&pool, student, this_month(), 10, 10).await;

    let request = get_request_with_auth("/api/v1/ai/insights", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    let insights = body["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 1);
    assert_eq!(
        insights[0],
        "Average in Physics is 52.5% across 2 marks; consider a review session."
    );
}

#[tokio::test]
async fn test_insights_category_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    let section = common::seed_section(&pool, "7-B").await;
    let student = seed_student(&pool, "Jon Asher", Some(section)).await;
    let chemistry = seed_subject(&pool, "Chemistry").await;

    // 48 average trips the subject rule and the section rule; 6/10
    // attendance with sub-60 scores trips the attendance-impact rule.
    seed_mark(&pool, student, chemistry, 48.0, this_month()).await;
    seed_attendance(&pool, student, this_month(), 6, 10).await;

    let request = get_request_with_auth("/api/v1/ai/insights", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    let insights: Vec<&str> = body["insights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    assert_eq!(insights.len(), 3);
    assert!(insights[0].starts_with("Average in Chemistry"), "{:?}", insights);
    assert!(insights[1].starts_with("Overall attendance"), "{:?}", insights);
    assert!(insights[2].starts_with("Section 7-B"), "{:?}", insights);
}

// =============================================================================
// GET /api/v1/ai/predict
// =============================================================================

#[tokio::test]
async fn test_predict_empty_database() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    let request = get_request_with_auth("/api/v1/ai/predict", &token);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["atRiskStudents"], serde_json::json!([]));
}

#[tokio::test]
async fn test_predict_flags_either_rule() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Teacher).await;
    let maths = seed_subject(&pool, "Mathematics").await;
    let day = this_month();

    // avg 44 with full attendance: flagged on score
    let weak = seed_student(&pool, "Weak Scorer", None).await;
    seed_mark(&pool, weak, maths, 44.0, day).await;
    seed_attendance(&pool, weak, day, 10, 10).await;

    // avg 100 with 60% attendance: flagged on attendance
    let truant = seed_student(&pool, "Absent Ace", None).await;
    seed_mark(&pool, truant, maths, 100.0, day).await;
    seed_attendance(&pool, truant, day, 6, 10).await;

    // avg 50 with 80% attendance: neither rule fires
    let fine = seed_student(&pool, "Doing Fine", None).await;
    seed_mark(&pool, fine, maths, 50.0, day).await;
    seed_attendance(&pool, fine, day, 8, 10).await;

    let request = get_request_with_auth("/api/v1/ai/predict", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 2);

    // Sorted ascending by average score
    let students = body["atRiskStudents"].as_array().unwrap();
    assert_eq!(students[0]["name"], "Weak Scorer");
    assert_eq!(students[0]["avgScore"], 44.0);
    assert_eq!(students[0]["attendancePct"], 100.0);
    assert_eq!(students[1]["name"], "Absent Ace");
    assert_eq!(students[1]["avgScore"], 100.0);
    assert_eq!(students[1]["attendancePct"], 60.0);
}

#[tokio::test]
async fn test_predict_student_without_marks_serializes_null_average() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    let day = this_month();

    // No marks at all, 50% attendance: flagged with a null average
    let unmarked = seed_student(&pool, "New Enrolee", None).await;
    seed_attendance(&pool, unmarked, day, 5, 10).await;

    let request = get_request_with_auth("/api/v1/ai/predict", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 1);
    let students = body["atRiskStudents"].as_array().unwrap();
    assert_eq!(students[0]["name"], "New Enrolee");
    assert!(students[0]["avgScore"].is_null());
    assert_eq!(students[0]["attendancePct"], 50.0);
}

#[tokio::test]
async fn test_predict_ignores_students_with_no_data() {
    let pool = create_test_pool().await;
    let app = create_test_app(test_config(), pool.clone());

    let (_, token) = seed_staff(&pool, UserRole::Admin).await;
    seed_student(&pool, "Blank Slate", None).await;

    let request = get_request_with_auth("/api/v1/ai/predict", &token);
    let response = app.oneshot(request).await.unwrap();

    let body = parse_response_body(response).await;
    assert_eq!(body["count"], 0, "no aggregates means not at risk");
}
