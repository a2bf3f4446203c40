//! Integration tests for the HTTP API.
//!
//! Builds the full router over in-memory adapters and drives it with
//! `tower::ServiceExt::oneshot`, checking status codes and JSON bodies.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use writer_onboarding::adapters::{app_router, AppState, InMemoryEventBus, InMemoryWizardStore};
use writer_onboarding::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn router() -> Router {
    let config = AppConfig::default();
    let state = AppState::new(
        Arc::new(InMemoryWizardStore::new()),
        Arc::new(InMemoryEventBus::new()),
        &config,
    );
    app_router(state, &config.server)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn send_raw(app: &Router, uri: &str, raw: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn start(app: &Router) -> String {
    let (status, body) = send(app, "POST", "/api/onboarding", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body["wizard_id"].as_str().unwrap().to_string()
}

async fn profile(app: &Router, id: &str, action: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/api/onboarding/{id}/profile"), Some(action)).await
}

async fn tutorial(app: &Router, id: &str, action: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/api/onboarding/{id}/tutorial"), Some(action)).await
}

async fn next(app: &Router, id: &str) -> (StatusCode, Value) {
    send(app, "POST", &format!("/api/onboarding/{id}/next"), None).await
}

async fn fill_profile(app: &Router, id: &str) {
    let actions = [
        json!({ "action": "set_full_name", "value": "Ada Writer" }),
        json!({ "action": "set_email", "value": "ada@example.com" }),
        json!({
            "action": "set_bio",
            "value": "Technology writer focused on developer tools, open source and the web."
        }),
        json!({ "action": "set_expertise", "area": "technology", "selected": true }),
        json!({ "action": "attach_sample", "file_name": "portfolio.pdf", "size_bytes": 250000 }),
    ];
    for action in actions {
        let (status, _) = profile(app, id, action).await;
        assert_eq!(status, StatusCode::OK);
    }
}

async fn pass_quiz(app: &Router, id: &str) -> Value {
    tutorial(app, id, json!({ "action": "select_tab", "tab": "quiz" })).await;
    tutorial(app, id, json!({ "action": "start_quiz" })).await;
    for (question_id, option) in [("q1", "c"), ("q2", "b"), ("q3", "c")] {
        let (status, _) = tutorial(
            app,
            id,
            json!({ "action": "answer", "question_id": question_id, "option": option }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = tutorial(app, id, json!({ "action": "submit_quiz" })).await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = router();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn start_returns_fresh_wizard() {
    let app = router();
    let (status, body) = send(&app, "POST", "/api/onboarding", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["step"], "profile");
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["progress"], 0);
    assert_eq!(body["profile"]["stage"], "basics");
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = router();
    let (status, _) = send(&app, "GET", "/api/onboarding/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing = "7f0c1d2e-3a4b-4c5d-8e9f-0a1b2c3d4e5f";
    let (status, body) = send(&app, "GET", &format!("/api/onboarding/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn invalid_email_is_reported_inline() {
    let app = router();
    let id = start(&app).await;

    let (status, body) = profile(
        &app,
        &id,
        json!({ "action": "set_email", "value": "not-an-email" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["kind"], "edited");
    assert_eq!(
        body["result"]["errors"]["email"],
        "Please enter a valid email address."
    );
}

#[tokio::test]
async fn next_with_invalid_profile_is_blocked() {
    let app = router();
    let id = start(&app).await;

    let (status, body) = next(&app, &id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "blocked");
    assert_eq!(body["gate"], "profile_invalid");
    assert!(body["errors"].is_object());
    assert_eq!(body["wizard"]["step"], "profile");
}

#[tokio::test]
async fn rejected_sample_is_a_bad_request() {
    let app = router();
    let id = start(&app).await;

    let (status, body) = profile(
        &app,
        &id,
        json!({ "action": "attach_sample", "file_name": "notes.exe", "size_bytes": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "writingSamples");
}

#[tokio::test]
async fn tutorial_content_is_served_without_answer_key() {
    let app = router();
    let id = start(&app).await;
    fill_profile(&app, &id).await;

    let (_, body) = next(&app, &id).await;
    assert_eq!(body["outcome"], "moved");
    assert_eq!(body["to"], "tutorial");

    let tutorial_view = &body["wizard"]["tutorial"];
    assert_eq!(tutorial_view["progress"], 33);
    let questions = tutorial_view["content"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q.get("correct_answer").is_none()));
}

#[tokio::test]
async fn quiz_actions_out_of_order_conflict() {
    let app = router();
    let id = start(&app).await;
    fill_profile(&app, &id).await;
    next(&app, &id).await;

    let (status, _) = tutorial(&app, &id, json!({ "action": "start_quiz" })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    tutorial(&app, &id, json!({ "action": "select_tab", "tab": "quiz" })).await;
    tutorial(&app, &id, json!({ "action": "start_quiz" })).await;
    let (status, body) = tutorial(&app, &id, json!({ "action": "submit_quiz" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["answered"], 0);
    assert_eq!(body["details"]["total"], 3);
}

#[tokio::test]
async fn full_flow_redirects_to_dashboard() {
    let app = router();
    let id = start(&app).await;
    fill_profile(&app, &id).await;
    next(&app, &id).await;

    let submitted = pass_quiz(&app, &id).await;
    assert_eq!(submitted["score"]["percentage"], 100.0);
    assert_eq!(submitted["score"]["passed"], true);

    let (_, body) = next(&app, &id).await;
    assert_eq!(body["to"], "preview");
    assert_eq!(body["wizard"]["progress"], 66);
    assert!(body["wizard"]["preview"].is_object());

    let (_, body) = next(&app, &id).await;
    assert_eq!(body["to"], "checklist");

    let (_, body) = send(&app, "POST", &format!("/api/onboarding/{id}/complete"), None).await;
    assert_eq!(body["outcome"], "blocked");
    assert_eq!(body["gate"], "checklist_incomplete");

    for task in 1..=3 {
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/onboarding/{id}/checklist/{task}/toggle"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completed"], true);
    }

    let (status, body) =
        send(&app, "POST", &format!("/api/onboarding/{id}/complete"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "completed");
    assert_eq!(body["redirect_to"], "/dashboard");
    assert_eq!(body["wizard"]["status"], "completed");

    let (_, body) = send(&app, "POST", &format!("/api/onboarding/{id}/complete"), None).await;
    assert_eq!(body["outcome"], "already_complete");

    let (status, _) = profile(&app, &id, json!({ "action": "set_bio", "value": "late" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_checklist_task_is_a_bad_request() {
    let app = router();
    let id = start(&app).await;
    fill_profile(&app, &id).await;
    next(&app, &id).await;
    pass_quiz(&app, &id).await;
    next(&app, &id).await;
    next(&app, &id).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/onboarding/{id}/checklist/9/toggle"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "task_id");
}

#[tokio::test]
async fn previous_from_profile_exits() {
    let app = router();
    let id = start(&app).await;

    let (status, body) =
        send(&app, "POST", &format!("/api/onboarding/{id}/previous"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "exited");
    assert!(body.get("wizard").is_none());

    let (status, _) = send(&app, "GET", &format!("/api/onboarding/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_shows_placeholder() {
    let app = router();
    let (status, body) = send(&app, "GET", "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"].as_array().unwrap().len(), 3);
    assert_eq!(body["tabs"].as_array().unwrap().len(), 4);

    let (status, body) = send(&app, "GET", "/api/dashboard/tabs/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "articles");

    let (status, _) = send(&app, "GET", "/api/dashboard/tabs/billing", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreadable_action_bodies_get_json_errors() {
    let app = router();
    let id = start(&app).await;

    let (status, body) = send_raw(&app, &format!("/api/onboarding/{id}/profile"), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["details"]["reason"].is_string());

    let (status, body) = tutorial(&app, &id, json!({ "action": "skip_quiz" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = profile(&app, &id, json!({ "action": "set_email" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
}
