use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{Value, json};
use uuid::Uuid;

use internship_supervisors::router::build_router;
use internship_supervisors::state::AppState;
use internship_supervisors_schema::{supervisors, users};

fn server(db: MockDatabase) -> TestServer {
    let state = AppState {
        db: Arc::new(db.into_connection()),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn user_row(email: &str, role: i16) -> users::Model {
    let now = Utc::now();
    users::Model {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        first_name: "Edsger".to_owned(),
        last_name: "Dijkstra".to_owned(),
        department: Some("CS".to_owned()),
        phone: None,
        role,
        account_status: 1,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn should_answer_liveness_check() {
    let server = server(MockDatabase::new(DatabaseBackend::Postgres));
    server.get("/healthz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_ready_when_database_answers_ping() {
    let server = server(MockDatabase::new(DatabaseBackend::Postgres));
    server.get("/readyz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_report_unavailable_when_database_is_unreachable() {
    let state = AppState {
        db: Arc::new(DatabaseConnection::Disconnected),
    };
    let server = TestServer::new(build_router(state)).unwrap();

    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_return_404_with_request_id_for_unknown_supervisor() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()]);
    let server = server(db);

    let resp = server
        .get(&format!("/supervisors/{}", Uuid::now_v7()))
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "SUPERVISOR_NOT_FOUND");
    assert_eq!(body["message"], "supervisor not found");
    assert!(!resp.header("x-request-id").is_empty());
}

#[tokio::test]
async fn should_return_400_for_user_with_other_role() {
    let intern = user_row("intern@x.com", 2);
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![intern.clone()]]);
    let server = server(db);

    let resp = server.get(&format!("/supervisors/{}", intern.id)).await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "NOT_A_SUPERVISOR");
}

#[tokio::test]
async fn should_return_400_for_malformed_id() {
    let server = server(MockDatabase::new(DatabaseBackend::Postgres));
    server
        .get("/supervisors/not-a-uuid")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_400_when_department_missing_on_create() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()]);
    let server = server(db);

    let resp = server
        .post("/supervisors")
        .json(&json!({ "email": "new@x.com", "department": "" }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "DEPARTMENT_REQUIRED");
}

#[tokio::test]
async fn should_return_409_when_email_taken_on_create() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row("taken@x.com", 0)]]);
    let server = server(db);

    let resp = server
        .post("/supervisors")
        .json(&json!({ "email": "taken@x.com", "department": "CS" }))
        .await;

    resp.assert_status(StatusCode::CONFLICT);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "EMAIL_EXISTS");
}

#[tokio::test]
async fn should_return_404_for_intern_count_without_extension() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<supervisors::Model>::new()]);
    let server = server(db);

    let resp = server
        .get(&format!("/supervisors/user/{}/intern-count", Uuid::now_v7()))
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_render_summary_for_supervisor_without_extension() {
    let supervisor = user_row("lone@x.com", 1);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![supervisor.clone()]])
        .append_query_results([Vec::<supervisors::Model>::new()]);
    let server = server(db);

    let resp = server.get(&format!("/supervisors/{}", supervisor.id)).await;

    resp.assert_status(StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["id"], supervisor.id.to_string());
    assert_eq!(body["email"], "lone@x.com");
    assert_eq!(body["role"], "SUPERVISOR");
    assert_eq!(body["account_status"], "ACTIVE");
    assert_eq!(body["intern_count"], 0);
    assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
}
