use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use internship_domain::intern::InternStatus;
use internship_domain::user::{AccountStatus, UserRole};

use crate::domain::types::{Intern, SupervisorPatch, SupervisorSummary};
use crate::error::SupervisorsServiceError;
use crate::state::AppState;
use crate::usecase::supervisor::CreateSupervisorInput;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SupervisorResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub account_status: AccountStatus,
    pub intern_count: u64,
    #[serde(serialize_with = "internship_core::serde::rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "internship_core::serde::rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<SupervisorSummary> for SupervisorResponse {
    fn from(s: SupervisorSummary) -> Self {
        Self {
            id: s.id,
            email: s.email,
            first_name: s.first_name,
            last_name: s.last_name,
            department: s.department,
            phone: s.phone,
            role: s.role,
            account_status: s.account_status,
            intern_count: s.intern_count,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct InternResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub supervisor_id: Option<Uuid>,
    pub school: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: InternStatus,
}

impl From<Intern> for InternResponse {
    fn from(i: Intern) -> Self {
        Self {
            id: i.id,
            user_id: i.user_id,
            supervisor_id: i.supervisor_id,
            school: i.school,
            department: i.department,
            start_date: i.start_date,
            end_date: i.end_date,
            status: i.status,
        }
    }
}

// ── GET /supervisors ─────────────────────────────────────────────────────────

pub async fn list_supervisors(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupervisorResponse>>, SupervisorsServiceError> {
    let summaries = state.supervisor_directory().list_all().await?;
    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

// ── POST /supervisors ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSupervisorRequest {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub department: Option<String>,
    pub phone: Option<String>,
}

pub async fn create_supervisor(
    State(state): State<AppState>,
    Json(body): Json<CreateSupervisorRequest>,
) -> Result<(StatusCode, Json<SupervisorResponse>), SupervisorsServiceError> {
    let summary = state
        .supervisor_directory()
        .create(CreateSupervisorInput {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            department: body.department,
            phone: body.phone,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(summary.into())))
}

// ── GET /supervisors/{id} ────────────────────────────────────────────────────

pub async fn get_supervisor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SupervisorResponse>, SupervisorsServiceError> {
    let summary = state.supervisor_directory().get_by_id(id).await?;
    Ok(Json(summary.into()))
}

// ── PUT /supervisors/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateSupervisorRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
}

pub async fn update_supervisor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSupervisorRequest>,
) -> Result<Json<SupervisorResponse>, SupervisorsServiceError> {
    let patch = SupervisorPatch {
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
        department: body.department,
        phone: body.phone,
    };
    let summary = state.supervisor_directory().update(id, patch).await?;
    Ok(Json(summary.into()))
}

// ── DELETE /supervisors/{id} ─────────────────────────────────────────────────

pub async fn delete_supervisor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, SupervisorsServiceError> {
    state.supervisor_directory().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /supervisors/user/{user_id} ──────────────────────────────────────────

pub async fn get_supervisor_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SupervisorResponse>, SupervisorsServiceError> {
    let summary = state.supervisor_directory().get_by_user_id(user_id).await?;
    Ok(Json(summary.into()))
}

// ── GET /supervisors/user/{user_id}/interns ──────────────────────────────────

pub async fn list_supervisor_interns(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<InternResponse>>, SupervisorsServiceError> {
    let interns = state.supervisor_directory().list_interns(user_id).await?;
    Ok(Json(interns.into_iter().map(Into::into).collect()))
}

// ── GET /supervisors/user/{user_id}/intern-count ─────────────────────────────

pub async fn get_intern_count(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<u64>, SupervisorsServiceError> {
    let count = state.supervisor_directory().intern_count(user_id).await?;
    Ok(Json(count))
}
