use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Supervisors service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum SupervisorsServiceError {
    #[error("supervisor not found")]
    SupervisorNotFound,
    #[error("user is not a supervisor")]
    NotASupervisor,
    #[error("email already exists")]
    EmailExists,
    #[error("department is required")]
    DepartmentRequired,
    #[error("supervisor has assigned interns")]
    HasAssignedInterns,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SupervisorsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SupervisorNotFound => "SUPERVISOR_NOT_FOUND",
            Self::NotASupervisor => "NOT_A_SUPERVISOR",
            Self::EmailExists => "EMAIL_EXISTS",
            Self::DepartmentRequired => "DEPARTMENT_REQUIRED",
            Self::HasAssignedInterns => "HAS_ASSIGNED_INTERNS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for SupervisorsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::SupervisorNotFound => StatusCode::NOT_FOUND,
            Self::NotASupervisor | Self::DepartmentRequired => StatusCode::BAD_REQUEST,
            Self::EmailExists | Self::HasAssignedInterns => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are caller mistakes and already visible in the request trace span.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
