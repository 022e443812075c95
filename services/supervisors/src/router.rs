use axum::{
    Router,
    routing::{get, post},
};

use internship_core::middleware::with_request_tracing;

use crate::handlers::{
    health::{healthz, readyz},
    supervisor::{
        create_supervisor, delete_supervisor, get_intern_count, get_supervisor,
        get_supervisor_by_user_id, list_supervisor_interns, list_supervisors, update_supervisor,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Supervisors
        .route("/supervisors", get(list_supervisors))
        .route("/supervisors", post(create_supervisor))
        .route(
            "/supervisors/{id}",
            get(get_supervisor)
                .put(update_supervisor)
                .delete(delete_supervisor),
        )
        // Supervisors through their extension record
        .route("/supervisors/user/{user_id}", get(get_supervisor_by_user_id))
        .route(
            "/supervisors/user/{user_id}/interns",
            get(list_supervisor_interns),
        )
        .route(
            "/supervisors/user/{user_id}/intern-count",
            get(get_intern_count),
        )
        .with_state(state);
    with_request_tracing(router)
}
