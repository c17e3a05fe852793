pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis catalog
        .route("/api/v1/options", get(analysis_handlers::handle_list_options))
        // Session flow
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            put(handlers::handle_set_job_description),
        )
        .route(
            "/api/v1/sessions/:id/continue",
            post(handlers::handle_continue),
        )
        .route(
            "/api/v1/sessions/:id/option",
            post(handlers::handle_select_option),
        )
        .route(
            "/api/v1/sessions/:id/analyze",
            post(handlers::handle_analyze),
        )
        .route("/api/v1/sessions/:id/back", post(handlers::handle_back))
        .route(
            "/api/v1/sessions/:id/restart",
            post(handlers::handle_restart),
        )
        .route(
            "/api/v1/sessions/:id/download",
            get(handlers::handle_download),
        )
        .route("/api/v1/sessions/:id/audio", get(handlers::handle_audio))
        .with_state(state)
}
