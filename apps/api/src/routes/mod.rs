pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::services::handlers as services;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job_status)
                .delete(jobs::handle_delete_job),
        )
        // Resumes
        .route("/resumes", post(resumes::handle_upload_resume))
        .route("/resumes/job/:job_id", get(resumes::handle_list_job_resumes))
        .route(
            "/resumes/job/:job_id/export",
            get(resumes::handle_export_job),
        )
        .route("/resumes/:id/rank", put(resumes::handle_rank_resume))
        .route("/resumes/:id/rescore", post(resumes::handle_rescore_resume))
        // Services
        .route(
            "/api/services/parse-resume",
            post(services::handle_parse_resume),
        )
        .route("/api/services/rank-jobs", post(services::handle_rank_jobs))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
