use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::{CurrentUser, Recruiter};
use crate::errors::AppError;
use crate::jobs::repository;
use crate::matching::resume_parser::dedupe_case_insensitive;
use crate::models::job::{is_valid_status, JobRow, JOB_STATUSES};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience: i32,
    pub education: String,
    pub location: String,
}

impl CreateJobRequest {
    /// Trims and dedupes skill lists, then checks required fields.
    pub fn validated(mut self) -> Result<Self, AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("description", &self.description),
            ("education", &self.education),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if self.experience < 0 {
            return Err(AppError::Validation(
                "experience must not be negative".to_string(),
            ));
        }

        self.required_skills = dedupe_case_insensitive(self.required_skills);
        self.preferred_skills = dedupe_case_insensitive(self.preferred_skills);
        if self.required_skills.is_empty() {
            return Err(AppError::Validation(
                "at least one required skill is needed".to_string(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<JobListQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = repository::list_jobs(&state.db, params.status.as_deref()).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    Ok(Json(repository::get_job(&state.db, id).await?))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Recruiter(user): Recruiter,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let req = req.validated()?;
    let job = repository::insert_job(&state.db, user.id, &req).await?;
    info!("Created job {} '{}' for recruiter {}", job.id, job.title, user.id);
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    _recruiter: Recruiter,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<JobRow>, AppError> {
    let status = req.status.trim();
    if !is_valid_status(status) {
        return Err(AppError::Validation(format!(
            "status must be one of {}",
            JOB_STATUSES.join(", ")
        )));
    }
    Ok(Json(repository::update_status(&state.db, id, status).await?))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    _recruiter: Recruiter,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repository::delete_job(&state.db, id).await?;
    info!("Deleted job {id} and its resumes");
    Ok(StatusCode::NO_CONTENT)
}
