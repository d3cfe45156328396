use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::{CurrentUser, Recruiter};
use crate::errors::AppError;
use crate::export::{build_report, export_file_name, xlsx};
use crate::jobs::repository as jobs_repo;
use crate::matching::merge::group_by_effective;
use crate::matching::models::{Candidate, RecruiterRanking};
use crate::models::resume::ResumeView;
use crate::resumes::pipeline::{self, UploadForm};
use crate::resumes::repository;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

/// POST /resumes
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeView>), AppError> {
    let upload = read_upload_form(multipart).await?.validate()?;
    let row = pipeline::process_upload(&state, user.id, upload).await?;
    Ok((StatusCode::CREATED, Json(row.to_view())))
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                form.file_name = field.file_name().unwrap_or_default().to_string();
                form.content_type = field.content_type().map(str::to_string);
                form.file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read resume file: {e}"))
                })?);
            }
            "candidateName" | "candidateEmail" | "jobId" | "fileType" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read {name}: {e}")))?;
                match name.as_str() {
                    "candidateName" => form.candidate_name = value,
                    "candidateEmail" => form.candidate_email = value,
                    "jobId" => form.job_id = Some(value),
                    _ => form.declared_type = Some(value),
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

/// GET /resumes/job/:jobId
pub async fn handle_list_job_resumes(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<ResumeView>>, AppError> {
    jobs_repo::get_job(&state.db, job_id).await?;
    let rows = repository::list_for_job(&state.db, job_id).await?;
    Ok(Json(rows.iter().map(|r| r.to_view()).collect()))
}

/// PUT /resumes/:id/rank
pub async fn handle_rank_resume(
    State(state): State<AppState>,
    _recruiter: Recruiter,
    Path(id): Path<Uuid>,
    Json(req): Json<RankRequest>,
) -> Result<Json<ResumeView>, AppError> {
    let ranking =
        RecruiterRanking::from_parts(&req.category, req.notes).map_err(AppError::Validation)?;
    let row = repository::store_recruiter_ranking(&state.db, id, &ranking).await?;
    info!(
        "Recruiter ranking for resume {id} set to '{}'",
        ranking.category_str()
    );
    Ok(Json(row.to_view()))
}

/// POST /resumes/:id/rescore
pub async fn handle_rescore_resume(
    State(state): State<AppState>,
    _recruiter: Recruiter,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeView>, AppError> {
    let row = pipeline::rescore(&state, id).await?;
    Ok(Json(row.to_view()))
}

/// GET /resumes/job/:jobId/export
pub async fn handle_export_job(
    State(state): State<AppState>,
    _recruiter: Recruiter,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let job = jobs_repo::get_job(&state.db, job_id).await?;
    let candidates: Vec<Candidate> = repository::list_for_job(&state.db, job_id)
        .await?
        .iter()
        .map(|r| r.to_candidate())
        .collect();

    let report = build_report(&job.to_profile(), &candidates);
    let bytes = xlsx::render_xlsx(&report)?;
    let breakdown = group_by_effective(&candidates)
        .iter()
        .map(|(category, members)| format!("{category}={}", members.len()))
        .collect::<Vec<_>>()
        .join(", ");
    info!(
        "Exported {} candidates for job {job_id} ({breakdown}; {} bytes)",
        candidates.len(),
        bytes.len()
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(&job.title)
    );
    Ok((
        [
            (header::CONTENT_TYPE, xlsx::XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::Category;

    #[test]
    fn test_rank_request_empty_category_clears_override() {
        let req: RankRequest = serde_json::from_str(r#"{"category": "", "notes": "revisit"}"#).unwrap();
        let ranking = RecruiterRanking::from_parts(&req.category, req.notes).unwrap();
        assert_eq!(ranking.category, None);
        assert_eq!(ranking.notes, "revisit");
    }

    #[test]
    fn test_rank_request_known_category() {
        let req: RankRequest = serde_json::from_str(r#"{"category": "must-interview"}"#).unwrap();
        let ranking = RecruiterRanking::from_parts(&req.category, req.notes).unwrap();
        assert_eq!(ranking.category, Some(Category::MustInterview));
        assert!(ranking.notes.is_empty());
    }

    #[test]
    fn test_rank_request_unknown_category_rejected() {
        assert!(RecruiterRanking::from_parts("superstar", "").is_err());
    }
}
