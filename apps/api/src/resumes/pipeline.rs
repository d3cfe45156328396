//! Resume upload pipeline.
//!
//! validate → extract (fatal) → parse attributes → store file → insert row
//! with the fallback ranking → score (recovering) → persist ranking.
//! A failed insert removes the stored file again.

use std::future::Future;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract, DocumentType, ExtractionError};
use crate::jobs::repository as jobs_repo;
use crate::matching::resume_parser::parse_resume_attributes;
use crate::matching::scoring::{score_or_fallback, ScoringTarget};
use crate::models::resume::ResumeRow;
use crate::resumes::repository::{self, NewResume};
use crate::state::AppState;
use crate::storage::{delete_resume_file, resume_object_key, upload_resume_file};

/// Multipart upload after field collection.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<Bytes>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub declared_type: Option<String>,
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: Option<String>,
}

/// A form that passed validation.
#[derive(Debug)]
pub struct ValidUpload {
    pub file: Bytes,
    pub file_name: String,
    pub doc_type: DocumentType,
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: Uuid,
}

impl UploadForm {
    pub fn validate(self) -> Result<ValidUpload, AppError> {
        let file = self
            .file
            .filter(|f| !f.is_empty())
            .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

        let candidate_name = self.candidate_name.trim().to_string();
        if candidate_name.is_empty() {
            return Err(AppError::Validation("candidateName is required".to_string()));
        }
        let candidate_email = self.candidate_email.trim().to_string();
        if !looks_like_email(&candidate_email) {
            return Err(AppError::Validation(
                "candidateEmail must be a valid email address".to_string(),
            ));
        }
        let job_id = self
            .job_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("jobId is required".to_string()))?;
        let job_id = Uuid::parse_str(job_id)
            .map_err(|_| AppError::Validation(format!("jobId '{job_id}' is not a valid id")))?;

        let doc_type = resolve_document_type(
            self.declared_type.as_deref(),
            self.content_type.as_deref(),
            &self.file_name,
        )?;

        Ok(ValidUpload {
            file,
            file_name: self.file_name,
            doc_type,
            candidate_name,
            candidate_email,
            job_id,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !value.contains(' ')
        }
        None => false,
    }
}

/// Document type from, in order: the explicit `fileType` field, the part's
/// content type, the file extension. The first recognised value wins.
pub fn resolve_document_type(
    declared: Option<&str>,
    content_type: Option<&str>,
    file_name: &str,
) -> Result<DocumentType, ExtractionError> {
    if let Some(declared) = declared.filter(|d| !d.trim().is_empty()) {
        return DocumentType::from_declared(declared);
    }
    if let Some(ct) = content_type {
        if let Ok(doc_type) = DocumentType::from_declared(ct) {
            return Ok(doc_type);
        }
    }
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    DocumentType::from_declared(extension).map_err(|_| {
        ExtractionError::UnsupportedFormat(
            content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or(file_name)
                .to_string(),
        )
    })
}

pub async fn process_upload(
    state: &AppState,
    uploaded_by: Uuid,
    upload: ValidUpload,
) -> Result<ResumeRow, AppError> {
    let job = jobs_repo::get_job(&state.db, upload.job_id).await?;

    let doc_type = upload.doc_type;
    let file = upload.file.clone();
    let text = tokio::task::spawn_blocking(move || extract(&file, doc_type.as_str()))
        .await
        .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"))?
        .map_err(|e| {
            warn!(
                "Extraction failed for '{}' ({}): {e}",
                upload.file_name,
                doc_type.as_str()
            );
            e
        })?;

    let attributes = parse_resume_attributes(state.generator(), &text).await;

    let resume_id = Uuid::new_v4();
    let file_key = resume_object_key(job.id, resume_id, doc_type);
    upload_resume_file(
        &state.s3,
        &state.config.s3_bucket,
        &file_key,
        doc_type,
        upload.file.to_vec(),
    )
    .await?;

    let new_resume = NewResume {
        id: resume_id,
        job_id: job.id,
        uploaded_by,
        candidate_name: &upload.candidate_name,
        candidate_email: &upload.candidate_email,
        file_key: &file_key,
        file_name: &upload.file_name,
        file_type: doc_type.as_str(),
        parsed_content: &text,
        skills: &attributes.skills,
        experience_years: attributes.experience_years,
        education: &attributes.education,
    };
    let insert = repository::insert_resume(&state.db, &new_resume);
    let row = undo_on_error(insert, || {
        delete_resume_file(&state.s3, &state.config.s3_bucket, &file_key)
    })
    .await?;

    info!(
        resume_id = %row.id,
        job_id = %job.id,
        file_type = doc_type.as_str(),
        text_len = text.len(),
        "Resume upload accepted"
    );

    let target = ScoringTarget {
        resume_id: row.id,
        job_id: job.id,
    };
    let ranking = score_or_fallback(
        state.scorer.as_ref(),
        target,
        &text,
        &job.to_profile(),
        state.scoring_timeout(),
    )
    .await;
    repository::store_ai_ranking(&state.db, row.id, &ranking).await
}

/// Awaits `step`; if it fails, awaits `undo` before handing the error back.
async fn undo_on_error<T, Undo, UndoFut>(
    step: impl Future<Output = Result<T, AppError>>,
    undo: Undo,
) -> Result<T, AppError>
where
    Undo: FnOnce() -> UndoFut,
    UndoFut: Future<Output = ()>,
{
    match step.await {
        Ok(value) => Ok(value),
        Err(e) => {
            undo().await;
            Err(e)
        }
    }
}

/// Recomputes the AI ranking from the stored text and overwrites it.
pub async fn rescore(state: &AppState, resume_id: Uuid) -> Result<ResumeRow, AppError> {
    let resume = repository::get_resume(&state.db, resume_id).await?;
    let job = jobs_repo::get_job(&state.db, resume.job_id).await?;
    let target = ScoringTarget {
        resume_id: resume.id,
        job_id: job.id,
    };
    let ranking = score_or_fallback(
        state.scorer.as_ref(),
        target,
        &resume.parsed_content,
        &job.to_profile(),
        state.scoring_timeout(),
    )
    .await;
    repository::store_ai_ranking(&state.db, resume.id, &ranking).await
}
