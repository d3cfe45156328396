use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::{AiRanking, RecruiterRanking};
use crate::models::resume::ResumeRow;

/// Fields of a freshly uploaded resume. The row starts with the fallback
/// ranking so it is never observed without one.
pub struct NewResume<'a> {
    pub id: Uuid,
    pub job_id: Uuid,
    pub uploaded_by: Uuid,
    pub candidate_name: &'a str,
    pub candidate_email: &'a str,
    pub file_key: &'a str,
    pub file_name: &'a str,
    pub file_type: &'a str,
    pub parsed_content: &'a str,
    pub skills: &'a [String],
    pub experience_years: u32,
    pub education: &'a str,
}

pub async fn insert_resume(db: &PgPool, new: &NewResume<'_>) -> Result<ResumeRow, AppError> {
    let fallback = AiRanking::fallback();
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, job_id, uploaded_by, candidate_name, candidate_email, file_key,
             file_name, file_type, parsed_content, skills, experience_years,
             education, ai_score, ai_category, match_details)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        RETURNING *
        "#,
    )
    .bind(new.id)
    .bind(new.job_id)
    .bind(new.uploaded_by)
    .bind(new.candidate_name)
    .bind(new.candidate_email)
    .bind(new.file_key)
    .bind(new.file_name)
    .bind(new.file_type)
    .bind(new.parsed_content)
    .bind(new.skills)
    .bind(i32::try_from(new.experience_years).unwrap_or(i32::MAX))
    .bind(new.education)
    .bind(fallback.score as i32)
    .bind(fallback.category.as_str())
    .bind(Json(&fallback.match_details))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn get_resume(db: &PgPool, id: Uuid) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// Resumes of a job in upload order.
pub async fn list_for_job(db: &PgPool, job_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE job_id = $1 ORDER BY seq ASC",
    )
    .bind(job_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Overwrites the AI ranking of one resume and stamps `scored_at`.
pub async fn store_ai_ranking(
    db: &PgPool,
    id: Uuid,
    ranking: &AiRanking,
) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET ai_score = $1, ai_category = $2, match_details = $3, scored_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(ranking.score.min(100) as i32)
    .bind(ranking.category.as_str())
    .bind(Json(&ranking.match_details))
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

/// Replaces the recruiter override; the AI ranking is left untouched.
pub async fn store_recruiter_ranking(
    db: &PgPool,
    id: Uuid,
    ranking: &RecruiterRanking,
) -> Result<ResumeRow, AppError> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET recruiter_category = $1, recruiter_notes = $2
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(ranking.category_str())
    .bind(&ranking.notes)
    .bind(id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
