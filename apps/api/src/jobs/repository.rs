use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::handlers::CreateJobRequest;
use crate::models::job::JobRow;

pub async fn list_jobs(db: &PgPool, status: Option<&str>) -> Result<Vec<JobRow>, AppError> {
    let rows = sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE ($1::text IS NULL OR status = $1) ORDER BY created_at DESC",
    )
    .bind(status)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_job(db: &PgPool, id: Uuid) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

pub async fn insert_job(
    db: &PgPool,
    recruiter_id: Uuid,
    req: &CreateJobRequest,
) -> Result<JobRow, AppError> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, recruiter_id, title, company, description, required_skills,
             preferred_skills, experience_years, education, location, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'open')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(recruiter_id)
    .bind(req.title.trim())
    .bind(req.company.trim())
    .bind(req.description.trim())
    .bind(&req.required_skills)
    .bind(&req.preferred_skills)
    .bind(req.experience)
    .bind(req.education.trim())
    .bind(req.location.trim())
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update_status(db: &PgPool, id: Uuid, status: &str) -> Result<JobRow, AppError> {
    sqlx::query_as::<_, JobRow>("UPDATE jobs SET status = $1 WHERE id = $2 RETURNING *")
        .bind(status)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// Deletes the job; its resumes go with it through `ON DELETE CASCADE`.
pub async fn delete_job(db: &PgPool, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    Ok(())
}
