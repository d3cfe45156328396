use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::jobs::repository as jobs_repo;
use crate::matching::models::AiRanking;
use crate::matching::resume_parser::{parse_resume_attributes, ParsedResume};
use crate::matching::scoring::{score_or_fallback, ScoringTarget};
use crate::resumes::repository as resumes_repo;
use crate::state::AppState;

pub const MAX_RANK_JOBS: usize = 25;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankJobsRequest {
    pub resume_id: Uuid,
    pub job_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRanking {
    pub job_id: Uuid,
    pub ranking: AiRanking,
}

/// POST /api/services/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText is required".to_string()));
    }
    Ok(Json(
        parse_resume_attributes(state.generator(), &req.resume_text).await,
    ))
}

/// POST /api/services/rank-jobs
///
/// Scores one stored resume against several jobs concurrently. Each call
/// falls back on its own; results follow the request order.
pub async fn handle_rank_jobs(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<RankJobsRequest>,
) -> Result<Json<Vec<JobRanking>>, AppError> {
    let job_ids = dedupe_job_ids(&req.job_ids)?;
    let resume = resumes_repo::get_resume(&state.db, req.resume_id).await?;

    let mut profiles = Vec::with_capacity(job_ids.len());
    for id in &job_ids {
        profiles.push(jobs_repo::get_job(&state.db, *id).await?.to_profile());
    }

    let resume_text: Arc<str> = Arc::from(resume.parsed_content.as_str());
    let timeout = state.scoring_timeout();
    let mut tasks = JoinSet::new();
    for (index, (job_id, profile)) in job_ids.iter().copied().zip(profiles).enumerate() {
        let scorer = state.scorer.clone();
        let text = resume_text.clone();
        let target = ScoringTarget {
            resume_id: resume.id,
            job_id,
        };
        tasks.spawn(async move {
            let ranking = score_or_fallback(scorer.as_ref(), target, &text, &profile, timeout).await;
            (index, ranking)
        });
    }

    let mut rankings: Vec<Option<AiRanking>> = vec![None; job_ids.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, ranking)) => rankings[index] = Some(ranking),
            Err(e) => error!("Scoring task for resume {} aborted: {e}", resume.id),
        }
    }

    let results: Vec<JobRanking> = job_ids
        .into_iter()
        .zip(rankings)
        .map(|(job_id, ranking)| JobRanking {
            job_id,
            ranking: ranking.unwrap_or_else(AiRanking::fallback),
        })
        .collect();

    if let Some(own) = results.iter().find(|r| r.job_id == resume.job_id) {
        resumes_repo::store_ai_ranking(&state.db, resume.id, &own.ranking).await?;
    }

    info!(
        "Ranked resume {} against {} jobs using {} scorer",
        resume.id,
        results.len(),
        state.scorer.backend()
    );
    Ok(Json(results))
}

/// Drops repeated ids (first occurrence kept) and bounds the fan-out.
fn dedupe_job_ids(ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
    let mut unique: Vec<Uuid> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }
    if unique.is_empty() {
        return Err(AppError::Validation("jobIds must not be empty".to_string()));
    }
    if unique.len() > MAX_RANK_JOBS {
        return Err(AppError::Validation(format!(
            "at most {MAX_RANK_JOBS} jobs can be ranked per request"
        )));
    }
    Ok(unique)
}
