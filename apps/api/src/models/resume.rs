use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::models::{AiRanking, Candidate, Category, MatchDetails, RecruiterRanking};

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub uploaded_by: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub file_key: String,
    pub file_name: String,
    pub file_type: String,
    pub parsed_content: String,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub education: String,
    pub ai_score: i32,
    pub ai_category: String,
    pub match_details: Json<MatchDetails>,
    pub recruiter_category: String,
    pub recruiter_notes: String,
    pub scored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ResumeRow {
    pub fn ai_ranking(&self) -> AiRanking {
        let score = u32::try_from(self.ai_score).unwrap_or(0).min(100);
        AiRanking {
            score,
            // column CHECK constraint keeps this parseable
            category: Category::parse_lenient(&self.ai_category)
                .unwrap_or_else(|| Category::for_score(score)),
            match_details: self.match_details.0.clone(),
        }
    }

    pub fn recruiter_ranking(&self) -> RecruiterRanking {
        RecruiterRanking::from_parts(&self.recruiter_category, self.recruiter_notes.clone())
            .unwrap_or_else(|_| RecruiterRanking {
                category: None,
                notes: self.recruiter_notes.clone(),
            })
    }

    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            name: self.candidate_name.clone(),
            email: self.candidate_email.clone(),
            skills: self.skills.clone(),
            experience_years: u32::try_from(self.experience_years).unwrap_or(0),
            education: self.education.clone(),
            ai_ranking: self.ai_ranking(),
            recruiter_ranking: self.recruiter_ranking(),
        }
    }

    pub fn to_view(&self) -> ResumeView {
        let candidate = self.to_candidate();
        ResumeView {
            id: self.id,
            job_id: self.job_id,
            uploaded_by: self.uploaded_by,
            candidate_name: candidate.name.clone(),
            candidate_email: candidate.email.clone(),
            file_key: self.file_key.clone(),
            file_name: self.file_name.clone(),
            file_type: self.file_type.clone(),
            skills: candidate.skills.clone(),
            experience_years: candidate.experience_years,
            education: candidate.education.clone(),
            effective_category: candidate.effective_category(),
            ai_ranking: candidate.ai_ranking,
            recruiter_ranking: candidate.recruiter_ranking,
            scored_at: self.scored_at,
            created_at: self.created_at,
        }
    }
}

/// Resume as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub id: Uuid,
    pub job_id: Uuid,
    pub uploaded_by: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    /// Object key of the original upload in the resume bucket.
    pub file_key: String,
    pub file_name: String,
    pub file_type: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    pub ai_ranking: AiRanking,
    pub recruiter_ranking: RecruiterRanking,
    pub effective_category: Category,
    pub scored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
