use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::models::JobProfile;

pub const JOB_STATUSES: [&str; 3] = ["open", "in-progress", "closed"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_years: i32,
    pub education: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn to_profile(&self) -> JobProfile {
        JobProfile {
            title: self.title.clone(),
            company: self.company.clone(),
            description: self.description.clone(),
            required_skills: self.required_skills.clone(),
            preferred_skills: self.preferred_skills.clone(),
            minimum_experience_years: u32::try_from(self.experience_years).unwrap_or(0),
            minimum_education: self.education.clone(),
            location: self.location.clone(),
        }
    }
}

pub fn is_valid_status(status: &str) -> bool {
    JOB_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_profile_maps_requirements() {
        let row = JobRow {
            id: Uuid::new_v4(),
            recruiter_id: Uuid::new_v4(),
            title: "SRE".into(),
            company: "Acme".into(),
            description: "Keep it up".into(),
            required_skills: vec!["Linux".into()],
            preferred_skills: vec!["Terraform".into()],
            experience_years: -2,
            education: "Bachelor's".into(),
            location: "Remote".into(),
            status: "open".into(),
            created_at: Utc::now(),
        };
        let profile = row.to_profile();
        assert_eq!(profile.minimum_experience_years, 0);
        assert_eq!(profile.combined_skills().collect::<Vec<_>>(), vec!["Linux", "Terraform"]);
        assert_eq!(profile.minimum_education, "Bachelor's");
    }

    #[test]
    fn test_status_values() {
        assert!(is_valid_status("in-progress"));
        assert!(!is_valid_status("archived"));
    }
}
