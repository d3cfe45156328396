// Matching prompt templates. Placeholders are `{name}` and are filled in a
// single pass by the builders below.

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::matching::models::JobProfile;

pub const SCORING_PROMPT_TEMPLATE: &str = r#"I need to analyze how well a candidate's resume matches a job description.

JOB DETAILS:
Title: {title}
Description: {description}
Required Skills: {required_skills}
Preferred Skills: {preferred_skills}
Required Experience: {experience} years
Required Education: {education}

RESUME TEXT:
{resume_text}

Analyze the match and return a JSON object with exactly these fields:
{
  "score": integer from 0 to 100 representing the overall match,
  "category": one of "must-interview", "can-interview", "maybe-interview", "reject",
  "matchDetails": {
    "matchedSkills": [job skills (required or preferred) found in the resume],
    "missingSkills": [job skills (required or preferred) NOT found in the resume],
    "experienceMatch": true if the experience requirement is met, otherwise false,
    "educationMatch": true if the education requirement is met, otherwise false,
    "analysisText": brief analysis of strengths and weaknesses
  }
}

{json_only}"#;

pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract structured attributes from the resume text below.

RESUME TEXT:
{resume_text}

Return a JSON object with exactly these fields:
{
  "skills": [every technical and professional skill listed in the resume],
  "experienceYears": total years of professional experience as an integer (0 if unknown),
  "education": highest degree attained, e.g. "PhD", "Master's", "Bachelor's", or "" if unknown
}

{json_only}"#;

/// Builds the single scoring instruction for one resume against one job.
pub fn build_scoring_prompt(resume_text: &str, job: &JobProfile) -> String {
    let required_skills = job.required_skills.join(", ");
    let preferred_skills = job.preferred_skills.join(", ");
    let experience = job.minimum_experience_years.to_string();
    fill_template(
        SCORING_PROMPT_TEMPLATE,
        &[
            ("title", job.title.as_str()),
            ("description", job.description.as_str()),
            ("required_skills", required_skills.as_str()),
            ("preferred_skills", preferred_skills.as_str()),
            ("experience", experience.as_str()),
            ("education", job.minimum_education.as_str()),
            ("resume_text", resume_text),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub fn build_resume_parse_prompt(resume_text: &str) -> String {
    fill_template(
        RESUME_PARSE_PROMPT_TEMPLATE,
        &[("resume_text", resume_text), ("json_only", JSON_ONLY_INSTRUCTION)],
    )
}
