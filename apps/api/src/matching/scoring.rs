//! Match scoring: pluggable, trait-based scorer that ranks a resume against a job.
//!
//! Default: `LlmMatchScorer` (remote model, JSON reply validated into `AiRanking`).
//! Offline: `KeywordMatchScorer` (pure-Rust, deterministic, no network).
//!
//! Callers go through [`score_or_fallback`], which bounds the call with a
//! timeout and recovers every failure into `AiRanking::fallback()`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::llm_client::{extract_json_object, ContentGenerator, GenerationConfig, LlmError};
use crate::matching::models::{AiRanking, Category, JobProfile, MatchDetails};
use crate::matching::prompts::build_scoring_prompt;
use crate::matching::resume_parser::{dedupe_case_insensitive, heuristic_parse, EducationLevel};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("AI request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("could not parse AI ranking: {0}")]
    Parse(String),

    #[error("scoring timed out after {0:?}")]
    Timeout(Duration),
}

/// The scorer trait. Implement this to swap backends without touching
/// the upload pipeline or handlers.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, resume_text: &str, job: &JobProfile) -> Result<AiRanking, ScoringError>;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Which resume is being scored against which job; carried into log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringTarget {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

/// Scores with a timeout and never fails: errors are logged and replaced by
/// the fallback ranking.
pub async fn score_or_fallback(
    scorer: &dyn MatchScorer,
    target: ScoringTarget,
    resume_text: &str,
    job: &JobProfile,
    timeout: Duration,
) -> AiRanking {
    let outcome = match tokio::time::timeout(timeout, scorer.score(resume_text, job)).await {
        Ok(result) => result,
        Err(_) => Err(ScoringError::Timeout(timeout)),
    };

    match outcome {
        Ok(ranking) => {
            debug!(
                resume_id = %target.resume_id,
                job_id = %target.job_id,
                "{} scorer ranked resume for '{}': {} ({})",
                scorer.backend(),
                job.title,
                ranking.score,
                ranking.category
            );
            ranking
        }
        Err(e) => {
            warn!(
                resume_id = %target.resume_id,
                job_id = %target.job_id,
                backend = scorer.backend(),
                job_title = %job.title,
                error = %e,
                "Resume scoring failed; using fallback ranking"
            );
            AiRanking::fallback()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmMatchScorer: remote model
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmMatchScorer {
    generator: Arc<dyn ContentGenerator>,
    config: GenerationConfig,
}

impl LlmMatchScorer {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            generator,
            config: GenerationConfig::default(),
        }
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(&self, resume_text: &str, job: &JobProfile) -> Result<AiRanking, ScoringError> {
        let prompt = build_scoring_prompt(resume_text, job);
        let reply = self.generator.generate(&prompt, self.config).await?;
        parse_ranking(&reply, job)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Untrusted reply shape. Every field is optional so presence can be checked explicitly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRanking {
    score: Option<Value>,
    category: Option<String>,
    match_details: Option<RawMatchDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchDetails {
    matched_skills: Option<Vec<String>>,
    missing_skills: Option<Vec<String>>,
    skills_match: Option<RawSkillsMatch>,
    experience_match: Option<bool>,
    education_match: Option<bool>,
    #[serde(alias = "analysis")]
    analysis_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSkillsMatch {
    #[serde(default)]
    matched: Vec<String>,
    #[serde(default)]
    missing: Vec<String>,
}

/// Validates a model reply into an `AiRanking`.
///
/// The JSON is sliced from the first `{` to the last `}`. Score is rounded and
/// clamped to 0-100; category must be one of the four buckets; matched and
/// missing skills are de-duplicated and made disjoint, and missing skills are
/// restricted to the job's own skill set.
pub fn parse_ranking(reply: &str, job: &JobProfile) -> Result<AiRanking, ScoringError> {
    let slice = extract_json_object(reply)
        .ok_or_else(|| ScoringError::Parse("no JSON object in response".to_string()))?;

    let raw: RawRanking =
        serde_json::from_str(slice).map_err(|e| ScoringError::Parse(e.to_string()))?;

    let score = raw
        .score
        .as_ref()
        .ok_or_else(|| missing("score"))
        .and_then(parse_score)?;

    let category_raw = raw.category.ok_or_else(|| missing("category"))?;
    let category = Category::parse_lenient(&category_raw)
        .ok_or_else(|| ScoringError::Parse(format!("unknown category '{category_raw}'")))?;

    let details = raw.match_details.ok_or_else(|| missing("matchDetails"))?;
    let experience_match = details
        .experience_match
        .ok_or_else(|| missing("matchDetails.experienceMatch"))?;
    let education_match = details
        .education_match
        .ok_or_else(|| missing("matchDetails.educationMatch"))?;

    let (nested_matched, nested_missing) = details
        .skills_match
        .map(|s| (s.matched, s.missing))
        .unwrap_or_default();
    let matched = details.matched_skills.unwrap_or(nested_matched);
    let missing_skills = details.missing_skills.unwrap_or(nested_missing);
    let (matched_skills, missing_skills) = reconcile_skills(matched, missing_skills, job);

    Ok(AiRanking {
        score,
        category,
        match_details: MatchDetails {
            matched_skills,
            missing_skills,
            experience_match,
            education_match,
            analysis_text: details.analysis_text.unwrap_or_default().trim().to_string(),
        },
    })
}

fn missing(field: &str) -> ScoringError {
    ScoringError::Parse(format!("missing required field '{field}'"))
}

fn parse_score(value: &Value) -> Result<u32, ScoringError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
    .ok_or_else(|| ScoringError::Parse(format!("score is not a number: {value}")))?;

    Ok(number.round().clamp(0.0, 100.0) as u32)
}

/// De-duplicates both lists and keeps only missing skills that the job asks
/// for and that were not also reported as matched.
fn reconcile_skills(
    matched: Vec<String>,
    missing: Vec<String>,
    job: &JobProfile,
) -> (Vec<String>, Vec<String>) {
    let matched = dedupe_case_insensitive(matched);
    let missing = dedupe_case_insensitive(missing)
        .into_iter()
        .filter(|skill| job.has_skill(skill))
        .filter(|skill| !matched.iter().any(|m| m.eq_ignore_ascii_case(skill)))
        .collect();
    (matched, missing)
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer: deterministic offline backend
// ────────────────────────────────────────────────────────────────────────────

const REQUIRED_WEIGHT: f32 = 1.0;
const PREFERRED_WEIGHT: f32 = 0.5;
const SKILLS_SHARE: f32 = 70.0;
const EXPERIENCE_SHARE: f32 = 15.0;
const EDUCATION_SHARE: f32 = 15.0;

/// Pure-Rust keyword scorer. Fast, deterministic, no network call.
///
/// Algorithm:
/// 1. Each job skill is matched when it appears as a whole token in the resume
///    text (case-insensitive). Required skills weigh 1.0, preferred 0.5.
/// 2. score = 70 × weighted skill ratio + 15 if experience is met + 15 if
///    education is met. A job with no skills counts the skill share as met.
/// 3. Category from score: ≥80 must, ≥60 can, ≥40 maybe, else reject.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(&self, resume_text: &str, job: &JobProfile) -> Result<AiRanking, ScoringError> {
        Ok(compute_keyword_ranking(resume_text, job))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn compute_keyword_ranking(resume_text: &str, job: &JobProfile) -> AiRanking {
    let weighted = job
        .required_skills
        .iter()
        .map(|s| (s, REQUIRED_WEIGHT))
        .chain(job.preferred_skills.iter().map(|s| (s, PREFERRED_WEIGHT)));

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut total_weight = 0.0_f32;
    let mut matched_weight = 0.0_f32;

    for (skill, weight) in weighted {
        let skill = skill.trim();
        if skill.is_empty() {
            continue;
        }
        total_weight += weight;
        if mentions_skill(resume_text, skill) {
            matched_weight += weight;
            matched_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    let skill_ratio = if total_weight > 0.0 {
        matched_weight / total_weight
    } else {
        1.0
    };

    let parsed = heuristic_parse(resume_text);
    let experience_match = parsed.experience_years >= job.minimum_experience_years;
    let education_match = match EducationLevel::highest_in(&job.minimum_education) {
        None => true,
        Some(required) => EducationLevel::highest_in(resume_text).is_some_and(|has| has >= required),
    };

    let mut raw_score = skill_ratio * SKILLS_SHARE;
    if experience_match {
        raw_score += EXPERIENCE_SHARE;
    }
    if education_match {
        raw_score += EDUCATION_SHARE;
    }
    let score = (raw_score.round() as u32).min(100);

    let (matched_skills, missing_skills) = reconcile_skills(matched_skills, missing_skills, job);
    let analysis_text = build_analysis(score, &missing_skills, experience_match, education_match);

    AiRanking {
        score,
        category: Category::for_score(score),
        match_details: MatchDetails {
            matched_skills,
            missing_skills,
            experience_match,
            education_match,
            analysis_text,
        },
    }
}

/// Whole-token, case-insensitive mention check that copes with `C++`, `Node.js`, `C#`.
fn mentions_skill(text: &str, skill: &str) -> bool {
    let pattern = format!(
        r"(?i)(^|[^\w+#]){}($|[^\w+#])",
        regex::escape(skill)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(text))
        .unwrap_or_else(|_| text.to_lowercase().contains(&skill.to_lowercase()))
}

fn build_analysis(
    score: u32,
    missing_skills: &[String],
    experience_match: bool,
    education_match: bool,
) -> String {
    let top_gaps: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();

    let mut analysis = if score >= 80 {
        "Strong keyword fit: the resume covers the key job requirements.".to_string()
    } else if top_gaps.is_empty() {
        format!("Moderate keyword fit ({score}/100).")
    } else {
        format!(
            "Keyword fit {score}/100. Missing: {}.",
            top_gaps.join(", ")
        )
    };
    if !experience_match {
        analysis.push_str(" Experience requirement not evidenced.");
    }
    if !education_match {
        analysis.push_str(" Education requirement not evidenced.");
    }
    analysis
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn job() -> JobProfile {
        JobProfile {
            title: "Full Stack Developer".into(),
            company: "Acme".into(),
            description: "Build web apps".into(),
            required_skills: vec!["React".into(), "Node.js".into()],
            preferred_skills: vec!["GraphQL".into()],
            minimum_experience_years: 3,
            minimum_education: "Bachelor's".into(),
            location: "Remote".into(),
        }
    }

    /// Replays a canned reply and records the prompt and config it was given.
    struct FakeGenerator {
        reply: Result<String, fn() -> LlmError>,
        seen: Mutex<Vec<(String, GenerationConfig)>>,
    }

    impl FakeGenerator {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(vec![]),
            }
        }

        fn failing(err: fn() -> LlmError) -> Self {
            Self {
                reply: Err(err),
                seen: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str, config: GenerationConfig) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push((prompt.to_string(), config));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    struct SlowScorer;

    #[async_trait]
    impl MatchScorer for SlowScorer {
        async fn score(&self, _: &str, _: &JobProfile) -> Result<AiRanking, ScoringError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(AiRanking {
                score: 99,
                category: Category::MustInterview,
                match_details: MatchDetails::default(),
            })
        }

        fn backend(&self) -> &'static str {
            "slow"
        }
    }

    const VALID_REPLY: &str = r#"Here is the analysis:
```json
{
  "score": 87,
  "category": "must-interview",
  "matchDetails": {
    "matchedSkills": ["React", "Node.js"],
    "missingSkills": ["GraphQL"],
    "experienceMatch": true,
    "educationMatch": true,
    "analysisText": "Strong frontend and backend background."
  }
}
```"#;

    fn target() -> ScoringTarget {
        ScoringTarget {
            resume_id: Uuid::nil(),
            job_id: Uuid::nil(),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn assert_fallback(ranking: &AiRanking) {
        assert_eq!(ranking, &AiRanking::fallback());
    }

    async fn llm_score(generator: FakeGenerator, text: &str) -> AiRanking {
        let scorer = LlmMatchScorer::new(Arc::new(generator));
        score_or_fallback(&scorer, target(), text, &job(), Duration::from_secs(5)).await
    }

    #[test]
    fn test_parse_valid_reply_with_commentary() {
        let ranking = parse_ranking(VALID_REPLY, &job()).unwrap();
        assert_eq!(ranking.score, 87);
        assert_eq!(ranking.category, Category::MustInterview);
        assert_eq!(ranking.match_details.matched_skills, vec!["React", "Node.js"]);
        assert_eq!(ranking.match_details.missing_skills, vec!["GraphQL"]);
        assert!(ranking.match_details.experience_match);
        assert!(ranking.match_details.education_match);
        assert_eq!(
            ranking.match_details.analysis_text,
            "Strong frontend and backend background."
        );
    }

    #[test]
    fn test_parse_score_is_rounded_and_clamped() {
        let reply = |score: &str| {
            format!(
                r#"{{"score": {score}, "category": "reject", "matchDetails": {{"experienceMatch": false, "educationMatch": false}}}}"#
            )
        };
        assert_eq!(parse_ranking(&reply("150"), &job()).unwrap().score, 100);
        assert_eq!(parse_ranking(&reply("-7"), &job()).unwrap().score, 0);
        assert_eq!(parse_ranking(&reply("72.6"), &job()).unwrap().score, 73);
        assert_eq!(parse_ranking(&reply("\"64\""), &job()).unwrap().score, 64);
        assert!(parse_ranking(&reply("\"high\""), &job()).is_err());
        assert!(parse_ranking(&reply("null"), &job()).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_required_fields() {
        let cases = [
            r#"{"category": "reject", "matchDetails": {"experienceMatch": true, "educationMatch": true}}"#,
            r#"{"score": 10, "matchDetails": {"experienceMatch": true, "educationMatch": true}}"#,
            r#"{"score": 10, "category": "reject"}"#,
            r#"{"score": 10, "category": "reject", "matchDetails": {"educationMatch": true}}"#,
            r#"{"score": 10, "category": "reject", "matchDetails": {"experienceMatch": true}}"#,
        ];
        for case in cases {
            let err = parse_ranking(case, &job()).unwrap_err();
            assert!(matches!(err, ScoringError::Parse(_)), "{case} gave {err:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category_and_non_json() {
        let bad_category = r#"{"score": 10, "category": "hire", "matchDetails": {"experienceMatch": true, "educationMatch": true}}"#;
        assert!(parse_ranking(bad_category, &job()).is_err());
        assert!(parse_ranking("The candidate looks great!", &job()).is_err());
        assert!(parse_ranking("{ not json at all }", &job()).is_err());
    }

    #[test]
    fn test_parse_accepts_nested_skills_match_and_analysis_alias() {
        let reply = r#"{
            "score": 55,
            "category": "Maybe_Interview",
            "matchDetails": {
                "skillsMatch": {"matched": ["React"], "missing": ["Node.js"]},
                "experienceMatch": false,
                "educationMatch": true,
                "analysis": "Partial fit."
            }
        }"#;
        let ranking = parse_ranking(reply, &job()).unwrap();
        assert_eq!(ranking.category, Category::MaybeInterview);
        assert_eq!(ranking.match_details.matched_skills, vec!["React"]);
        assert_eq!(ranking.match_details.missing_skills, vec!["Node.js"]);
        assert_eq!(ranking.match_details.analysis_text, "Partial fit.");
    }

    #[test]
    fn test_parse_keeps_skill_sets_disjoint_and_scoped_to_job() {
        let reply = r#"{
            "score": 80,
            "category": "must-interview",
            "matchDetails": {
                "matchedSkills": ["React", "Node.js", "react"],
                "missingSkills": ["node.js", "MongoDB", "GraphQL", "GraphQL"],
                "experienceMatch": true,
                "educationMatch": true,
                "analysisText": ""
            }
        }"#;
        let ranking = parse_ranking(reply, &job()).unwrap();
        let details = &ranking.match_details;
        assert_eq!(details.matched_skills, vec!["React", "Node.js"]);
        assert_eq!(details.missing_skills, vec!["GraphQL"]);
        for m in &details.matched_skills {
            assert!(!details.missing_skills.iter().any(|s| s.eq_ignore_ascii_case(m)));
        }
    }

    #[tokio::test]
    async fn test_llm_scorer_sends_prompt_with_low_temperature() {
        let generator = Arc::new(FakeGenerator::replying(VALID_REPLY));
        let scorer = LlmMatchScorer::new(generator.clone());
        let ranking = score_or_fallback(&scorer, target(), "Skills: React", &job(), Duration::from_secs(5)).await;
        assert_eq!(ranking.score, 87);

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one remote call per score");
        let (prompt, config) = &seen[0];
        assert!(prompt.contains("Skills: React"));
        assert!(prompt.contains("Title: Full Stack Developer"));
        assert!(config.temperature <= 0.3);
        assert_eq!(config.max_output_tokens, 1024);
    }

    #[tokio::test]
    async fn test_network_error_yields_fallback() {
        let generator = FakeGenerator::failing(|| LlmError::Api {
            status: 503,
            message: "unavailable".into(),
        });
        assert_fallback(&llm_score(generator, "resume").await);
    }

    #[tokio::test]
    async fn test_empty_content_yields_fallback() {
        let generator = FakeGenerator::failing(|| LlmError::EmptyContent);
        assert_fallback(&llm_score(generator, "resume").await);
    }

    #[tokio::test]
    async fn test_unparsable_reply_yields_fallback() {
        for reply in ["", "no braces", "{broken", "{\"score\": }", "[1, 2, 3]"] {
            let ranking = llm_score(FakeGenerator::replying(reply), "resume").await;
            assert_fallback(&ranking);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_yields_fallback() {
        let ranking =
            score_or_fallback(&SlowScorer, target(), "resume", &job(), Duration::from_secs(3)).await;
        assert_fallback(&ranking);
    }

    #[tokio::test]
    async fn test_fallback_warning_names_resume_and_job() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let target = ScoringTarget {
            resume_id: Uuid::from_u128(0xA1),
            job_id: Uuid::from_u128(0xB2),
        };
        let scorer = LlmMatchScorer::new(Arc::new(FakeGenerator::failing(|| LlmError::EmptyContent)));
        let ranking = score_or_fallback(&scorer, target, "resume", &job(), Duration::from_secs(5)).await;
        assert_fallback(&ranking);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("using fallback ranking"), "{output}");
        assert!(output.contains(&format!("resume_id={}", target.resume_id)), "{output}");
        assert!(output.contains(&format!("job_id={}", target.job_id)), "{output}");
    }

    #[tokio::test]
    async fn test_every_outcome_is_bounded_and_categorized() {
        let replies = [
            VALID_REPLY.to_string(),
            r#"{"score": 1000, "category": "reject", "matchDetails": {"experienceMatch": false, "educationMatch": false}}"#.to_string(),
            "garbage".to_string(),
        ];
        for reply in replies {
            let ranking = llm_score(FakeGenerator::replying(&reply), "resume").await;
            assert!(ranking.score <= 100);
            assert!(Category::ALL.contains(&ranking.category));
        }
    }

    #[tokio::test]
    async fn test_keyword_scorer_scenario_react_node() {
        let resume = "Jane Doe\nSkills: React, Node.js, MongoDB\n4 years of experience\nB.Sc. Computer Science";
        let ranking = score_or_fallback(&KeywordMatchScorer, target(), resume, &job(), Duration::from_secs(5)).await;

        let details = &ranking.match_details;
        assert_eq!(details.matched_skills, vec!["React", "Node.js"]);
        assert_eq!(details.missing_skills, vec!["GraphQL"]);
        assert!(!details.missing_skills.iter().any(|s| s == "MongoDB"));
        assert!(details.experience_match);
        assert!(details.education_match);
        // 70 * (2.0 / 2.5) + 15 + 15 = 86
        assert_eq!(ranking.score, 86);
        assert_eq!(ranking.category, Category::MustInterview);
    }

    #[tokio::test]
    async fn test_keyword_experience_independent_of_skills() {
        let resume = "Skills: React, Node.js\n1 year of experience";
        let ranking = KeywordMatchScorer.score(resume, &job()).await.unwrap();
        assert_eq!(ranking.match_details.matched_skills, vec!["React", "Node.js"]);
        assert!(!ranking.match_details.experience_match);
    }

    #[tokio::test]
    async fn test_keyword_no_match_rejects() {
        let resume = "Pastry chef. Skills: baking, plating";
        let ranking = KeywordMatchScorer.score(resume, &job()).await.unwrap();
        assert!(ranking.match_details.matched_skills.is_empty());
        assert_eq!(ranking.match_details.missing_skills.len(), 3);
        assert_eq!(ranking.category, Category::Reject);
        assert!(ranking.match_details.analysis_text.contains("Missing"));
    }

    #[test]
    fn test_mentions_skill_token_boundaries() {
        assert!(mentions_skill("Proficient in C++ and Rust", "C++"));
        assert!(mentions_skill("Node.js, Express", "node.js"));
        assert!(!mentions_skill("JavaScript developer", "Java"));
        assert!(mentions_skill("Java, Spring", "Java"));
        assert!(!mentions_skill("C# developer", "C"));
    }
}
