//! Resume attribute parser: derives the structured fields stored with each upload.
//!
//! Tries the model first when one is configured and falls back to a
//! deterministic heuristic parser on any failure.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{extract_json_object, ContentGenerator, GenerationConfig, LlmError};
use crate::matching::prompts::build_resume_parse_prompt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
}

/// Degree levels, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

static EDUCATION_PATTERNS: LazyLock<Vec<(EducationLevel, Regex)>> = LazyLock::new(|| {
    [
        (
            EducationLevel::Doctorate,
            r"(?i)\b(ph\.?\s?d\b|doctorate\b|doctoral\b)",
        ),
        (
            EducationLevel::Master,
            r"(?i)\b(masters?\b|master's|m\.\s?sc\b|msc\b|m\.\s?tech\b|mtech\b|mba\b|m\.\s?s\.|m\.\s?eng\b)",
        ),
        (
            EducationLevel::Bachelor,
            r"(?i)\b(bachelors?\b|bachelor's|b\.\s?sc\b|bsc\b|b\.\s?tech\b|btech\b|b\.\s?e\.|b\.\s?a\.|b\.\s?s\.|undergraduate\b)",
        ),
        (EducationLevel::Associate, r"(?i)\bassociate'?s?\s+(degree|of)\b"),
        (EducationLevel::HighSchool, r"(?i)\b(high\s+school|diploma|secondary)\b"),
    ]
    .into_iter()
    .map(|(level, pattern)| (level, Regex::new(pattern).expect("static education regex")))
    .collect()
});

static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").expect("static experience regex")
});

static SKILLS_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:technical\s+|key\s+|core\s+)?skills?\s*[:\-]\s*(.+)$")
        .expect("static skills regex")
});

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate",
            EducationLevel::Bachelor => "Bachelor's",
            EducationLevel::Master => "Master's",
            EducationLevel::Doctorate => "PhD",
        }
    }

    /// Highest level mentioned anywhere in `text`.
    pub fn highest_in(text: &str) -> Option<EducationLevel> {
        EDUCATION_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(level, _)| *level)
    }
}

/// Parses attributes with the model when available, else heuristically.
pub async fn parse_resume_attributes(
    generator: Option<&dyn ContentGenerator>,
    text: &str,
) -> ParsedResume {
    let Some(generator) = generator else {
        return heuristic_parse(text);
    };

    match parse_with_model(generator, text).await {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Resume attribute parsing via LLM failed, using heuristics: {e}");
            heuristic_parse(text)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParsedResume {
    skills: Option<Vec<String>>,
    experience_years: Option<f64>,
    education: Option<String>,
}

async fn parse_with_model(
    generator: &dyn ContentGenerator,
    text: &str,
) -> Result<ParsedResume, LlmError> {
    let prompt = build_resume_parse_prompt(text);
    let reply = generator.generate(&prompt, GenerationConfig::default()).await?;
    let slice = extract_json_object(&reply).ok_or(LlmError::NoJsonObject)?;
    let raw: RawParsedResume = serde_json::from_str(slice)?;

    Ok(ParsedResume {
        skills: dedupe_case_insensitive(raw.skills.unwrap_or_default()),
        experience_years: raw
            .experience_years
            .filter(|y| y.is_finite() && *y > 0.0)
            .map(|y| y.round().min(60.0) as u32)
            .unwrap_or(0),
        education: raw.education.unwrap_or_default().trim().to_string(),
    })
}

/// Deterministic parser: `Skills:` lines, largest "N years" figure, highest degree keyword.
pub fn heuristic_parse(text: &str) -> ParsedResume {
    let skills = text
        .lines()
        .filter_map(|line| SKILLS_LINE_PATTERN.captures(line))
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| m.as_str().split([',', ';', '|', '•']))
        .map(|s| s.trim().trim_end_matches('.').trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    let experience_years = EXPERIENCE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let education = EducationLevel::highest_in(text)
        .map(|level| level.label().to_string())
        .unwrap_or_default();

    ParsedResume {
        skills: dedupe_case_insensitive(skills),
        experience_years,
        education,
    }
}

/// Drops blank and case-insensitive duplicate entries, keeping the first spelling.
pub fn dedupe_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(trimmed.to_string());
    }
    out
}
