//! Core matching data model: job profile, AI ranking, recruiter override, candidate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matching::merge::effective_category;

pub const FALLBACK_SCORE: u32 = 50;
pub const FALLBACK_ANALYSIS: &str = "AI analysis unavailable - needs manual review.";

/// Interview recommendation bucket. Serialized in kebab-case (`must-interview`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MustInterview,
    CanInterview,
    MaybeInterview,
    Reject,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MustInterview,
        Category::CanInterview,
        Category::MaybeInterview,
        Category::Reject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MustInterview => "must-interview",
            Category::CanInterview => "can-interview",
            Category::MaybeInterview => "maybe-interview",
            Category::Reject => "reject",
        }
    }

    /// Lenient parse for untrusted input: case-insensitive, `_` or spaces accepted for `-`.
    pub fn parse_lenient(raw: &str) -> Option<Category> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
    }

    /// Bucket for a 0-100 score, used by the deterministic scorer.
    pub fn for_score(score: u32) -> Category {
        match score {
            80.. => Category::MustInterview,
            60..=79 => Category::CanInterview,
            40..=59 => Category::MaybeInterview,
            _ => Category::Reject,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse_lenient(s).ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// The job requirements a resume is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub minimum_experience_years: u32,
    pub minimum_education: String,
    pub location: String,
}

impl JobProfile {
    /// Required then preferred skills.
    pub fn combined_skills(&self) -> impl Iterator<Item = &str> {
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .map(String::as_str)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.combined_skills()
            .any(|s| s.trim().eq_ignore_ascii_case(skill.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: bool,
    pub education_match: bool,
    pub analysis_text: String,
}

impl MatchDetails {
    /// `(matched, matched + missing)`, or `None` when no skills were referenced.
    pub fn skills_match_fraction(&self) -> Option<(usize, usize)> {
        let matched = self.matched_skills.len();
        let total = matched + self.missing_skills.len();
        (total > 0).then_some((matched, total))
    }
}

/// Model-produced fit assessment for one resume against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRanking {
    pub score: u32,
    pub category: Category,
    pub match_details: MatchDetails,
}

impl AiRanking {
    /// Safe default used whenever the model cannot produce a valid ranking.
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            category: Category::MaybeInterview,
            match_details: MatchDetails {
                matched_skills: vec![],
                missing_skills: vec![],
                experience_match: false,
                education_match: false,
                analysis_text: FALLBACK_ANALYSIS.to_string(),
            },
        }
    }
}

/// Recruiter override. `category: None` is the unset sentinel (`""` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterRanking {
    #[serde(
        serialize_with = "serialize_optional_category",
        deserialize_with = "deserialize_optional_category",
        default
    )]
    pub category: Option<Category>,
    #[serde(default)]
    pub notes: String,
}

impl RecruiterRanking {
    /// Builds an override from stored/wire values where `""` means unset.
    pub fn from_parts(category: &str, notes: impl Into<String>) -> Result<Self, String> {
        let category = if category.trim().is_empty() {
            None
        } else {
            Some(category.parse::<Category>()?)
        };
        Ok(Self {
            category,
            notes: notes.into(),
        })
    }

    pub fn category_str(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}

fn serialize_optional_category<S: Serializer>(
    category: &Option<Category>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.map(|c| c.as_str()).unwrap_or(""))
}

fn deserialize_optional_category<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Category>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A resume with its derived attributes and both rankings, as consumed by
/// list views and export.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: String,
    pub ai_ranking: AiRanking,
    pub recruiter_ranking: RecruiterRanking,
}

impl Candidate {
    pub fn effective_category(&self) -> Category {
        effective_category(&self.ai_ranking, Some(&self.recruiter_ranking))
    }
}
