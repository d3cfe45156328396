//! Candidate export: tabular report of every candidate for a job.
//!
//! [`build_report`] is pure and produces the cell content; [`xlsx::render_xlsx`]
//! turns it into a spreadsheet. Styling lives only in the renderer.

use thiserror::Error;

use crate::matching::merge::select_by_effective;
use crate::matching::models::{Candidate, Category, JobProfile, MatchDetails};

pub mod xlsx;

pub const ALL_CANDIDATES_SHEET: &str = "Candidates";
pub const FINAL_SELECTION_SHEET: &str = "Final Selection";
pub const NOT_RANKED: &str = "Not Ranked";
pub const NOT_AVAILABLE: &str = "N/A";

pub const ALL_CANDIDATES_HEADER: [&str; 9] = [
    "Candidate Name",
    "Email",
    "AI Score",
    "AI Category",
    "Recruiter Category",
    "Skills Match",
    "Experience",
    "Education",
    "Notes",
];

pub const FINAL_SELECTION_HEADER: [&str; 6] =
    ["Candidate Name", "Email", "Category", "Score", "Skills", "Notes"];

/// Final Selection sections, in output order.
pub const FINAL_SECTIONS: [(Category, &str); 2] = [
    (Category::MustInterview, "MUST INTERVIEW CANDIDATES"),
    (Category::CanInterview, "CAN INTERVIEW CANDIDATES"),
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet rendering failed: {0}")]
    Render(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    #[cfg(test)]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    JobInfo,
    Header,
    SectionLabel(Category),
    Data,
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    fn new(kind: RowKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }

    fn blank() -> Self {
        Self::new(RowKind::Blank, vec![])
    }

    fn header(columns: &[&str]) -> Self {
        Self::new(RowKind::Header, columns.iter().map(|c| Cell::text(*c)).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    #[cfg(test)]
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.kind == RowKind::Data)
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularDocument {
    pub sheets: Vec<Sheet>,
}

impl TabularDocument {
    #[cfg(test)]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Builds the two-sheet report. Rows keep the order of `candidates`.
pub fn build_report(job: &JobProfile, candidates: &[Candidate]) -> TabularDocument {
    TabularDocument {
        sheets: vec![
            build_all_candidates(job, candidates),
            build_final_selection(candidates),
        ],
    }
}

fn build_all_candidates(job: &JobProfile, candidates: &[Candidate]) -> Sheet {
    let mut rows = vec![
        job_info_row("Job Title:", &job.title),
        job_info_row("Company:", &job.company),
        job_info_row("Required Skills:", &job.required_skills.join(", ")),
        job_info_row(
            "Experience Required:",
            &format!("{} years", job.minimum_experience_years),
        ),
        Row::blank(),
        Row::header(&ALL_CANDIDATES_HEADER),
    ];

    rows.extend(candidates.iter().map(|c| {
        Row::new(
            RowKind::Data,
            vec![
                Cell::text(&c.name),
                Cell::text(&c.email),
                Cell::Number(f64::from(c.ai_ranking.score)),
                Cell::text(c.ai_ranking.category.as_str()),
                Cell::text(
                    c.recruiter_ranking
                        .category
                        .map(|cat| cat.as_str())
                        .unwrap_or(NOT_RANKED),
                ),
                Cell::text(skills_match_label(&c.ai_ranking.match_details)),
                Cell::Number(f64::from(c.experience_years)),
                Cell::text(&c.education),
                Cell::text(&c.recruiter_ranking.notes),
            ],
        )
    }));

    Sheet {
        name: ALL_CANDIDATES_SHEET.to_string(),
        rows,
    }
}

fn build_final_selection(candidates: &[Candidate]) -> Sheet {
    let mut rows = vec![Row::header(&FINAL_SELECTION_HEADER)];

    for (index, (category, label)) in FINAL_SECTIONS.iter().enumerate() {
        if index > 0 {
            rows.push(Row::blank());
        }
        rows.push(Row::new(
            RowKind::SectionLabel(*category),
            vec![Cell::text(*label)],
        ));
        rows.extend(select_by_effective(candidates, *category).into_iter().map(|c| {
            Row::new(
                RowKind::Data,
                vec![
                    Cell::text(&c.name),
                    Cell::text(&c.email),
                    Cell::text(c.effective_category().as_str()),
                    Cell::Number(f64::from(c.ai_ranking.score)),
                    Cell::text(c.skills.join(", ")),
                    Cell::text(&c.recruiter_ranking.notes),
                ],
            )
        }));
    }

    Sheet {
        name: FINAL_SELECTION_SHEET.to_string(),
        rows,
    }
}

fn job_info_row(label: &str, value: &str) -> Row {
    Row::new(RowKind::JobInfo, vec![Cell::text(label), Cell::text(value)])
}

/// `matched/total`, or `N/A` when the ranking references no skills.
pub fn skills_match_label(details: &MatchDetails) -> String {
    details
        .skills_match_fraction()
        .map(|(matched, total)| format!("{matched}/{total}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Download file name derived from the job title.
pub fn export_file_name(job_title: &str) -> String {
    let slug: String = job_title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "candidates.xlsx".to_string()
    } else {
        format!("{slug}-candidates.xlsx")
    }
}
