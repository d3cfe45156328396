//! Ranking merge policy: the recruiter's override wins, otherwise the AI category stands.
//!
//! Every consumer that groups or labels candidates (list views, export) goes
//! through [`effective_category`].

use crate::matching::models::{AiRanking, Candidate, Category, RecruiterRanking};

/// Returns the recruiter category when one is set, else the AI category.
pub fn effective_category(ai: &AiRanking, recruiter: Option<&RecruiterRanking>) -> Category {
    recruiter
        .and_then(|r| r.category)
        .unwrap_or(ai.category)
}

/// Candidates whose effective category is `category`, in input order.
pub fn select_by_effective(candidates: &[Candidate], category: Category) -> Vec<&Candidate> {
    candidates
        .iter()
        .filter(|c| c.effective_category() == category)
        .collect()
}

/// Partitions candidates into all four categories (in `Category::ALL` order),
/// preserving input order within each bucket.
pub fn group_by_effective(candidates: &[Candidate]) -> Vec<(Category, Vec<&Candidate>)> {
    Category::ALL
        .into_iter()
        .map(|category| (category, select_by_effective(candidates, category)))
        .collect()
}
