//! The eligibility predicate.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::author::AuthorIdentity;

/// Subject line for a QA ticket. This exact string is also the dedup key
/// against existing tickets, so the filter and the submitter must build
/// it through this one helper.
pub fn qa_subject(title: &str) -> String {
    format!("Quality Assessment: {}", title)
}

/// Whether an article/author pair qualifies for a QA ticket this period.
///
/// Pure predicate; short-circuits on the first failing condition:
/// excluded author name, edit not strictly after the cutoff, or a ticket
/// with this article's subject already filed this period.
pub fn is_eligible(
    author: &AuthorIdentity,
    updated_at: DateTime<Utc>,
    title: &str,
    cutoff: DateTime<Utc>,
    excluded_names: &[String],
    existing_subjects: &HashSet<String>,
) -> bool {
    if excluded_names.iter().any(|n| n == author.display_name()) {
        return false;
    }
    if updated_at <= cutoff {
        return false;
    }
    !existing_subjects.contains(&qa_subject(title))
}
