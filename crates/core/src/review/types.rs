//! Types threaded through the sweep pipeline.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::window::ReviewWindow;

use super::author::AuthorIdentity;

/// Immutable context for one sweep: configuration plus the computed
/// window. Passed explicitly through every component call.
#[derive(Debug, Clone)]
pub struct SweepContext {
    pub config: Config,
    pub window: ReviewWindow,
}

/// One article that passed the eligibility filter.
#[derive(Debug, Clone)]
pub struct CandidateArticle {
    pub id: i64,
    pub title: String,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
}

/// Eligible articles accumulated per author during a sweep. An article
/// lands in at most one author's list.
pub type CandidateSet = HashMap<AuthorIdentity, Vec<CandidateArticle>>;

/// Result of one ticket submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ticket created with this id.
    Created(i64),
    /// Read-only mode; no write was performed.
    DryRun,
    /// Submission failed; other submissions were unaffected.
    Failed(String),
}

/// Per-article record in the end-of-sweep report.
#[derive(Debug, Clone)]
pub struct SubmittedArticle {
    pub title: String,
    pub outcome: SubmitOutcome,
}

/// End-of-sweep report.
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Eligible articles found across all brands, before sampling.
    pub eligible_count: usize,
    /// Submission outcomes grouped by author identity.
    pub per_author: HashMap<AuthorIdentity, Vec<SubmittedArticle>>,
}

impl SweepReport {
    /// Articles selected by the sampler and handed to the submitter.
    pub fn submitted_count(&self) -> usize {
        self.per_author.values().map(Vec::len).sum()
    }

    pub fn created_count(&self) -> usize {
        self.outcome_count(|o| matches!(o, SubmitOutcome::Created(_)))
    }

    pub fn failed_count(&self) -> usize {
        self.outcome_count(|o| matches!(o, SubmitOutcome::Failed(_)))
    }

    pub fn dry_run_count(&self) -> usize {
        self.outcome_count(|o| matches!(o, SubmitOutcome::DryRun))
    }

    fn outcome_count(&self, pred: impl Fn(&SubmitOutcome) -> bool) -> usize {
        self.per_author
            .values()
            .flatten()
            .filter(|a| pred(&a.outcome))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = SweepReport::default();
        report.per_author.insert(
            AuthorIdentity::Resolved {
                id: 9,
                name: "Alice".to_string(),
            },
            vec![
                SubmittedArticle {
                    title: "A".to_string(),
                    outcome: SubmitOutcome::Created(1),
                },
                SubmittedArticle {
                    title: "B".to_string(),
                    outcome: SubmitOutcome::Failed("API returned status 500".to_string()),
                },
            ],
        );
        report.per_author.insert(
            AuthorIdentity::ContentBlockEdit,
            vec![SubmittedArticle {
                title: "C".to_string(),
                outcome: SubmitOutcome::DryRun,
            }],
        );

        assert_eq!(report.submitted_count(), 3);
        assert_eq!(report.created_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.dry_run_count(), 1);
    }
}
