//! Sweep orchestration.

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::window::ReviewWindow;
use crate::zendesk::HelpdeskApi;

use super::fetcher::{collect_candidates, existing_qa_subjects};
use super::sampler::sample_candidates;
use super::submitter::submit_selected;
use super::types::{SweepContext, SweepReport};
use super::ReviewError;

/// Run one full QA sweep against the current wall clock.
pub async fn run_sweep(api: &dyn HelpdeskApi, config: Config) -> Result<SweepReport, ReviewError> {
    let window = ReviewWindow::compute(Utc::now(), &config.review.window)?;
    let ctx = SweepContext { config, window };
    run_sweep_with_context(api, &ctx).await
}

/// Sweep with a precomputed context. Lets tests pin the clock.
///
/// Startup is an explicit phase: the window is already computed and the
/// dedup set is fetched before any brand is touched; a failure in either
/// short-circuits the whole run.
pub async fn run_sweep_with_context(
    api: &dyn HelpdeskApi,
    ctx: &SweepContext,
) -> Result<SweepReport, ReviewError> {
    info!(
        period = %ctx.window.period_tag,
        cutoff = %ctx.window.cutoff,
        read_only = ctx.config.review.read_only,
        "Starting QA sweep"
    );

    let existing = existing_qa_subjects(api, &ctx.window.period_tag)
        .await
        .map_err(ReviewError::DedupFetch)?;
    info!(existing = existing.len(), "Loaded existing QA ticket subjects for the period");

    let candidates = collect_candidates(api, &ctx.config.review, &ctx.window, &existing)
        .await
        .map_err(ReviewError::BrandListing)?;
    let eligible_count = candidates.values().map(Vec::len).sum::<usize>();
    info!(
        eligible = eligible_count,
        authors = candidates.len(),
        "Collected candidate articles"
    );

    let cap = ctx.config.review.per_author_cap;
    let selected: Vec<_> = candidates
        .into_iter()
        .map(|(author, articles)| (author, sample_candidates(articles, cap)))
        .collect();

    let per_author = submit_selected(api, &ctx.config, &ctx.window, &selected).await;

    let report = SweepReport {
        eligible_count,
        per_author,
    };
    info!(
        eligible = report.eligible_count,
        selected = report.submitted_count(),
        created = report.created_count(),
        failed = report.failed_count(),
        "QA sweep finished"
    );
    Ok(report)
}
