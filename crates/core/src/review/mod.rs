//! The QA sweep pipeline.
//!
//! Data flow: window -> dedup subjects -> brand/article fetch (with the
//! eligibility filter applied per article) -> per-author candidate set ->
//! sampler -> ticket submission.

mod author;
mod eligibility;
mod fetcher;
mod runner;
mod sampler;
mod submitter;
mod types;

pub use author::{resolve_author, AuthorIdentity};
pub use eligibility::{is_eligible, qa_subject};
pub use fetcher::{collect_candidates, existing_qa_subjects};
pub use runner::{run_sweep, run_sweep_with_context};
pub use sampler::sample_candidates;
pub use submitter::{build_ticket, submit_selected};
pub use types::*;

use thiserror::Error;

use crate::window::WindowError;
use crate::zendesk::TransportError;

/// Fatal sweep errors. Per-brand and per-article failures are handled
/// inside the pipeline and never reach this enum.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Window computation failed; nothing was fetched.
    #[error(transparent)]
    Window(#[from] WindowError),

    /// The dedup set could not be fetched; filtering would be unsound.
    #[error("Failed to fetch existing QA tickets: {0}")]
    DedupFetch(#[source] TransportError),

    /// Brand listing failed; there is nothing to scan.
    #[error("Failed to list brands: {0}")]
    BrandListing(#[source] TransportError),
}
