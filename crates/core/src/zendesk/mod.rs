//! Zendesk REST API integration.
//!
//! Everything that talks to the instance lives here: the authenticated
//! transport with 429 handling, the typed `HelpdeskApi` surface used by the
//! sweep, and the cleanup of the broken incremental pagination links.

mod client;
mod pagination;
mod transport;
mod types;

pub use client::{HelpdeskApi, ZendeskClient};
pub use pagination::normalize_next_page;
pub use transport::Transport;
pub use types::*;

use thiserror::Error;

/// Errors surfaced by calls against the instance.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx status other than 429.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Rate limited past the configured retry bound.
    #[error("Rate limited: gave up after {0} retries")]
    RetriesExhausted(u32),

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
