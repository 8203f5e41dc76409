use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub zendesk: ZendeskConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    pub ticket: TicketConfig,
}

/// Zendesk instance and credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZendeskConfig {
    /// Instance subdomain (e.g. "acme" for acme.zendesk.com)
    pub subdomain: String,
    /// Bearer token with read + ticket-write + impersonate scopes
    pub token: String,
    /// User id that QA tickets are filed as and that placeholder
    /// authors fall back to
    pub api_user_id: i64,
    /// Bound on 429 retries. Absent means retry forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rate_limit_retries: Option<u32>,
}

/// Review sweep behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewConfig {
    /// How far back an edit still qualifies for review
    #[serde(default)]
    pub window: WindowRange,
    /// Maximum tickets filed per author per sweep (default: 2)
    #[serde(default = "default_per_author_cap")]
    pub per_author_cap: usize,
    /// Author display names that never get QA tickets
    #[serde(default)]
    pub excluded_names: Vec<String>,
    /// Brand names to skip entirely
    #[serde(default)]
    pub excluded_brands: Vec<String>,
    /// Skip ticket creation, report what would have been filed
    #[serde(default)]
    pub read_only: bool,
    /// Default log filter to debug instead of info
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            window: WindowRange::default(),
            per_author_cap: default_per_author_cap(),
            excluded_names: Vec::new(),
            excluded_brands: Vec::new(),
            read_only: false,
            verbose: false,
        }
    }
}

fn default_per_author_cap() -> usize {
    2
}

/// Relative review window, e.g. `{ unit = "months", value = 1 }`.
///
/// The unit is kept as a free string here; the window calculator owns
/// the unknown-unit failure and aborts the sweep on it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowRange {
    pub unit: String,
    pub value: u32,
}

impl Default for WindowRange {
    fn default() -> Self {
        Self {
            unit: "months".to_string(),
            value: 1,
        }
    }
}

/// Static routing fields stamped on every QA ticket
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TicketConfig {
    pub brand_id: i64,
    pub form_id: i64,
    pub group_id: i64,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "normal".to_string()
}

/// Sanitized config for log output (token redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub zendesk: SanitizedZendeskConfig,
    pub review: ReviewConfig,
    pub ticket: TicketConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedZendeskConfig {
    pub subdomain: String,
    pub token_configured: bool,
    pub api_user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate_limit_retries: Option<u32>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            zendesk: SanitizedZendeskConfig {
                subdomain: config.zendesk.subdomain.clone(),
                token_configured: !config.zendesk.token.is_empty(),
                api_user_id: config.zendesk.api_user_id,
                max_rate_limit_retries: config.zendesk.max_rate_limit_retries,
            },
            review: config.review.clone(),
            ticket: config.ticket.clone(),
        }
    }
}
