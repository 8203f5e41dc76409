use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Zendesk credentials are present
/// - Per-author cap and window value are at least 1
///
/// The window unit string is not checked here; the window calculator
/// owns that failure and aborts the sweep with it.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.zendesk.subdomain.is_empty() {
        return Err(ConfigError::ValidationError(
            "zendesk.subdomain cannot be empty".to_string(),
        ));
    }

    if config.zendesk.token.is_empty() {
        return Err(ConfigError::ValidationError(
            "zendesk.token cannot be empty".to_string(),
        ));
    }

    if config.review.per_author_cap == 0 {
        return Err(ConfigError::ValidationError(
            "review.per_author_cap cannot be 0".to_string(),
        ));
    }

    if config.review.window.value == 0 {
        return Err(ConfigError::ValidationError(
            "review.window.value cannot be 0".to_string(),
        ));
    }

    Ok(())
}
